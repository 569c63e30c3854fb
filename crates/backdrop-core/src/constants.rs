// Tuning constants shared by the particle field, pointer and renderer.

// Overscan margin: coordinates wrap once they leave [-OVERSCAN, 1 + OVERSCAN]
pub const OVERSCAN: f32 = 0.2;

// Particle sampling ranges (radius in CSS px, velocities in field units per second)
pub const RADIUS_MIN: f32 = 1.5;
pub const RADIUS_SPAN: f32 = 2.5;
pub const DEPTH_MIN: f32 = 0.3;
pub const DEPTH_SPAN: f32 = 0.7;
pub const HUE_MIN: f32 = 180.0;
pub const HUE_SPAN: f32 = 120.0;
pub const ALPHA_MIN: f32 = 0.25;
pub const ALPHA_SPAN: f32 = 0.4;
pub const DRIFT_Y_MIN: f32 = 0.04;
pub const DRIFT_Y_SPAN: f32 = 0.12;
pub const DRIFT_X_MAX: f32 = 0.03;

// Longest simulated step; keeps a stalled tab from teleporting particles
pub const MAX_STEP_SEC: f32 = 0.25;

// Pointer smoothing
pub const POINTER_EASING: f32 = 0.04;
pub const POINTER_VELOCITY_DECAY: f32 = 0.9;
pub const POINTER_SPEED_GAIN: f32 = 18.0;

// Parallax offset amplitude in CSS px before depth scaling
pub const PARALLAX_X_PX: f32 = 8.0;
pub const PARALLAX_Y_PX: f32 = 6.0;

// Background glow
pub const GRADIENT_REFRESH_PX: f32 = 24.0;
pub const GRADIENT_RADIUS_FRACTION: f32 = 0.6;
pub const GRADIENT_HUE: f32 = 220.0;
pub const GRADIENT_ALPHA_DARK: f32 = 0.10;
pub const GRADIENT_ALPHA_LIGHT: f32 = 0.06;

// Proximity links
pub const LINK_ALPHA_MAX: f32 = 0.15;
pub const LINK_WIDTH_PX: f32 = 0.6;

// Scroll fade reaches zero after this fraction of the viewport height
pub const SCROLL_FADE_SPAN: f32 = 0.9;

// Device pixel ratio cap for capable devices
pub const DPR_CAP: f64 = 1.5;

// Admission thresholds
pub const SMALL_VIEWPORT_PX: f64 = 768.0;
pub const TOUCH_VIEWPORT_PX: f64 = 1024.0;
pub const CONSTRAINED_MEMORY_GB: f64 = 4.0;
pub const CONSTRAINED_CORES: u32 = 4;
pub const MIN_MEMORY_GB: f64 = 2.0;
pub const MIN_CORES: u32 = 2;

// Throttle phase resets after this many missed intervals
pub const THROTTLE_RESYNC_INTERVALS: f64 = 4.0;

// Debug overlay
pub const FPS_WINDOW_MS: f64 = 1000.0;
pub const DEBUG_TEXT_POS: [f32; 2] = [12.0, 20.0];

// Glow is rebuilt once the scroll fade drifts this far from its build value
pub const GLOW_FADE_STEP: f32 = 0.1;
