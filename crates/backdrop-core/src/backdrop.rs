//! Backdrop lifecycle: admission at mount, the per-frame step, and total
//! release at unmount.
//!
//! A `Backdrop` is `Disabled` (never admitted, holds nothing), `Running`
//! (listeners registered, one frame pending) or `Stopped` (after
//! [`Backdrop::unmount`]). Both `Disabled` and `Stopped` are terminal.

use crate::capabilities::{effective_dpr, Admission, EnvironmentCapabilities, Inadmissible, Viewport};
use crate::color::Hsla;
use crate::config::{BackdropOptions, Preset, Theme};
use crate::constants::*;
use crate::gradient::GradientCache;
use crate::host::{EventKind, Host, HostEvent};
use crate::particle::{Particle, ParticleField};
use crate::pointer::PointerState;
use crate::surface::{ColorStop, Surface};
use crate::throttle::{FpsMeter, FrameThrottle};
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropState {
    Disabled,
    Running,
    Stopped,
}

/// What a frame callback did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    /// Too soon after the previous draw.
    Throttled,
    /// Document hidden; next frame scheduled, nothing drawn.
    Hidden,
    /// Not running; nothing scheduled.
    Inactive,
}

enum Phase<S: Surface, H: Host> {
    Disabled(Inadmissible),
    Running(Box<Running<S, H>>),
    Stopped,
}

pub struct Backdrop<S: Surface, H: Host> {
    phase: Phase<S, H>,
}

struct Running<S: Surface, H: Host> {
    surface: S,
    listeners: SmallVec<[H::Listener; 4]>,
    pending_frame: Option<H::Frame>,

    field: ParticleField,
    pointer: PointerState,
    throttle: FrameThrottle,
    gradient: GradientCache<S::Gradient>,
    fps: FpsMeter,

    preset: Preset,
    constrained: bool,
    viewport: Viewport,
    theme: Theme,
    debug: bool,
    hidden: bool,
    scroll_fade: f32,
    glow_fade: f32,

    // per-frame scratch, reused across frames
    screen: Vec<Vec2>,
    links: Vec<(usize, usize, f32)>,
}

impl<S: Surface, H: Host> Backdrop<S, H> {
    /// Admit and start, or degrade silently to `Disabled`.
    ///
    /// A disabled mount registers no listener, schedules no frame and drops
    /// the surface.
    pub fn mount(
        surface: Option<S>,
        host: &mut H,
        options: &BackdropOptions,
        caps: &EnvironmentCapabilities,
    ) -> Self {
        let constrained = match caps.admit(options) {
            Admission::Admitted { constrained } => constrained,
            Admission::Denied(reason) => return Self::disabled(reason),
        };
        let Some(mut surface) = surface else {
            return Self::disabled(Inadmissible::SurfaceUnavailable);
        };

        let preset = Preset::resolve(options.performance, constrained);
        log::debug!(
            "[backdrop] preset fps={} particles={} links={} constrained={}",
            preset.fps,
            preset.particles,
            preset.link_distance,
            constrained
        );

        let viewport = Viewport {
            device_pixel_ratio: caps.effective_dpr(constrained),
            ..caps.viewport
        };
        surface.resize(viewport.width, viewport.height, viewport.device_pixel_ratio);

        let listeners = EventKind::ALL
            .iter()
            .filter_map(|kind| {
                let l = host.listen(*kind);
                if l.is_none() {
                    log::warn!("[backdrop] could not listen for {:?}", kind);
                }
                l
            })
            .collect();
        let pending_frame = host.request_frame();

        log::info!(
            "[backdrop] running section={} fps={} particles={}",
            options.section,
            preset.fps,
            preset.particles
        );
        Self {
            phase: Phase::Running(Box::new(Running {
                surface,
                listeners,
                pending_frame,
                field: ParticleField::new(preset.particles, options.seed),
                pointer: PointerState::default(),
                throttle: FrameThrottle::new(preset.fps),
                gradient: GradientCache::new(GRADIENT_REFRESH_PX),
                fps: FpsMeter::default(),
                preset,
                constrained,
                viewport,
                theme: options.theme,
                debug: options.debug,
                hidden: false,
                scroll_fade: 1.0,
                glow_fade: 1.0,
                screen: Vec::with_capacity(preset.particles),
                links: Vec::new(),
            })),
        }
    }

    fn disabled(reason: Inadmissible) -> Self {
        log::info!("[backdrop] disabled: {}", reason);
        Self {
            phase: Phase::Disabled(reason),
        }
    }

    pub fn state(&self) -> BackdropState {
        match self.phase {
            Phase::Disabled(_) => BackdropState::Disabled,
            Phase::Running(_) => BackdropState::Running,
            Phase::Stopped => BackdropState::Stopped,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn disabled_reason(&self) -> Option<&Inadmissible> {
        match &self.phase {
            Phase::Disabled(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn preset(&self) -> Option<Preset> {
        self.running().map(|r| r.preset)
    }

    pub fn particles(&self) -> &[Particle] {
        self.running()
            .map(|r| r.field.particles())
            .unwrap_or_default()
    }

    pub fn pointer(&self) -> Option<&PointerState> {
        self.running().map(|r| &r.pointer)
    }

    pub fn scroll_fade(&self) -> Option<f32> {
        self.running().map(|r| r.scroll_fade)
    }

    /// Measured draw rate; zero until a full window has elapsed.
    pub fn fps(&self) -> Option<f32> {
        self.running().map(|r| r.fps.fps())
    }

    pub fn gradient_rebuilds(&self) -> u64 {
        self.running().map_or(0, |r| r.gradient.rebuilds())
    }

    fn running(&self) -> Option<&Running<S, H>> {
        match &self.phase {
            Phase::Running(r) => Some(&**r),
            _ => None,
        }
    }

    /// Fold a host event into state read by the next frame. Ignored unless
    /// running.
    pub fn handle_event(&mut self, event: HostEvent) {
        let Phase::Running(r) = &mut self.phase else {
            return;
        };
        match event {
            HostEvent::PointerMove { x, y } => {
                let size = Vec2::new(r.viewport.width as f32, r.viewport.height as f32);
                r.pointer.set_target(Vec2::new(x, y) / size);
            }
            HostEvent::Scroll { offset_y } => {
                let span = r.viewport.height as f32 * SCROLL_FADE_SPAN;
                r.scroll_fade = if span > 0.0 {
                    (1.0 - offset_y / span).clamp(0.0, 1.0)
                } else {
                    1.0
                };
            }
            HostEvent::Resize {
                width,
                height,
                device_pixel_ratio,
            } => {
                r.viewport = Viewport {
                    width,
                    height,
                    device_pixel_ratio: effective_dpr(device_pixel_ratio, r.constrained),
                };
                r.surface
                    .resize(width, height, r.viewport.device_pixel_ratio);
                r.gradient.invalidate();
                log::debug!("[backdrop] resize {}x{}", width, height);
            }
            HostEvent::Visibility { hidden } => {
                r.hidden = hidden;
                r.throttle.reset();
            }
        }
    }

    /// Explicit theme update; the next frame redraws in the new palette.
    pub fn set_theme(&mut self, theme: Theme) {
        if let Phase::Running(r) = &mut self.phase {
            if r.theme != theme {
                r.theme = theme;
                r.gradient.invalidate();
            }
        }
    }

    /// Host frame callback. Consumes the pending frame, schedules the next,
    /// eases the pointer and draws when the throttle allows.
    pub fn on_frame(&mut self, now_ms: f64, host: &mut H) -> FrameOutcome {
        let Phase::Running(r) = &mut self.phase else {
            return FrameOutcome::Inactive;
        };
        // the fired frame is spent; nothing to cancel
        r.pending_frame = host.request_frame();

        r.pointer.ease(POINTER_EASING);
        if r.hidden {
            return FrameOutcome::Hidden;
        }
        match r.throttle.poll(now_ms) {
            Some(elapsed_ms) => {
                r.field.advance((elapsed_ms / 1000.0) as f32);
                r.draw(now_ms);
                FrameOutcome::Drawn
            }
            None => FrameOutcome::Throttled,
        }
    }

    /// Cancel the pending frame and remove every listener. Idempotent; a
    /// disabled backdrop has nothing to release and stays `Disabled`.
    pub fn unmount(&mut self, host: &mut H) {
        if !self.is_running() {
            return;
        }
        if let Phase::Running(mut r) = std::mem::replace(&mut self.phase, Phase::Stopped) {
            if let Some(frame) = r.pending_frame.take() {
                host.cancel_frame(frame);
            }
            for listener in r.listeners.drain(..) {
                host.unlisten(listener);
            }
            log::info!("[backdrop] stopped");
        }
    }
}

impl<S: Surface, H: Host> Running<S, H> {
    fn draw(&mut self, now_ms: f64) {
        let size = Vec2::new(self.viewport.width as f32, self.viewport.height as f32);
        self.surface.clear();
        self.fps.record(now_ms);

        let fade = self.scroll_fade;
        if fade > 0.0 {
            if (fade - self.glow_fade).abs() > GLOW_FADE_STEP {
                self.glow_fade = fade;
                self.gradient.invalidate();
            }
            let stops = glow_stops(self.theme, self.glow_fade);
            let radius = size.x.max(size.y) * GRADIENT_RADIUS_FRACTION;
            let center = self.pointer.eased * size;
            let surface = &mut self.surface;
            let gradient = self
                .gradient
                .get_or_build(center, |c| surface.radial_gradient(c, radius, &stops));
            surface.fill_with_gradient(gradient);

            self.draw_particles(size, fade);
        }

        if self.debug {
            let label = format!("{:.0} fps", self.fps.fps());
            let color = Hsla::themed(self.theme, 0.0, 0.9);
            self.surface
                .fill_text(Vec2::from(DEBUG_TEXT_POS), &label, Hsla { s: 0.0, ..color });
        }
    }

    fn draw_particles(&mut self, size: Vec2, fade: f32) {
        let offset = self.pointer.eased - Vec2::splat(0.5);
        let boost = self.pointer.speed_boost();
        let amplitude = Vec2::new(PARALLAX_X_PX + boost, PARALLAX_Y_PX + boost);

        self.screen.clear();
        self.screen.extend(
            self.field
                .particles()
                .iter()
                .map(|p| p.pos * size + offset * amplitude * p.depth),
        );

        self.field
            .links_into(size.x, size.y, self.preset.link_distance, &mut self.links);
        let particles = self.field.particles();
        for &(i, j, strength) in &self.links {
            let hue = (particles[i].hue + particles[j].hue) * 0.5;
            let color = Hsla::themed(self.theme, hue, LINK_ALPHA_MAX * strength * fade);
            self.surface
                .stroke_line(self.screen[i], self.screen[j], LINK_WIDTH_PX, color);
        }

        for (p, at) in particles.iter().zip(&self.screen) {
            let color = Hsla::themed(self.theme, p.hue, p.alpha * fade);
            self.surface.fill_circle(*at, p.radius, color);
        }
    }
}

fn glow_stops(theme: Theme, fade: f32) -> [ColorStop; 2] {
    let alpha = match theme {
        Theme::Dark => GRADIENT_ALPHA_DARK,
        Theme::Light => GRADIENT_ALPHA_LIGHT,
    };
    let inner = Hsla::themed(theme, GRADIENT_HUE, alpha * fade);
    [
        ColorStop {
            offset: 0.0,
            color: inner,
        },
        ColorStop {
            offset: 1.0,
            color: inner.with_alpha(0.0),
        },
    ]
}
