//! One-shot admission check over an injected capability record.

use crate::config::BackdropOptions;
use crate::constants::*;
use thiserror::Error;

/// CSS size and pixel density of the drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            device_pixel_ratio: 1.0,
        }
    }
}

/// What the host knows about the device, computed once before mounting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentCapabilities {
    pub prefers_reduced_motion: bool,
    /// Approximate device memory in GB, when the user agent reports it.
    pub device_memory_gb: Option<f64>,
    /// Logical CPU count, when the user agent reports it.
    pub hardware_concurrency: Option<u32>,
    /// Primary pointer is coarse (touch).
    pub coarse_pointer: bool,
    pub viewport: Viewport,
}

impl Default for EnvironmentCapabilities {
    fn default() -> Self {
        Self {
            prefers_reduced_motion: false,
            device_memory_gb: None,
            hardware_concurrency: None,
            coarse_pointer: false,
            viewport: Viewport::default(),
        }
    }
}

/// Why a mount degraded to nothing.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Inadmissible {
    #[error("section '{0}' is not enabled")]
    SectionDisabled(String),
    #[error("user agent requests reduced motion")]
    ReducedMotion,
    #[error("viewport {0}px is below the small-screen threshold")]
    SmallViewport(f64),
    #[error("touch device with a {0}px viewport")]
    TouchViewport(f64),
    #[error("device memory {0} GB is too low")]
    LowMemory(f64),
    #[error("{0} logical cores is too few")]
    LowConcurrency(u32),
    #[error("no drawing surface available")]
    SurfaceUnavailable,
}

/// Outcome of the admission check.
#[derive(Clone, Debug, PartialEq)]
pub enum Admission {
    /// Run; `constrained` selects the reduced preset and DPR.
    Admitted { constrained: bool },
    Denied(Inadmissible),
}

impl EnvironmentCapabilities {
    /// Low memory or few cores: admitted, but on the reduced preset.
    pub fn is_constrained(&self) -> bool {
        let low_memory = self
            .device_memory_gb
            .is_some_and(|gb| gb <= CONSTRAINED_MEMORY_GB);
        let low_cpu = self
            .hardware_concurrency
            .is_some_and(|n| n <= CONSTRAINED_CORES);
        low_memory || low_cpu
    }

    pub fn admit(&self, options: &BackdropOptions) -> Admission {
        match self.denial(options) {
            Some(reason) => Admission::Denied(reason),
            None => Admission::Admitted {
                constrained: self.is_constrained(),
            },
        }
    }

    fn denial(&self, options: &BackdropOptions) -> Option<Inadmissible> {
        if !options.section_enabled() {
            return Some(Inadmissible::SectionDisabled(options.section.clone()));
        }
        if self.prefers_reduced_motion {
            return Some(Inadmissible::ReducedMotion);
        }
        let width = self.viewport.width;
        if width <= SMALL_VIEWPORT_PX {
            return Some(Inadmissible::SmallViewport(width));
        }
        if self.coarse_pointer && width <= TOUCH_VIEWPORT_PX {
            return Some(Inadmissible::TouchViewport(width));
        }
        if let Some(gb) = self.device_memory_gb.filter(|gb| *gb < MIN_MEMORY_GB) {
            return Some(Inadmissible::LowMemory(gb));
        }
        if let Some(n) = self.hardware_concurrency.filter(|n| *n < MIN_CORES) {
            return Some(Inadmissible::LowConcurrency(n));
        }
        None
    }

    /// Pixel density used for the backing store.
    #[inline]
    pub fn effective_dpr(&self, constrained: bool) -> f64 {
        effective_dpr(self.viewport.device_pixel_ratio, constrained)
    }
}

/// Caps `device_pixel_ratio` at [`DPR_CAP`]; constrained devices draw at 1x.
pub fn effective_dpr(device_pixel_ratio: f64, constrained: bool) -> f64 {
    if constrained || !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
        1.0
    } else {
        device_pixel_ratio.min(DPR_CAP)
    }
}
