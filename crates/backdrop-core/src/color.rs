use crate::config::Theme;
use std::fmt;

/// Colour in canvas `hsla()` terms: hue in degrees, saturation and
/// lightness in percent, alpha in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    /// Particle colour for `hue` under the given theme.
    pub fn themed(theme: Theme, hue: f32, alpha: f32) -> Self {
        let (s, l) = match theme {
            Theme::Dark => (80.0, 70.0),
            Theme::Light => (60.0, 40.0),
        };
        Self {
            h: hue,
            s,
            l,
            a: alpha.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.0}, {:.0}%, {:.0}%, {:.3})",
            self.h, self.s, self.l, self.a
        )
    }
}
