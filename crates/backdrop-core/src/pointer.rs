use crate::constants::{POINTER_SPEED_GAIN, POINTER_VELOCITY_DECAY};
use glam::Vec2;

/// Raw and eased pointer position, both as viewport fractions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub target: Vec2,
    pub eased: Vec2,
    /// Delta between the last two raw samples, decayed every frame.
    pub velocity: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        let centre = Vec2::splat(0.5);
        Self {
            target: centre,
            eased: centre,
            velocity: Vec2::ZERO,
        }
    }
}

impl PointerState {
    /// Record a raw sample; non-finite input (zero-sized viewport) is dropped.
    pub fn set_target(&mut self, normalized: Vec2) {
        if !normalized.is_finite() {
            return;
        }
        self.velocity = normalized - self.target;
        self.target = normalized;
    }

    /// One low-pass step: `eased += (target - eased) * factor`.
    pub fn ease(&mut self, factor: f32) {
        let f = factor.clamp(0.0, 1.0);
        self.eased += (self.target - self.eased) * f;
        self.velocity *= POINTER_VELOCITY_DECAY;
    }

    /// Parallax boost from recent pointer motion, in [0, POINTER_SPEED_GAIN].
    #[inline]
    pub fn speed_boost(&self) -> f32 {
        (self.velocity.x.abs() + self.velocity.y.abs()).min(1.0) * POINTER_SPEED_GAIN
    }

    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        self.eased.distance(self.target)
    }
}
