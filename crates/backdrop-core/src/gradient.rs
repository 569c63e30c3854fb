use glam::Vec2;

/// Keeps the pointer-centred glow until the pointer has moved more than
/// `threshold_px` from where it was built.
pub struct GradientCache<G> {
    threshold_px: f32,
    cached: Option<(Vec2, G)>,
    rebuilds: u64,
}

impl<G> GradientCache<G> {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            cached: None,
            rebuilds: 0,
        }
    }

    pub fn get_or_build(&mut self, center: Vec2, build: impl FnOnce(Vec2) -> G) -> &G {
        let stale = match &self.cached {
            Some((at, _)) => at.distance(center) > self.threshold_px,
            None => true,
        };
        if stale {
            self.rebuilds += 1;
            self.cached = None;
        }
        let (_, gradient) = self.cached.get_or_insert_with(|| (center, build(center)));
        gradient
    }

    /// Drop the cached gradient; the next frame rebuilds it.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    #[inline]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuilds_only_past_threshold() {
        let mut cache = GradientCache::new(10.0);
        let first = *cache.get_or_build(Vec2::new(100.0, 100.0), |c| c.x);
        assert_eq!(first, 100.0);
        // small move keeps the first gradient
        let same = *cache.get_or_build(Vec2::new(105.0, 104.0), |c| c.x);
        assert_eq!(same, 100.0);
        assert_eq!(cache.rebuilds(), 1);

        let moved = *cache.get_or_build(Vec2::new(120.0, 100.0), |c| c.x);
        assert_eq!(moved, 120.0);
        assert_eq!(cache.rebuilds(), 2);
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let mut cache = GradientCache::new(10.0);
        cache.get_or_build(Vec2::ZERO, |_| 1);
        cache.invalidate();
        assert_eq!(*cache.get_or_build(Vec2::ZERO, |_| 2), 2);
        assert_eq!(cache.rebuilds(), 2);
    }
}
