use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// One drifting dot. Position is a fraction of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Field units per second.
    pub vel: Vec2,
    pub radius: f32,
    /// Parallax weight in [0.3, 1]; deeper particles drift and shift more.
    pub depth: f32,
    pub hue: f32,
    pub alpha: f32,
}

/// Fixed-size particle arena owned by one renderer instance.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let particles = (0..count).map(|_| spawn(&mut rng)).collect();
        Self { particles, rng }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Integrate every particle by `dt_sec` (capped at [`MAX_STEP_SEC`]) and
    /// wrap the ones that left the overscan bounds.
    pub fn advance(&mut self, dt_sec: f32) {
        let dt = dt_sec.clamp(0.0, MAX_STEP_SEC);
        for p in &mut self.particles {
            p.pos += p.vel * p.depth * dt;
            wrap(p, &mut self.rng);
        }
    }

    /// Pairs closer than `max_distance` CSS px in a `width`×`height`
    /// viewport, with a strength falling linearly from 1 to 0 at the limit.
    /// `out` is cleared first so the caller can reuse its allocation.
    pub fn links_into(
        &self,
        width: f32,
        height: f32,
        max_distance: f32,
        out: &mut Vec<(usize, usize, f32)>,
    ) {
        out.clear();
        if max_distance <= 0.0 {
            return;
        }
        let scale = Vec2::new(width, height);
        let max_sq = max_distance * max_distance;
        for i in 0..self.particles.len() {
            let a = self.particles[i].pos * scale;
            for j in (i + 1)..self.particles.len() {
                let b = self.particles[j].pos * scale;
                let d_sq = a.distance_squared(b);
                if d_sq < max_sq {
                    out.push((i, j, 1.0 - d_sq.sqrt() / max_distance));
                }
            }
        }
    }
}

fn spawn(rng: &mut StdRng) -> Particle {
    Particle {
        pos: Vec2::new(rng.gen(), rng.gen()),
        vel: Vec2::new(
            rng.gen_range(-DRIFT_X_MAX..=DRIFT_X_MAX),
            DRIFT_Y_MIN + rng.gen::<f32>() * DRIFT_Y_SPAN,
        ),
        radius: RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN,
        depth: DEPTH_MIN + rng.gen::<f32>() * DEPTH_SPAN,
        hue: (HUE_MIN + rng.gen::<f32>() * HUE_SPAN).floor(),
        alpha: ALPHA_MIN + rng.gen::<f32>() * ALPHA_SPAN,
    }
}

// Re-enter from the opposite edge at a random point along it.
fn wrap(p: &mut Particle, rng: &mut StdRng) {
    let lo = -OVERSCAN;
    let hi = 1.0 + OVERSCAN;
    if p.pos.y > hi {
        p.pos.y = lo;
        p.pos.x = rng.gen();
    } else if p.pos.y < lo {
        p.pos.y = hi;
        p.pos.x = rng.gen();
    }
    if p.pos.x > hi {
        p.pos.x = lo;
        p.pos.y = rng.gen();
    } else if p.pos.x < lo {
        p.pos.x = hi;
        p.pos.y = rng.gen();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_batch() {
        let a = ParticleField::new(20, Some(9));
        let b = ParticleField::new(20, Some(9));
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn spawned_particles_sit_in_sampling_ranges() {
        let field = ParticleField::new(200, Some(1));
        for p in field.particles() {
            assert!((0.0..1.0).contains(&p.pos.x) && (0.0..1.0).contains(&p.pos.y));
            assert!(p.radius >= RADIUS_MIN && p.radius <= RADIUS_MIN + RADIUS_SPAN);
            assert!(p.depth >= DEPTH_MIN && p.depth <= DEPTH_MIN + DEPTH_SPAN);
            assert!(p.hue >= HUE_MIN && p.hue <= HUE_MIN + HUE_SPAN);
            assert!(p.vel.y > 0.0);
        }
    }

    #[test]
    fn particle_below_bottom_reenters_at_top() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = spawn(&mut rng);
        p.pos = Vec2::new(0.5, 1.25);
        wrap(&mut p, &mut rng);
        assert_eq!(p.pos.y, -OVERSCAN);
        assert!((0.0..1.0).contains(&p.pos.x));
    }

    #[test]
    fn links_respect_distance() {
        let mut field = ParticleField::new(2, Some(5));
        field.particles[0].pos = Vec2::new(0.0, 0.0);
        field.particles[1].pos = Vec2::new(0.05, 0.0);
        let mut links = Vec::new();
        field.links_into(1000.0, 1000.0, 100.0, &mut links);
        assert_eq!(links.len(), 1);
        assert!((links[0].2 - 0.5).abs() < 1e-4);
        field.links_into(1000.0, 1000.0, 40.0, &mut links);
        assert!(links.is_empty());
        field.links_into(1000.0, 1000.0, 0.0, &mut links);
        assert!(links.is_empty());
    }
}
