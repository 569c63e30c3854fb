use crate::constants::{FPS_WINDOW_MS, THROTTLE_RESYNC_INTERVALS};

/// Caps redraws to one per interval, independent of how often the host
/// calls back.
#[derive(Clone, Copy, Debug)]
pub struct FrameThrottle {
    interval_ms: f64,
    last_draw_ms: Option<f64>,
}

impl FrameThrottle {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps.max(1) as f64,
            last_draw_ms: None,
        }
    }

    /// Returns the elapsed milliseconds since the previous draw when a frame
    /// should be drawn at `now_ms`, `Some(0.0)` for the very first frame.
    ///
    /// The draw timestamp advances in whole intervals so the phase does not
    /// drift with the host tick period; after a long stall it resyncs to now.
    pub fn poll(&mut self, now_ms: f64) -> Option<f64> {
        let Some(last) = self.last_draw_ms else {
            self.last_draw_ms = Some(now_ms);
            return Some(0.0);
        };
        let elapsed = now_ms - last;
        if elapsed < self.interval_ms {
            return None;
        }
        if elapsed > self.interval_ms * THROTTLE_RESYNC_INTERVALS {
            self.last_draw_ms = Some(now_ms);
        } else {
            self.last_draw_ms = Some(now_ms - elapsed % self.interval_ms);
        }
        Some(elapsed)
    }

    /// Forget the phase; the next poll draws immediately.
    pub fn reset(&mut self) {
        self.last_draw_ms = None;
    }
}

/// Counts draws over a rolling window for the debug overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct FpsMeter {
    window_start_ms: Option<f64>,
    frames: u32,
    fps: f32,
}

impl FpsMeter {
    pub fn record(&mut self, now_ms: f64) {
        let Some(start) = self.window_start_ms else {
            self.window_start_ms = Some(now_ms);
            return;
        };
        self.frames += 1;
        let span = now_ms - start;
        if span >= FPS_WINDOW_MS {
            self.fps = (self.frames as f64 * 1000.0 / span) as f32;
            self.frames = 0;
            self.window_start_ms = Some(now_ms);
        }
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_draws_and_next_waits_for_interval() {
        let mut t = FrameThrottle::new(10);
        assert_eq!(t.poll(5.0), Some(0.0));
        assert_eq!(t.poll(50.0), None);
        assert_eq!(t.poll(105.0), Some(100.0));
    }

    #[test]
    fn phase_is_kept_between_draws() {
        let mut t = FrameThrottle::new(10);
        t.poll(0.0);
        assert!(t.poll(130.0).is_some());
        // phase stays on the 100 ms grid, so 200 is due again
        assert!(t.poll(200.0).is_some());
    }

    #[test]
    fn long_stall_resyncs_instead_of_bursting() {
        let mut t = FrameThrottle::new(10);
        t.poll(0.0);
        assert!(t.poll(10_050.0).is_some());
        assert!(t.poll(10_100.0).is_none());
        assert!(t.poll(10_150.0).is_some());
    }

    #[test]
    fn fps_meter_reports_after_a_window() {
        let mut m = FpsMeter::default();
        for i in 0..=30 {
            m.record(i as f64 * 1000.0 / 30.0);
        }
        assert!((m.fps() - 30.0).abs() < 0.5);
    }
}
