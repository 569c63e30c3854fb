// Shared fixtures for backdrop integration tests: a surface that records
// draw calls and a host that tracks listener and frame handles.

#![allow(dead_code)]

use backdrop_core::*;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize { width: f64, height: f64, dpr: f64 },
    Clear,
    BuildGradient { center: Vec2, radius: f32 },
    FillGradient(u32),
    Circle { center: Vec2, radius: f32, color: Hsla },
    Line { from: Vec2, to: Vec2, color: Hsla },
    Text(String),
}

/// Draw log shared between a surface and the test that created it, so it
/// stays readable after the backdrop drops the surface.
#[derive(Clone, Default)]
pub struct DrawLog(Rc<RefCell<Vec<DrawOp>>>);

impl DrawLog {
    pub fn ops(&self) -> Vec<DrawOp> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn frames(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::Clear))
    }

    pub fn gradients_built(&self) -> usize {
        self.count(|op| matches!(op, DrawOp::BuildGradient { .. }))
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.0.borrow().iter().filter(|op| pred(op)).count()
    }

    /// Ops issued since the most recent clear.
    pub fn last_frame(&self) -> Vec<DrawOp> {
        let ops = self.0.borrow();
        let start = ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear))
            .unwrap_or(0);
        ops[start..].to_vec()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct RecordingSurface {
    log: DrawLog,
    next_gradient: u32,
}

impl RecordingSurface {
    pub fn new() -> (Self, DrawLog) {
        let log = DrawLog::default();
        (
            Self {
                log: log.clone(),
                next_gradient: 0,
            },
            log,
        )
    }

    fn push(&self, op: DrawOp) {
        self.log.0.borrow_mut().push(op);
    }
}

impl Surface for RecordingSurface {
    type Gradient = u32;

    fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        self.push(DrawOp::Resize {
            width,
            height,
            dpr: device_pixel_ratio,
        });
    }

    fn clear(&mut self) {
        self.push(DrawOp::Clear);
    }

    fn radial_gradient(&mut self, center: Vec2, radius: f32, _stops: &[ColorStop]) -> u32 {
        self.next_gradient += 1;
        self.push(DrawOp::BuildGradient { center, radius });
        self.next_gradient
    }

    fn fill_with_gradient(&mut self, gradient: &u32) {
        self.push(DrawOp::FillGradient(*gradient));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Hsla) {
        self.push(DrawOp::Line { from, to, color });
    }

    fn fill_text(&mut self, _at: Vec2, text: &str, _color: Hsla) {
        self.push(DrawOp::Text(text.to_string()));
    }
}

/// Host that hands out numbered handles and counts every acquire/release.
#[derive(Default)]
pub struct MockHost {
    next_id: u32,
    pub listeners: Vec<(u32, EventKind)>,
    pub pending_frames: Vec<u32>,
    pub listen_calls: usize,
    pub unlisten_calls: usize,
    pub frame_requests: usize,
    pub frame_cancels: usize,
    /// Releases of handles that were not live.
    pub stale_releases: usize,
    /// Kinds for which `listen` fails.
    pub refuse: Vec<EventKind>,
}

impl MockHost {
    fn id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Fire the pending frame callback, as the browser would at `now_ms`.
    pub fn fire(
        &mut self,
        backdrop: &mut Backdrop<RecordingSurface, MockHost>,
        now_ms: f64,
    ) -> FrameOutcome {
        if !self.pending_frames.is_empty() {
            self.pending_frames.remove(0);
        }
        backdrop.on_frame(now_ms, self)
    }

    pub fn is_idle(&self) -> bool {
        self.listeners.is_empty() && self.pending_frames.is_empty()
    }
}

impl Host for MockHost {
    type Listener = u32;
    type Frame = u32;

    fn listen(&mut self, kind: EventKind) -> Option<u32> {
        self.listen_calls += 1;
        if self.refuse.contains(&kind) {
            return None;
        }
        let id = self.id();
        self.listeners.push((id, kind));
        Some(id)
    }

    fn unlisten(&mut self, listener: u32) {
        self.unlisten_calls += 1;
        match self.listeners.iter().position(|(id, _)| *id == listener) {
            Some(i) => {
                self.listeners.remove(i);
            }
            None => self.stale_releases += 1,
        }
    }

    fn request_frame(&mut self) -> Option<u32> {
        self.frame_requests += 1;
        let id = self.id();
        self.pending_frames.push(id);
        Some(id)
    }

    fn cancel_frame(&mut self, frame: u32) {
        self.frame_cancels += 1;
        match self.pending_frames.iter().position(|id| *id == frame) {
            Some(i) => {
                self.pending_frames.remove(i);
            }
            None => self.stale_releases += 1,
        }
    }
}

pub fn desktop() -> EnvironmentCapabilities {
    EnvironmentCapabilities {
        device_memory_gb: Some(8.0),
        hardware_concurrency: Some(8),
        viewport: Viewport {
            width: 1440.0,
            height: 900.0,
            device_pixel_ratio: 2.0,
        },
        ..EnvironmentCapabilities::default()
    }
}

pub fn options() -> BackdropOptions {
    BackdropOptions {
        seed: Some(42),
        ..BackdropOptions::default()
    }
}

pub fn mount_with(
    host: &mut MockHost,
    options: &BackdropOptions,
    caps: &EnvironmentCapabilities,
) -> (Backdrop<RecordingSurface, MockHost>, DrawLog) {
    let (surface, log) = RecordingSurface::new();
    let backdrop = Backdrop::mount(Some(surface), host, options, caps);
    (backdrop, log)
}

pub fn mount_default(host: &mut MockHost) -> (Backdrop<RecordingSurface, MockHost>, DrawLog) {
    mount_with(host, &options(), &desktop())
}

/// Fire frames every `period_ms` from `start_ms` while `t <= end_ms`;
/// returns how many drew.
pub fn run_frames(
    host: &mut MockHost,
    backdrop: &mut Backdrop<RecordingSurface, MockHost>,
    start_ms: f64,
    end_ms: f64,
    period_ms: f64,
) -> usize {
    let mut drawn = 0;
    let mut n = 0u64;
    loop {
        let t = start_ms + n as f64 * period_ms;
        if t > end_ms {
            break;
        }
        if host.fire(backdrop, t) == FrameOutcome::Drawn {
            drawn += 1;
        }
        n += 1;
    }
    drawn
}
