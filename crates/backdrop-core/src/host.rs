/// Host events the backdrop listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerMove,
    Scroll,
    Resize,
    Visibility,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::PointerMove,
        EventKind::Scroll,
        EventKind::Resize,
        EventKind::Visibility,
    ];
}

/// Payload delivered for an [`EventKind`]. Positions are CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    PointerMove { x: f32, y: f32 },
    Scroll { offset_y: f32 },
    Resize { width: f64, height: f64, device_pixel_ratio: f64 },
    Visibility { hidden: bool },
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::PointerMove { .. } => EventKind::PointerMove,
            HostEvent::Scroll { .. } => EventKind::Scroll,
            HostEvent::Resize { .. } => EventKind::Resize,
            HostEvent::Visibility { .. } => EventKind::Visibility,
        }
    }
}

/// Listener registration and frame scheduling, owned by the platform.
///
/// Every handle returned from `listen` or `request_frame` is handed back
/// exactly once through `unlisten` or `cancel_frame`, or consumed by the
/// frame callback it scheduled.
pub trait Host {
    type Listener;
    type Frame;

    fn listen(&mut self, kind: EventKind) -> Option<Self::Listener>;
    fn unlisten(&mut self, listener: Self::Listener);
    fn request_frame(&mut self) -> Option<Self::Frame>;
    fn cancel_frame(&mut self, frame: Self::Frame);
}
