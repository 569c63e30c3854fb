//! Browser-facing constants: media queries, event names and overlay styling.
// Capability media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

// Non-standard navigator field read through Reflect
pub const DEVICE_MEMORY_FIELD: &str = "deviceMemory";

// DOM event names per backdrop event kind
pub const POINTER_MOVE_EVENT: &str = "pointermove";
pub const SCROLL_EVENT: &str = "scroll";
pub const RESIZE_EVENT: &str = "resize";
pub const VISIBILITY_EVENT: &str = "visibilitychange";

// Debug overlay font
pub const DEBUG_FONT: &str = "12px ui-monospace, monospace";
