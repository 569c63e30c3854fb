// Pure sizing and event-queue helpers, kept free of DOM calls so they can
// be tested on the host.

use backdrop_core::HostEvent;

/// Backing-store size in device pixels for a CSS size; never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * device_pixel_ratio).round().max(1.0);
    let h = (css_height * device_pixel_ratio).round().max(1.0);
    (w as u32, h as u32)
}

#[inline]
pub fn css_px(value: f64) -> String {
    format!("{}px", value.max(0.0))
}

/// Queue `event`, replacing any pending event of the same kind so the
/// queue holds at most one entry per kind between frames.
pub fn push_coalesced(queue: &mut Vec<HostEvent>, event: HostEvent) {
    match queue.iter_mut().find(|e| e.kind() == event.kind()) {
        Some(slot) => *slot = event,
        None => queue.push(event),
    }
}
