use crate::constants::*;
use crate::dom;
use backdrop_core::{EventKind, HostEvent};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM event name and target for a backdrop event kind.
pub fn dom_binding(
    kind: EventKind,
    window: &web::Window,
    document: &web::Document,
) -> (&'static str, web::EventTarget) {
    match kind {
        EventKind::PointerMove => (POINTER_MOVE_EVENT, window.clone().into()),
        EventKind::Scroll => (SCROLL_EVENT, window.clone().into()),
        EventKind::Resize => (RESIZE_EVENT, window.clone().into()),
        EventKind::Visibility => (VISIBILITY_EVENT, document.clone().into()),
    }
}

/// Read the state a DOM event stands for. Scroll and resize read the
/// window rather than the event, so they report the latest values.
pub fn translate(
    kind: EventKind,
    ev: &web::Event,
    window: &web::Window,
    document: &web::Document,
) -> Option<HostEvent> {
    match kind {
        EventKind::PointerMove => {
            let m = ev.dyn_ref::<web::MouseEvent>()?;
            Some(HostEvent::PointerMove {
                x: m.client_x() as f32,
                y: m.client_y() as f32,
            })
        }
        EventKind::Scroll => Some(HostEvent::Scroll {
            offset_y: window.scroll_y().unwrap_or(0.0) as f32,
        }),
        EventKind::Resize => {
            let vp = dom::viewport(window);
            Some(HostEvent::Resize {
                width: vp.width,
                height: vp.height,
                device_pixel_ratio: vp.device_pixel_ratio,
            })
        }
        EventKind::Visibility => Some(HostEvent::Visibility {
            hidden: document.hidden(),
        }),
    }
}
