use backdrop_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// Layout viewport in CSS px; the backdrop covers the whole window.
pub fn viewport(window: &web::Window) -> Viewport {
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        width: px(window.inner_width()),
        height: px(window.inner_height()),
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

#[inline]
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    matches!(window.match_media(query), Ok(Some(mql)) if mql.matches())
}
