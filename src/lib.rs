#![cfg(target_arch = "wasm32")]
use backdrop_core::{BackdropOptions, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod capabilities;
mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod surface;
mod viewport;

use frame::Session;
use host::WebHost;
use surface::CanvasSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web loaded");
    Ok(())
}

/// Handle returned to the page; dropping or freeing it unmounts.
#[wasm_bindgen]
pub struct BackdropHandle {
    session: Rc<RefCell<Session>>,
}

#[wasm_bindgen]
impl BackdropHandle {
    pub fn unmount(&self) {
        match self.session.try_borrow_mut() {
            Ok(mut s) => s.stop(),
            Err(_) => log::warn!("[backdrop] unmount while a frame is running; ignored"),
        }
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, dark: bool) {
        let theme = if dark { Theme::Dark } else { Theme::Light };
        if let Ok(mut s) = self.session.try_borrow_mut() {
            s.backdrop.set_theme(theme);
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.session
            .try_borrow()
            .map(|s| s.backdrop.is_running())
            .unwrap_or(false)
    }
}

impl Drop for BackdropHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount a backdrop on the canvas with id `canvas_id`.
///
/// Malformed options are an error. An inadmissible environment or a missing
/// canvas is not: the returned handle is simply not running.
#[wasm_bindgen(js_name = mountBackdrop)]
pub fn mount_backdrop(canvas_id: &str, options_json: &str) -> Result<BackdropHandle, JsValue> {
    let options =
        BackdropOptions::from_json(options_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let session = mount(canvas_id, &options).map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
    Ok(BackdropHandle { session })
}

fn mount(canvas_id: &str, options: &BackdropOptions) -> anyhow::Result<Rc<RefCell<Session>>> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let caps = capabilities::detect(&window);

    let surface = match dom::canvas_by_id(&document, canvas_id) {
        Some(canvas) => match CanvasSurface::new(canvas) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("[backdrop] canvas #{} unusable: {:?}", canvas_id, e);
                None
            }
        },
        None => {
            log::warn!("[backdrop] missing canvas #{}", canvas_id);
            None
        }
    };

    let host = WebHost::new(window, document);
    Ok(Session::start(surface, host, options, &caps))
}
