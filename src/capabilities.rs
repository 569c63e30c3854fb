use crate::constants::{COARSE_POINTER_QUERY, DEVICE_MEMORY_FIELD, REDUCED_MOTION_QUERY};
use crate::dom;
use backdrop_core::EnvironmentCapabilities;
use web_sys as web;

/// Read the user agent's preferences and device hints once, before mount.
pub fn detect(window: &web::Window) -> EnvironmentCapabilities {
    let navigator = window.navigator();
    let device_memory_gb = js_sys::Reflect::get(&navigator, &DEVICE_MEMORY_FIELD.into())
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|gb| *gb > 0.0);
    let cores = navigator.hardware_concurrency();
    let hardware_concurrency = (cores.is_finite() && cores >= 1.0).then_some(cores as u32);

    let caps = EnvironmentCapabilities {
        prefers_reduced_motion: dom::media_matches(window, REDUCED_MOTION_QUERY),
        device_memory_gb,
        hardware_concurrency,
        coarse_pointer: dom::media_matches(window, COARSE_POINTER_QUERY),
        viewport: dom::viewport(window),
    };
    log::debug!("[caps] {:?}", caps);
    caps
}
