//! Window width tracking for the responsive header.

use shared::interaction::MOBILE_VIEWPORT_MAX_PX;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use zoon::*;

/// Watches `window.innerWidth`. The resize listener is removed on drop.
pub struct ViewportWatcher {
    width: Mutable<f64>,
    on_resize: Closure<dyn FnMut()>,
}

fn window_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_VIEWPORT_MAX_PX)
}

impl ViewportWatcher {
    pub fn new() -> Self {
        let width = Mutable::new(window_width());
        let on_resize: Closure<dyn FnMut()> = Closure::new({
            let width = width.clone();
            move || width.set_neq(window_width())
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        Self { width, on_resize }
    }

    pub fn is_desktop_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.width
            .signal()
            .map(|width| width >= MOBILE_VIEWPORT_MAX_PX)
            .dedupe()
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
    }
}
