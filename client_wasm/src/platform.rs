//! Browser clock, console logging and the interval timer

use game_core::Environment;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub struct BrowserEnv;

impl Environment for BrowserEnv {
    fn now(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn log(&self, msg: String) {
        web_sys::console::log_1(&JsValue::from_str(&msg));
    }
}

/// Repeating `setInterval` timer, cleared on drop
pub struct IntervalTicker {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalTicker {
    pub fn start(period_ms: f64, callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}
