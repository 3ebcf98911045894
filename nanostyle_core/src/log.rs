//! Console logging.
//!
//! In the browser messages go straight to `console.debug`. Everywhere else they
//! become `tracing` events under the `nanostyle` target, so native hosts pick
//! them up with whatever subscriber they install.

#[cfg(all(debug_assertions, target_arch = "wasm32"))]
use wasm_bindgen::JsValue;

/// Debug output is compiled out of release builds.
pub fn console_debug(msg: &str) {
    #[cfg(all(debug_assertions, target_arch = "wasm32"))]
    web_sys::console::debug_1(&JsValue::from_str(msg));

    #[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
    tracing::debug!(target: "nanostyle", "{}", msg);

    #[cfg(not(debug_assertions))]
    let _ = msg;
}

#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => {
        $crate::log::console_debug(&format!($($t)*))
    };
}
