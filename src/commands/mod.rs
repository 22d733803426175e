//! Browser Command Wrappers
//!
//! Bindings to the browser APIs the app talks to, organized by concern.
//! Each wrapper maps `JsValue` failures into `RankingError`.

mod clipboard;
mod dialog;
mod files;

pub use clipboard::*;
pub use dialog::*;
pub use files::*;

use wasm_bindgen::JsValue;

/// Render a thrown JS value for logs and error messages
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `window.document`, or an error if there is none
fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}
