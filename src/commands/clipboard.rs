//! Clipboard Commands
//!
//! Async Clipboard API first, `execCommand("copy")` as the fallback for
//! browsers or contexts where it is unavailable.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{describe, document};
use crate::error::{RankingError, RankingResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

/// Copy text to the system clipboard
pub async fn copy_text(text: &str) -> RankingResult<()> {
    match write_text(text).await {
        Ok(_) => Ok(()),
        Err(e) => {
            log::warn!("Clipboard API failed ({}), falling back to execCommand", describe(&e));
            legacy_copy(text).map_err(|e| RankingError::Clipboard(describe(&e)))
        }
    }
}

/// Select a hidden textarea and copy its contents
fn legacy_copy(text: &str) -> Result<(), JsValue> {
    let document = document()?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let textarea = document
        .create_element("textarea")?
        .dyn_into::<web_sys::HtmlTextAreaElement>()?;
    textarea.set_value(text);
    textarea.set_attribute("style", "position: fixed; top: 0; left: 0; opacity: 0;")?;
    body.append_child(&textarea)?;
    textarea.select();

    let copied = match document.dyn_ref::<web_sys::HtmlDocument>() {
        Some(html) => html.exec_command("copy"),
        None => Err(JsValue::from_str("not an HTML document")),
    };
    let _ = body.remove_child(&textarea);

    if copied? {
        Ok(())
    } else {
        Err(JsValue::from_str("execCommand(\"copy\") was rejected"))
    }
}
