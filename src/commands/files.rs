//! File Commands
//!
//! CSV import through a file input and export as a browser download.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{describe, document};
use crate::codec::CSV_MIME;
use crate::error::{RankingError, RankingResult};

/// Time the browser gets to start the download before the blob URL is freed
const REVOKE_DELAY_MS: u32 = 1000;

/// Read the text of the file picked in `input`.
///
/// Returns `None` when no file was chosen. The input is cleared so picking
/// the same file again fires `change`.
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> RankingResult<Option<String>> {
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return Ok(None);
    };
    input.set_value("");

    log::info!("Reading {} ({} bytes)", file.name(), file.size());
    let content = JsFuture::from(file.text())
        .await
        .map_err(|e| RankingError::FileRead(describe(&e)))?;
    content
        .as_string()
        .map(Some)
        .ok_or_else(|| RankingError::FileRead("file content is not text".to_string()))
}

/// Offer `content` as a CSV download named `file_name`
pub fn download_csv(file_name: &str, content: &str) -> RankingResult<()> {
    trigger_download(file_name, content).map_err(|e| RankingError::Export(describe(&e)))
}

fn trigger_download(file_name: &str, content: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = document()?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let link = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    link.set_href(&url);
    link.set_download(file_name);
    link.set_attribute("style", "visibility: hidden")?;

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("Could not revoke {}: {}", url, describe(&e));
        }
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revoke_is_deferred() {
        assert!(REVOKE_DELAY_MS >= 100);
    }
}
