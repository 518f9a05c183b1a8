use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::{append_child, body, create_element};

pub const CSV_MIME: &str = "text/csv";

/// Hands `bytes` to the browser as a file download named `filename`
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), JsValue> {
    let chunk = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&chunk);

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = body().ok_or_else(|| JsValue::from_str("No document body"))?;
    append_child(&body, &anchor)?;
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url)?;

    log::info!("💾 [DOWNLOAD] {} ({} bytes)", filename, bytes.len());
    Ok(())
}
