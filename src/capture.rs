//! JavaScript interop for rasterizing the card with html2canvas.
//! Provides the Rust side of the helper defined in export_helpers.js.

use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use serde::Serialize;
use striva::defaults::{EXPORT_FILE_NAME, EXPORT_SETTLE_MS};
use striva::export::{ExportError, RasterizeOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, HtmlElement, Url};
use yew::NodeRef;

#[wasm_bindgen(module = "/export_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = rasterizeToPng, catch)]
    async fn rasterize_to_png(element: &HtmlElement, options: JsValue) -> Result<JsValue, JsValue>;
}

/// Best-effort human readable text for a thrown JS value.
fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Capture the element behind `card` as a PNG and hand it to the browser as
/// a download.
///
/// Waits briefly first so the caller's "exporting" re-render (navigation
/// hidden, background removed) is what gets captured.
pub async fn export_card(card: &NodeRef) -> Result<(), ExportError> {
    TimeoutFuture::new(EXPORT_SETTLE_MS).await;

    let element = card
        .cast::<HtmlElement>()
        .ok_or(ExportError::MissingTarget)?;

    let options = RasterizeOptions::for_device(gloo_utils::window().device_pixel_ratio());
    info!("Rasterizing card at scale {}", options.scale);

    // `null` background keeps the capture transparent; `undefined` would not.
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    let options = options
        .serialize(&serializer)
        .map_err(|e| ExportError::Rasterize(e.to_string()))?;

    let image = rasterize_to_png(&element, options)
        .await
        .map_err(|e| ExportError::Rasterize(describe(&e)))?;
    let blob: Blob = image.dyn_into().map_err(|_| ExportError::EmptyImage)?;
    debug!("Rasterized {} bytes", blob.size());

    download(&blob, EXPORT_FILE_NAME)
}

fn download(blob: &Blob, file_name: &str) -> Result<(), ExportError> {
    let to_download_error = |e: JsValue| ExportError::Download(describe(&e));

    let url = Url::create_object_url_with_blob(blob).map_err(to_download_error)?;
    let anchor: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")
        .map_err(to_download_error)?
        .dyn_into()
        .map_err(|_| ExportError::Download("could not create link element".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = gloo_utils::body();
    body.append_child(&anchor).map_err(to_download_error)?;
    anchor.click();
    let removed = body.remove_child(&anchor);
    Url::revoke_object_url(&url).map_err(to_download_error)?;
    removed.map_err(to_download_error)?;

    info!("Saved {}", file_name);
    Ok(())
}
