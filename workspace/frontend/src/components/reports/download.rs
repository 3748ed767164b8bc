use common::csv::{csv_file_name, to_csv, CSV_MIME_TYPE};
use common::ReportResult;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Saves `result` as `<report path>_<today>.csv` through a temporary object URL.
pub fn download_csv(result: &ReportResult, report_path: &str) -> Result<String, JsValue> {
    let file_name = csv_file_name(report_path, chrono::Local::now().date_naive());
    let content = to_csv(result).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let parts = Array::new();
    parts.push(&JsValue::from_str(&content));
    let options = BlobPropertyBag::new();
    options.set_type(CSV_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file_name);
    anchor.click();
    Url::revoke_object_url(&url)?;

    log::info!("Exported {} rows to {}", result.row_count(), file_name);
    Ok(file_name)
}
