use crate::api_client;
use common::{normalize_report_response, ReportResult};

/// Runs a report on the server.
///
/// `path` is the report id optionally followed by `/`-separated parameters,
/// e.g. `monthly-attendance/2025/12`. Whatever shape the body has, a successful
/// response always yields a row list and a query string.
pub async fn fetch_report(path: &str) -> Result<ReportResult, String> {
    log::trace!("Fetching report {}", path);
    let body = api_client::get_json(&format!("/reports/{}", path)).await?;
    let result = normalize_report_response(body);
    log::debug!("Report {} returned {} rows", path, result.row_count());
    Ok(result)
}
