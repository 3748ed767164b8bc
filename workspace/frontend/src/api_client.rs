pub mod reports;

use crate::settings;
use common::ErrorResponse;
use gloo_net::http::{Request, Response};

/// GET returning the raw response body as JSON.
///
/// Report responses come in more than one shape, so the envelope is unpacked by the
/// caller rather than deserialised into `ApiResponse<T>` here.
pub async fn get_json(endpoint: &str) -> Result<serde_json::Value, String> {
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    if !response.ok() {
        return Err(error_from_response(endpoint, response).await);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let body = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(body)
}

/// Prefers the server's `{ error, code }` body, falls back to the HTTP status.
async fn error_from_response(endpoint: &str, response: Response) -> String {
    log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
    match response.json::<ErrorResponse>().await {
        Ok(err) => {
            log::error!("GET {} - API error {}: {}", endpoint, err.code, err.error);
            err.error
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", response.status());
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        }
    }
}
