//! Common transport-layer types shared between the report server and the frontend.
//! These mirror the payloads of the reporting endpoints so both sides agree on
//! shapes, and hold the display helpers that don't need a DOM or a database.

pub mod catalog;
pub mod csv;
pub mod envelope;
pub mod event_log;
pub mod presentation;
mod report;

pub use catalog::{all_reports, descriptor_label, get_descriptor, reports_in};
pub use envelope::normalize_report_response;
pub use event_log::EventLog;
pub use presentation::{ColumnHeader, ReportTable};
pub use report::{
    ReportCategory, ReportDescriptor, ReportKind, ReportParameter, ReportResult, ReportRow,
    ScalarValue,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error response body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}
