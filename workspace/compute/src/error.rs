use sea_orm::DbErr;
use thiserror::Error;

/// Failures of a report request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Unknown report id, or a report path that does not fit the report
    #[error("Report not found: {0}")]
    NotFound(String),

    /// Wrong number of parameters, a non-integer value or a value out of range
    #[error("Invalid report parameters: {0}")]
    InvalidParameters(String),

    /// The database rejected the statement or the connection failed
    #[error("Report query failed: {0}")]
    QueryExecutionFailed(String),
}

impl ReportError {
    /// Machine readable code used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ReportError::NotFound(_) => "REPORT_NOT_FOUND",
            ReportError::InvalidParameters(_) => "INVALID_PARAMETERS",
            ReportError::QueryExecutionFailed(_) => "REPORT_FAILED",
        }
    }
}

impl From<DbErr> for ReportError {
    fn from(error: DbErr) -> Self {
        ReportError::QueryExecutionFailed(error.to_string())
    }
}

/// Type alias for Result with ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
