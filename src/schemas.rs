use common::{ReportCategory, ReportDescriptor, ReportKind, ReportParameter, ReportRow};
use compute::{ReportExecutor, SqlReportExecutor};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::audit::{ReportAuditEntry, ReportAuditLog, new_audit_log};

pub use common::{ApiResponse, ErrorResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
    /// Runs report requests
    pub executor: Arc<dyn ReportExecutor>,
    /// Recent report executions
    pub audit: ReportAuditLog,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, audit_log_capacity: usize) -> Self {
        Self {
            executor: Arc::new(SqlReportExecutor::new(db.clone())),
            db,
            audit: new_audit_log(audit_log_capacity),
        }
    }
}

/// Output format of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

/// Query parameters for the report endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    /// `json` (default) or `csv`
    pub format: Option<ReportFormat>,
}

/// Rows of one report execution
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    /// Result rows, one flat object per row, columns in database order
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<ReportRow>,
    /// SQL behind the rows (statement, view definition or routine call)
    pub query: String,
    /// Catalog entry of the executed report
    pub report: ReportDescriptor,
    /// Positional parameters the routine was called with
    pub parameters: Vec<i32>,
    /// Number of rows in `data`
    pub row_count: usize,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::reports::list_reports,
        crate::handlers::reports::get_report,
        crate::handlers::reports::get_report_audit,
    ),
    components(
        schemas(
            ApiResponse<Vec<ReportDescriptor>>,
            ApiResponse<Vec<ReportAuditEntry>>,
            ErrorResponse,
            HealthResponse,
            ReportResponse,
            ReportFormat,
            ReportDescriptor,
            ReportParameter,
            ReportKind,
            ReportCategory,
            ReportAuditEntry,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "reports", description = "Read-only reports over projects, employees, expenses and attendance"),
    ),
    info(
        title = "Sitebook API",
        description = "Reporting API for a construction company: projects, staff, expenses and attendance",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
