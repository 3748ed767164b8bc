use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use common::csv::{CSV_MIME_TYPE, csv_file_name, to_csv};
use common::{ReportDescriptor, ReportResult, all_reports};
use compute::{ReportError, ReportRequest};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::audit::{self, OUTCOME_OK, ReportAuditEntry};
use crate::schemas::{
    ApiResponse, AppState, ErrorResponse, ReportFormat, ReportQuery, ReportResponse,
};

type ReportErrorResponse = (StatusCode, Json<ErrorResponse>);

/// Generic text for database failures; the details only go to the server log.
pub const REPORT_FAILED_MESSAGE: &str = "Report failed to load";

fn error_response(error: &ReportError) -> ReportErrorResponse {
    let (status, message) = match error {
        ReportError::NotFound(path) => {
            warn!("Report not found: {}", path);
            (StatusCode::NOT_FOUND, format!("Report '{}' not found", path))
        }
        ReportError::InvalidParameters(reason) => {
            warn!("Invalid report parameters: {}", reason);
            (StatusCode::BAD_REQUEST, reason.clone())
        }
        ReportError::QueryExecutionFailed(reason) => {
            error!("Report query failed: {}", reason);
            (StatusCode::INTERNAL_SERVER_ERROR, REPORT_FAILED_MESSAGE.to_string())
        }
    };
    (status, Json(ErrorResponse::new(error.code(), message)))
}

/// List every available report
#[utoipa::path(
    get,
    path = "/api/v1/reports",
    tag = "reports",
    responses(
        (status = 200, description = "Report catalog", body = ApiResponse<Vec<ReportDescriptor>>)
    )
)]
#[instrument(skip_all)]
pub async fn list_reports() -> Json<ApiResponse<Vec<ReportDescriptor>>> {
    let reports = all_reports().to_vec();
    debug!("Listing {} reports", reports.len());
    Json(ApiResponse {
        data: reports,
        message: "Reports retrieved successfully".to_string(),
        success: true,
    })
}

/// Run a report
///
/// The path is the report id, followed by positional parameters for
/// procedure reports, e.g. `monthly-attendance/2025/12`.
#[utoipa::path(
    get,
    path = "/api/v1/reports/{report_path}",
    tag = "reports",
    params(
        ("report_path" = String, Path, description = "Report id and positional parameters", example = "monthly-attendance/2025/12"),
        ReportQuery,
    ),
    responses(
        (status = 200, description = "Report rows and the SQL behind them", body = ReportResponse),
        (status = 400, description = "Invalid report parameters", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse),
        (status = 500, description = "Report failed to load", body = ErrorResponse)
    )
)]
#[instrument(skip(state, query))]
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_path): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, ReportErrorResponse> {
    let started = Instant::now();
    let format = query.format.unwrap_or_default();

    let outcome = run_report(&state, &report_path).await;

    let (kind, row_count, result_code) = match &outcome {
        Ok((request, result)) => (Some(request.kind()), Some(result.row_count()), OUTCOME_OK),
        Err(e) => (None, None, e.code()),
    };
    audit::record(
        &state.audit,
        ReportAuditEntry {
            report_path: report_path.clone(),
            kind,
            row_count,
            outcome: result_code.to_string(),
            executed_at: Utc::now(),
            duration_ms: started.elapsed().as_millis() as u64,
        },
    );

    let (request, result) = outcome.map_err(|e| error_response(&e))?;
    info!(
        "Report {} returned {} rows in {} ms",
        request.path(),
        result.row_count(),
        started.elapsed().as_millis()
    );

    match format {
        ReportFormat::Csv => csv_response(&request, &result),
        ReportFormat::Json => {
            let row_count = result.row_count();
            let message = if row_count == 0 {
                "Report returned no rows".to_string()
            } else {
                "Report executed successfully".to_string()
            };
            let response = ReportResponse {
                data: result.rows,
                query: result.query_text,
                report: *request.descriptor,
                parameters: request.parameters,
                row_count,
                message,
                success: true,
            };
            Ok(Json(response).into_response())
        }
    }
}

async fn run_report(
    state: &AppState,
    report_path: &str,
) -> Result<(ReportRequest, ReportResult), ReportError> {
    let request = ReportRequest::parse(report_path)?;
    let result = state.executor.execute(&request).await?;
    let extra_columns = result.columns_missing_from_header();
    if !extra_columns.is_empty() {
        warn!(
            "Report {} rows do not share one column set, extra columns: {}",
            request.report_id(),
            extra_columns.join(", ")
        );
    }
    Ok((request, result))
}

fn csv_response(
    request: &ReportRequest,
    result: &ReportResult,
) -> Result<Response, ReportErrorResponse> {
    let body = to_csv(result).map_err(|e| {
        error!("CSV export of {} failed: {}", request.path(), e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("REPORT_FAILED", REPORT_FAILED_MESSAGE)),
        )
    })?;
    let file_name = csv_file_name(&request.path(), Utc::now().date_naive());
    Ok((
        [
            (header::CONTENT_TYPE, CSV_MIME_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response())
}

/// Recent report executions, oldest first
#[utoipa::path(
    get,
    path = "/api/v1/report-audit",
    tag = "reports",
    responses(
        (status = 200, description = "Recent report executions", body = ApiResponse<Vec<ReportAuditEntry>>)
    )
)]
#[instrument(skip(state))]
pub async fn get_report_audit(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<ReportAuditEntry>>> {
    let entries = audit::snapshot(&state.audit);
    Json(ApiResponse {
        message: format!("{} report executions", entries.len()),
        data: entries,
        success: true,
    })
}
