use async_trait::async_trait;
use common::{ReportResult, ReportRow};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, FromQueryResult, JsonValue, Statement, Value,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use super::request::ReportRequest;
use super::source::ReportSource;
use crate::error::Result;

/// Runs a parsed report request and returns its rows and display SQL.
#[async_trait]
pub trait ReportExecutor: Send + Sync + fmt::Debug {
    async fn execute(&self, request: &ReportRequest) -> Result<ReportResult>;
}

/// Executes reports over a pooled connection. Each statement borrows a connection
/// from the pool for its own duration only.
#[derive(Debug, Clone)]
pub struct SqlReportExecutor {
    db: Arc<DatabaseConnection>,
}

impl SqlReportExecutor {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn statement(&self, request: &ReportRequest) -> Statement {
        let backend = self.db.get_database_backend();
        let sql = request.source.executed_sql();
        match &request.source {
            ReportSource::Query(_) | ReportSource::View(_) => Statement::from_string(backend, sql),
            ReportSource::Procedure(_) => Statement::from_sql_and_values(
                backend,
                sql,
                request.parameters.iter().copied().map(Value::from),
            ),
        }
    }
}

#[async_trait]
impl ReportExecutor for SqlReportExecutor {
    #[instrument(skip(self, request), fields(report = request.report_id(), kind = %request.kind()))]
    async fn execute(&self, request: &ReportRequest) -> Result<ReportResult> {
        let statement = self.statement(request);
        debug!("Executing {}", statement.sql);

        let values = JsonValue::find_by_statement(statement)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Report {} failed: {}", request.report_id(), e);
                e
            })?;

        let total = values.len();
        let rows: Vec<ReportRow> = values
            .into_iter()
            .filter_map(|value| match value {
                JsonValue::Object(object) => Some(ReportRow::from_json_object(object)),
                _ => None,
            })
            .collect();
        if rows.len() != total {
            warn!("Dropped {} rows that were not objects", total - rows.len());
        }

        info!("Report {} returned {} rows", request.report_id(), rows.len());
        Ok(ReportResult::new(rows, request.source.display_sql()))
    }
}
