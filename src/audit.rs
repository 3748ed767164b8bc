//! Bounded in-memory record of report executions, served at `/api/v1/report-audit`.

use chrono::{DateTime, Utc};
use common::{EventLog, ReportKind};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::trace;
use utoipa::ToSchema;

/// One report request as seen by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportAuditEntry {
    /// Report path as requested
    pub report_path: String,
    /// Kind of the resolved report; absent when the path did not resolve
    pub kind: Option<ReportKind>,
    /// Rows returned, absent on failure
    pub row_count: Option<usize>,
    /// `OK` or the error code returned to the client
    pub outcome: String,
    pub executed_at: DateTime<Utc>,
    pub duration_ms: u64,
}

pub const OUTCOME_OK: &str = "OK";

/// Shared handle; the lock is never held across an await.
pub type ReportAuditLog = Arc<Mutex<EventLog<ReportAuditEntry>>>;

pub fn new_audit_log(capacity: usize) -> ReportAuditLog {
    Arc::new(Mutex::new(EventLog::with_capacity(capacity)))
}

pub fn record(log: &ReportAuditLog, entry: ReportAuditEntry) {
    let mut log = log.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(evicted) = log.append(entry) {
        trace!("Audit log full, evicted entry for {}", evicted.report_path);
    }
}

/// Oldest first.
pub fn snapshot(log: &ReportAuditLog) -> Vec<ReportAuditEntry> {
    log.lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .to_vec()
}
