//! Report execution against the company database.
//!
//! A report path such as `monthly-attendance/2025/12` is parsed into a
//! [`ReportRequest`], resolved to a [`ReportSource`] and executed by a
//! [`ReportExecutor`], which returns the rows together with the SQL text behind them.

pub mod error;
pub mod reports;

pub use error::{ReportError, Result};
pub use reports::{
    ProcedureReport, QueryReport, ReportExecutor, ReportRequest, ReportSource,
    SqlReportExecutor, ViewReport, source_for,
};
