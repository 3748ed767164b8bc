pub mod executor;
pub mod request;
pub mod source;

pub use executor::{ReportExecutor, SqlReportExecutor};
pub use request::ReportRequest;
pub use source::{ProcedureReport, QueryReport, ReportSource, ViewReport, source_for};
