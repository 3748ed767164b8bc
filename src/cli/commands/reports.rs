use anyhow::{Context, Result};
use common::csv::to_csv;
use common::{ReportCategory, reports_in};
use compute::{ReportExecutor, ReportRequest, SqlReportExecutor};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::cli::OutputFormat;
use crate::config::{Settings, connect};

/// Prints the catalog grouped by category.
pub fn list_reports() {
    for category in ReportCategory::ALL {
        println!("{}", category.label());
        for report in reports_in(category) {
            println!(
                "  {:<28} {:<10} {}",
                report.path_template(),
                report.kind,
                report.name
            );
        }
    }
}

/// Executes one report and writes it to stdout.
pub async fn run_report(settings: &Settings, report_path: &str, format: OutputFormat) -> Result<()> {
    let request = ReportRequest::parse(report_path)?;
    let db = connect(settings).await?;
    let executor = SqlReportExecutor::new(Arc::new(db));

    let result = executor
        .execute(&request)
        .await
        .with_context(|| format!("Report {} failed", request.path()))?;
    info!("Report {} returned {} rows", request.path(), result.row_count());

    match format {
        OutputFormat::Json => {
            let output = json!({
                "report": request.descriptor,
                "query": result.query_text,
                "data": result.rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => print!("{}", to_csv(&result)?),
    }
    Ok(())
}
