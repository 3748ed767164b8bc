//! RFC 4180 export of report results.

use crate::report::ReportResult;
use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};
use std::io;

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Header row of raw (untranslated) column names followed by one record per row.
///
/// Columns are taken from the first row; an empty result produces an empty string.
/// Fields holding a delimiter, a quote or a line break are quoted and records end
/// in CRLF.
pub fn to_csv(result: &ReportResult) -> csv::Result<String> {
    let columns = result.columns();
    if columns.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record(&columns)?;
    for row in &result.rows {
        wtr.write_record(columns.iter().map(|column| {
            row.get(column).map(|v| v.to_string()).unwrap_or_default()
        }))?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// `<report path>_<YYYY-MM-DD>.csv`, with path separators turned into dashes.
pub fn csv_file_name(report_path: &str, date: NaiveDate) -> String {
    let stem = report_path.trim_matches('/').replace('/', "-");
    format!("{}_{}.csv", stem, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportRow, ScalarValue};

    fn sample() -> ReportResult {
        ReportResult::new(
            vec![
                ReportRow::new()
                    .with("project_name", "Köprü, Etap 1")
                    .with("total_expense", 1500.5)
                    .with("note", ScalarValue::Null),
                ReportRow::new()
                    .with("project_name", "Tünel \"B\"")
                    .with("total_expense", 200i64)
                    .with("note", "ok"),
            ],
            "SELECT ...",
        )
    }

    #[test]
    fn test_record_count_is_rows_plus_header() {
        let csv = to_csv(&sample()).unwrap();
        assert_eq!(csv.lines().count(), sample().rows.len() + 1);
    }

    #[test]
    fn test_header_uses_raw_keys_and_values_are_quoted() {
        let csv = to_csv(&sample()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "project_name,total_expense,note");
        assert_eq!(lines[1], "\"Köprü, Etap 1\",1500.5,");
        assert_eq!(lines[2], "\"Tünel \"\"B\"\"\",200,ok");
        assert!(csv.ends_with("\r\n"));
    }

    #[test]
    fn test_empty_result_exports_nothing() {
        assert_eq!(to_csv(&ReportResult::empty()).unwrap(), "");
    }

    #[test]
    fn test_line_breaks_are_quoted() {
        let result = ReportResult::new(
            vec![ReportRow::new().with("description", "satır 1\nsatır 2").with("plain", "x")],
            "SELECT ...",
        );
        assert_eq!(
            to_csv(&result).unwrap(),
            "description,plain\r\n\"satır 1\nsatır 2\",x\r\n"
        );
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
        assert_eq!(csv_file_name("project-expenses", date), "project-expenses_2025-12-03.csv");
        assert_eq!(
            csv_file_name("monthly-attendance/2025/12", date),
            "monthly-attendance-2025-12_2025-12-03.csv"
        );
    }
}
