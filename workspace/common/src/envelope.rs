//! Normalisation of report responses.
//!
//! The server answers `{ "data": [...], "query": "..." }`; older deployments sent a
//! bare row array. Both collapse into a [`ReportResult`], and anything else becomes
//! an empty result rather than an error.

use crate::report::{ReportResult, ReportRow};
use serde_json::Value;
use tracing::{debug, warn};

pub fn normalize_report_response(body: Value) -> ReportResult {
    match body {
        Value::Object(mut object) => {
            let query_text = match object.remove("query") {
                Some(Value::String(query)) => query,
                _ => String::new(),
            };
            match object.remove("data") {
                Some(Value::Array(items)) => ReportResult::new(rows_from(items), query_text),
                _ => {
                    warn!("Report response has no data array, treating as empty");
                    ReportResult::new(Vec::new(), query_text)
                }
            }
        }
        Value::Array(items) => {
            debug!("Legacy bare-array report response with {} items", items.len());
            ReportResult::new(rows_from(items), String::new())
        }
        other => {
            warn!("Unexpected report response shape: {}", type_name(&other));
            ReportResult::empty()
        }
    }
}

fn rows_from(items: Vec<Value>) -> Vec<ReportRow> {
    let total = items.len();
    let rows: Vec<ReportRow> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(object) => Some(ReportRow::from_json_object(object)),
            _ => None,
        })
        .collect();
    if rows.len() != total {
        warn!("Skipped {} non-object entries in report rows", total - rows.len());
    }
    rows
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ScalarValue;
    use serde_json::json;

    #[test]
    fn test_current_format() {
        let result = normalize_report_response(json!({
            "data": [{"project_name": "Köprü", "total_expense": 1200.5}],
            "query": "SELECT 1",
            "success": true
        }));
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.query_text, "SELECT 1");
        assert_eq!(
            result.rows[0].get("total_expense"),
            Some(&ScalarValue::Float(1200.5))
        );
    }

    #[test]
    fn test_legacy_bare_array() {
        let result = normalize_report_response(json!([{"a": 1}, {"a": 2}]));
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.query_text, "");
    }

    #[test]
    fn test_missing_query_is_empty_string() {
        let result = normalize_report_response(json!({"data": []}));
        assert!(result.is_empty());
        assert_eq!(result.query_text, "");
    }

    #[test]
    fn test_malformed_shapes_yield_empty_table() {
        for body in [json!({"message": "nope"}), json!(null), json!("text"), json!(7)] {
            let result = normalize_report_response(body);
            assert!(result.rows.is_empty());
            assert_eq!(result.query_text, "");
        }
    }

    #[test]
    fn test_non_object_rows_are_skipped() {
        let result = normalize_report_response(json!({"data": [{"a": 1}, 5, "x"], "query": "q"}));
        assert_eq!(result.row_count(), 1);
    }
}
