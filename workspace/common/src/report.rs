use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use utoipa::ToSchema;

/// How a report is executed on the database side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Hand-written aggregate SQL statement
    Query,
    /// `SELECT *` from a database view
    View,
    /// Set-returning stored routine called with positional arguments
    Procedure,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Query => "query",
            ReportKind::View => "view",
            ReportKind::Procedure => "procedure",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Grouping used by the report selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    Projects,
    Employees,
    Expenses,
    Attendance,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 4] = [
        ReportCategory::Projects,
        ReportCategory::Employees,
        ReportCategory::Expenses,
        ReportCategory::Attendance,
    ];

    /// Display label shown above each group of reports.
    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Projects => "Projeler",
            ReportCategory::Employees => "Çalışanlar",
            ReportCategory::Expenses => "Harcamalar",
            ReportCategory::Attendance => "Devam Takibi",
        }
    }
}

/// A positional integer argument accepted by a procedure report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReportParameter {
    /// Parameter name as it appears in the routine signature (without the `p_` prefix)
    #[schema(value_type = String, example = "year")]
    pub name: &'static str,
    /// Display label
    #[schema(value_type = String)]
    pub label: &'static str,
    /// Smallest accepted value (inclusive)
    pub min: i32,
    /// Largest accepted value (inclusive)
    pub max: i32,
}

impl ReportParameter {
    pub fn accepts(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Static metadata describing one selectable report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReportDescriptor {
    /// Report identifier, the first segment of the report path
    #[schema(value_type = String, example = "project-expenses")]
    pub id: &'static str,
    /// Human readable label
    #[schema(value_type = String)]
    pub name: &'static str,
    /// Short hint of the SQL technique the report demonstrates
    #[schema(value_type = String)]
    pub technique_hint: &'static str,
    /// Execution kind
    pub kind: ReportKind,
    /// Selector group
    pub category: ReportCategory,
    /// Font Awesome icon class
    #[schema(value_type = String)]
    pub icon: &'static str,
    /// Positional parameters, empty for everything but procedure reports
    #[schema(value_type = Vec<ReportParameter>)]
    pub parameters: &'static [ReportParameter],
}

impl ReportDescriptor {
    pub fn is_parameterized(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Path template as documented in the API, e.g. `monthly-attendance/{year}/{month}`.
    pub fn path_template(&self) -> String {
        let mut path = self.id.to_string();
        for parameter in self.parameters {
            path.push_str("/{");
            path.push_str(parameter.name);
            path.push('}');
        }
        path
    }

    /// Concrete report path for the given positional values.
    pub fn path_with(&self, values: &[i32]) -> String {
        let mut path = self.id.to_string();
        for value in values {
            path.push('/');
            path.push_str(&value.to_string());
        }
        path
    }
}

/// A single cell of a report row.
///
/// Dates and timestamps arrive as ISO strings and are kept as [`ScalarValue::Text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ScalarValue {
    /// Numeric view of the value; text is never parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Integer(value) => Some(*value as f64),
            ScalarValue::Float(value) => Some(*value),
            _ => None,
        }
    }
}

/// Raw rendering used by exports: `Null` is empty, numbers use their shortest form.
impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => Ok(()),
            ScalarValue::Bool(value) => write!(f, "{}", value),
            ScalarValue::Integer(value) => write!(f, "{}", value),
            ScalarValue::Float(value) => write!(f, "{}", value),
            ScalarValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<serde_json::Value> for ScalarValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ScalarValue::Null,
            Value::Bool(value) => ScalarValue::Bool(value),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    ScalarValue::Integer(value)
                } else if let Some(value) = number.as_f64() {
                    ScalarValue::Float(value)
                } else {
                    ScalarValue::Text(number.to_string())
                }
            }
            Value::String(value) => ScalarValue::Text(value),
            // rows are flat; anything nested is shown as its JSON text
            nested => ScalarValue::Text(nested.to_string()),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<i32> for ScalarValue {
    fn from(value: i32) -> Self {
        ScalarValue::Integer(value as i64)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ScalarValue::Null)
    }
}

/// One result row. Column order is the order the database returned them in and
/// survives a JSON round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRow {
    cells: Vec<(String, ScalarValue)>,
}

impl ReportRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for fixtures.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets a column, keeping its original position when it already exists.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<ScalarValue>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&ScalarValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut row = Self::new();
        for (column, value) in object {
            row.insert(column, ScalarValue::from(value));
        }
        row
    }
}

impl Serialize for ReportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, value) in &self.cells {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ReportRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = ReportRow;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a flat JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ReportRow, A::Error> {
                let mut row = ReportRow::new();
                while let Some((column, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    row.insert(column, ScalarValue::from(value));
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// Rows returned by one report execution plus the text of what was executed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResult {
    pub rows: Vec<ReportRow>,
    /// Display-only; mirrors the statement or view definition that produced `rows`
    pub query_text: String,
}

impl ReportResult {
    pub fn new(rows: Vec<ReportRow>, query_text: impl Into<String>) -> Self {
        Self {
            rows,
            query_text: query_text.into(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Displayed columns: the keys of the first row, in order.
    pub fn columns(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.columns().collect())
            .unwrap_or_default()
    }

    /// Columns that only appear after the first row and therefore never make it
    /// into the header. Listed in first-seen order.
    pub fn columns_missing_from_header(&self) -> Vec<String> {
        let header = self.columns();
        let mut missing: Vec<String> = Vec::new();
        for row in self.rows.iter().skip(1) {
            for column in row.columns() {
                if !header.contains(&column) && !missing.iter().any(|m| m == column) {
                    missing.push(column.to_string());
                }
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_preserves_column_order_through_json() {
        let row = ReportRow::new()
            .with("project_name", "Köprü")
            .with("total_expense", 1500.5)
            .with("expense_count", 3i64)
            .with("end_date", ScalarValue::Null);

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"project_name":"Köprü","total_expense":1500.5,"expense_count":3,"end_date":null}"#
        );

        let back: ReportRow = serde_json::from_str(&json).unwrap();
        assert_eq!(
            back.columns().collect::<Vec<_>>(),
            vec!["project_name", "total_expense", "expense_count", "end_date"]
        );
        assert_eq!(back, row);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut row = ReportRow::new().with("a", 1i64).with("b", 2i64);
        row.insert("a", 10i64);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(row.get("a"), Some(&ScalarValue::Integer(10)));
    }

    #[test]
    fn test_scalar_from_json() {
        assert_eq!(ScalarValue::from(serde_json::json!(null)), ScalarValue::Null);
        assert_eq!(ScalarValue::from(serde_json::json!(42)), ScalarValue::Integer(42));
        assert_eq!(ScalarValue::from(serde_json::json!(4.5)), ScalarValue::Float(4.5));
        assert_eq!(
            ScalarValue::from(serde_json::json!("2025-12-01")),
            ScalarValue::Text("2025-12-01".to_string())
        );
        assert_eq!(
            ScalarValue::from(serde_json::json!({"nested": true})),
            ScalarValue::Text(r#"{"nested":true}"#.to_string())
        );
    }

    #[test]
    fn test_scalar_display_for_export() {
        assert_eq!(ScalarValue::Null.to_string(), "");
        assert_eq!(ScalarValue::Float(100.0).to_string(), "100");
        assert_eq!(ScalarValue::Float(12.25).to_string(), "12.25");
        assert_eq!(ScalarValue::Integer(-7).to_string(), "-7");
    }

    #[test]
    fn test_columns_missing_from_header() {
        let result = ReportResult::new(
            vec![
                ReportRow::new().with("a", 1i64),
                ReportRow::new().with("a", 2i64).with("b", 3i64),
                ReportRow::new().with("c", 4i64).with("b", 5i64),
            ],
            "SELECT 1",
        );
        assert_eq!(result.columns(), vec!["a"]);
        assert_eq!(result.columns_missing_from_header(), vec!["b", "c"]);
    }

    #[test]
    fn test_descriptor_paths() {
        const PARAMS: &[ReportParameter] = &[
            ReportParameter { name: "year", label: "Yıl", min: 2000, max: 2100 },
            ReportParameter { name: "month", label: "Ay", min: 1, max: 12 },
        ];
        let descriptor = ReportDescriptor {
            id: "monthly-attendance",
            name: "Aylık Devam Raporu",
            technique_hint: "STORED PROCEDURE",
            kind: ReportKind::Procedure,
            category: ReportCategory::Attendance,
            icon: "fas fa-cogs",
            parameters: PARAMS,
        };
        assert!(descriptor.is_parameterized());
        assert_eq!(descriptor.path_template(), "monthly-attendance/{year}/{month}");
        assert_eq!(descriptor.path_with(&[2025, 12]), "monthly-attendance/2025/12");
        assert!(PARAMS[1].accepts(12));
        assert!(!PARAMS[1].accepts(13));
    }
}
