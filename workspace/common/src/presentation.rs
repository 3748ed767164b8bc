//! Display transforms for report tables: Turkish column labels, Turkish month
//! names, locale number formatting and the table model the frontend renders.

use crate::report::{ReportResult, ScalarValue};
use tracing::warn;

/// Shown instead of a table when a report returns no rows.
pub const EMPTY_STATE_MESSAGE: &str = "Bu rapor için gösterilecek veri bulunamadı.";

/// Rendered for `NULL` cells.
pub const NULL_PLACEHOLDER: &str = "-";

/// Column whose values carry English month names from `TO_CHAR(..., 'Month')`.
pub const MONTH_NAME_COLUMN: &str = "month_name";

/// Numbers whose magnitude is above this are rendered with Turkish grouping.
pub const LOCALE_FORMAT_THRESHOLD: f64 = 1000.0;

const COLUMN_LABELS: &[(&str, &str)] = &[
    ("project_id", "Proje No"),
    ("project_name", "Proje Adı"),
    ("location", "Konum"),
    ("status", "Durum"),
    ("budget", "Bütçe"),
    ("start_date", "Başlangıç Tarihi"),
    ("end_date", "Bitiş Tarihi"),
    ("expense_id", "Harcama No"),
    ("expense_count", "Harcama Sayısı"),
    ("expense_date", "Harcama Tarihi"),
    ("total_expense", "Toplam Harcama"),
    ("category", "Kategori"),
    ("amount", "Tutar"),
    ("description", "Açıklama"),
    ("total_amount", "Toplam Tutar"),
    ("average_amount", "Ortalama Tutar"),
    ("min_amount", "En Düşük Tutar"),
    ("max_amount", "En Yüksek Tutar"),
    ("days_waiting", "Bekleme (Gün)"),
    ("employee_id", "Çalışan No"),
    ("employee_name", "Çalışan Adı"),
    ("role_name", "Pozisyon"),
    ("hire_date", "İşe Giriş Tarihi"),
    ("salary", "Maaş"),
    ("employee_count", "Çalışan Sayısı"),
    ("average_salary", "Ortalama Maaş"),
    ("min_salary", "En Düşük Maaş"),
    ("max_salary", "En Yüksek Maaş"),
    ("total_salary", "Toplam Maaş"),
    ("project_count", "Proje Sayısı"),
    ("cost_per_hour", "Saatlik Maliyet"),
    ("assigned_date", "Atanma Tarihi"),
    ("total_days", "Toplam Kayıt"),
    ("days_present", "Gelinen Gün"),
    ("days_absent", "Devamsızlık"),
    ("days_late", "Geç Kalınan Gün"),
    ("worked_days", "Çalışılan Gün"),
    ("total_hours", "Toplam Saat"),
    ("average_hours", "Ortalama Saat"),
    ("month_name", "Ay"),
    ("week_start", "Hafta Başlangıcı"),
    ("active_employees", "Aktif Çalışan"),
    ("attendance_records", "Kayıt Sayısı"),
    ("budget_usage_percent", "Bütçe Kullanımı (%)"),
    ("labor_cost", "İşçilik Maliyeti"),
    ("total_cost", "Toplam Maliyet"),
    ("remaining_budget", "Kalan Bütçe"),
    ("usage_percent", "Kullanım (%)"),
    ("alert_level", "Uyarı Seviyesi"),
];

const MONTH_NAMES: [(&str, &str); 12] = [
    ("January", "Ocak"),
    ("February", "Şubat"),
    ("March", "Mart"),
    ("April", "Nisan"),
    ("May", "Mayıs"),
    ("June", "Haziran"),
    ("July", "Temmuz"),
    ("August", "Ağustos"),
    ("September", "Eylül"),
    ("October", "Ekim"),
    ("November", "Kasım"),
    ("December", "Aralık"),
];

/// Turkish header label for a raw column name.
///
/// Unknown keys fall back to the key with its first underscore replaced by a
/// space, upper-cased (`"foo_bar_baz"` → `"FOO BAR_BAZ"`).
pub fn translate_column(key: &str) -> String {
    COLUMN_LABELS
        .iter()
        .find(|(column, _)| *column == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| key.replacen('_', " ", 1).to_uppercase())
}

/// Replaces English month names anywhere in `text` with their Turkish names.
pub fn translate_month_names(text: &str) -> String {
    MONTH_NAMES
        .iter()
        .fold(text.to_string(), |acc, (english, turkish)| {
            acc.replace(english, turkish)
        })
}

/// `tr-TR` style number: `.` groups thousands, `,` separates up to three decimals.
pub fn format_number_tr(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (integer_part, fraction_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction_part.trim_end_matches('0');

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }

    let is_zero = grouped.chars().all(|c| c == '0' || c == '.') && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, fraction)
    }
}

/// Cell text for the table view.
pub fn display_value(column: &str, value: &ScalarValue) -> String {
    match value {
        ScalarValue::Null => NULL_PLACEHOLDER.to_string(),
        ScalarValue::Integer(_) | ScalarValue::Float(_) => {
            let number = value.as_f64().unwrap_or_default();
            if number.abs() > LOCALE_FORMAT_THRESHOLD {
                format_number_tr(number)
            } else {
                value.to_string()
            }
        }
        ScalarValue::Text(text) if column == MONTH_NAME_COLUMN => translate_month_names(text),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHeader {
    /// Raw column name as returned by the database
    pub key: String,
    /// Translated label
    pub label: String,
}

/// Rendered view of a [`ReportResult`]: headers from the first row, display strings
/// for every cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportTable {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<Vec<String>>,
    /// Columns present only in later rows; they are not rendered
    pub dropped_columns: Vec<String>,
}

impl ReportTable {
    pub fn from_result(result: &ReportResult) -> Self {
        let columns: Vec<ColumnHeader> = result
            .columns()
            .into_iter()
            .map(|key| ColumnHeader {
                key: key.to_string(),
                label: translate_column(key),
            })
            .collect();

        let rows = result
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| match row.get(&column.key) {
                        Some(value) => display_value(&column.key, value),
                        None => NULL_PLACEHOLDER.to_string(),
                    })
                    .collect()
            })
            .collect();

        let dropped_columns = result.columns_missing_from_header();
        if !dropped_columns.is_empty() {
            warn!(
                "Report rows are not homogeneous, columns not shown: {}",
                dropped_columns.join(", ")
            );
        }

        Self {
            columns,
            rows,
            dropped_columns,
        }
    }

    /// True when there is nothing to render; the caller shows [`EMPTY_STATE_MESSAGE`].
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header_labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportRow;

    #[test]
    fn test_translate_known_columns() {
        assert_eq!(translate_column("project_name"), "Proje Adı");
        assert_eq!(translate_column("total_expense"), "Toplam Harcama");
    }

    #[test]
    fn test_translate_fallback_replaces_first_underscore_only() {
        assert_eq!(translate_column("foo_bar"), "FOO BAR");
        assert_eq!(translate_column("foo_bar_baz"), "FOO BAR_BAZ");
        assert_eq!(translate_column("plain"), "PLAIN");
    }

    #[test]
    fn test_month_translation() {
        assert_eq!(translate_month_names("December 2025"), "Aralık 2025");
        assert_eq!(translate_month_names("May 2024"), "Mayıs 2024");
        assert_eq!(translate_month_names("no month here"), "no month here");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_number_tr(12345.5), "12.345,5");
        assert_eq!(format_number_tr(1000000.0), "1.000.000");
        assert_eq!(format_number_tr(-2500.125), "-2.500,125");
        assert_eq!(format_number_tr(999.0), "999");
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value("budget", &ScalarValue::Null), "-");
        assert_eq!(display_value("budget", &ScalarValue::Float(250000.0)), "250.000");
        assert_eq!(display_value("expense_count", &ScalarValue::Integer(12)), "12");
        assert_eq!(display_value("total_hours", &ScalarValue::Float(37.5)), "37.5");
        assert_eq!(
            display_value("month_name", &ScalarValue::from("December 2025")),
            "Aralık 2025"
        );
        // month names are only rewritten in the month column
        assert_eq!(
            display_value("description", &ScalarValue::from("May delivery")),
            "May delivery"
        );
    }

    #[test]
    fn test_table_headers_come_from_first_row() {
        let result = ReportResult::new(
            vec![
                ReportRow::new()
                    .with("project_name", "Köprü")
                    .with("custom_metric", 5i64),
                ReportRow::new()
                    .with("project_name", "Tünel")
                    .with("custom_metric", ScalarValue::Null)
                    .with("late_column", "x"),
            ],
            "SELECT ...",
        );
        let table = ReportTable::from_result(&result);
        assert_eq!(table.header_labels(), vec!["Proje Adı", "CUSTOM METRIC"]);
        assert_eq!(table.rows[1], vec!["Tünel".to_string(), "-".to_string()]);
        assert_eq!(table.dropped_columns, vec!["late_column".to_string()]);
    }

    #[test]
    fn test_empty_result_has_no_header() {
        let table = ReportTable::from_result(&ReportResult::empty());
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
