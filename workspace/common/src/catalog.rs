//! Static registry of every report the system can run.
//!
//! The catalog only carries display metadata. The SQL behind each id lives in
//! `compute::reports::source`, which is checked against this list in its tests.

use crate::report::{ReportCategory, ReportDescriptor, ReportKind, ReportParameter};

const MONTHLY_ATTENDANCE_PARAMETERS: &[ReportParameter] = &[
    ReportParameter {
        name: "year",
        label: "Yıl",
        min: 2000,
        max: 2100,
    },
    ReportParameter {
        name: "month",
        label: "Ay",
        min: 1,
        max: 12,
    },
];

static REPORTS: [ReportDescriptor; 15] = [
    ReportDescriptor {
        id: "project-expenses",
        name: "Proje Harcamaları",
        technique_hint: "INNER JOIN + GROUP BY + SUM",
        kind: ReportKind::Query,
        category: ReportCategory::Projects,
        icon: "fas fa-building",
        parameters: &[],
    },
    ReportDescriptor {
        id: "expense-by-category",
        name: "Kategoriye Göre Harcamalar",
        technique_hint: "GROUP BY + COUNT / SUM / AVG / MIN / MAX",
        kind: ReportKind::Query,
        category: ReportCategory::Expenses,
        icon: "fas fa-tags",
        parameters: &[],
    },
    ReportDescriptor {
        id: "employee-attendance-stats",
        name: "Çalışan Devam İstatistikleri",
        technique_hint: "LEFT JOIN + conditional aggregation (FILTER)",
        kind: ReportKind::Query,
        category: ReportCategory::Attendance,
        icon: "fas fa-user-check",
        parameters: &[],
    },
    ReportDescriptor {
        id: "monthly-expenses",
        name: "Aylık Harcamalar",
        technique_hint: "DATE_TRUNC + TO_CHAR + GROUP BY",
        kind: ReportKind::Query,
        category: ReportCategory::Expenses,
        icon: "fas fa-calendar-alt",
        parameters: &[],
    },
    ReportDescriptor {
        id: "top-active-employees",
        name: "En Aktif Çalışanlar",
        technique_hint: "JOIN + SUM + ORDER BY + LIMIT",
        kind: ReportKind::Query,
        category: ReportCategory::Employees,
        icon: "fas fa-trophy",
        parameters: &[],
    },
    ReportDescriptor {
        id: "role-salary-analysis",
        name: "Pozisyon Maaş Analizi",
        technique_hint: "JOIN + GROUP BY + HAVING + AVG / MIN / MAX",
        kind: ReportKind::Query,
        category: ReportCategory::Employees,
        icon: "fas fa-money-bill-wave",
        parameters: &[],
    },
    ReportDescriptor {
        id: "pending-expenses",
        name: "Onay Bekleyen Harcamalar",
        technique_hint: "JOIN + WHERE + ORDER BY",
        kind: ReportKind::Query,
        category: ReportCategory::Expenses,
        icon: "fas fa-hourglass-half",
        parameters: &[],
    },
    ReportDescriptor {
        id: "project-performance",
        name: "Proje Performansı",
        technique_hint: "Correlated subqueries",
        kind: ReportKind::Query,
        category: ReportCategory::Projects,
        icon: "fas fa-chart-line",
        parameters: &[],
    },
    ReportDescriptor {
        id: "weekly-attendance",
        name: "Haftalık Devam",
        technique_hint: "DATE_TRUNC('week') + COUNT(DISTINCT)",
        kind: ReportKind::Query,
        category: ReportCategory::Attendance,
        icon: "fas fa-calendar-week",
        parameters: &[],
    },
    ReportDescriptor {
        id: "most-expensive-projects",
        name: "En Maliyetli Projeler",
        technique_hint: "HAVING + scalar subquery + LIMIT",
        kind: ReportKind::Query,
        category: ReportCategory::Projects,
        icon: "fas fa-coins",
        parameters: &[],
    },
    ReportDescriptor {
        id: "employee-cost-report",
        name: "Çalışan Maliyet Raporu",
        technique_hint: "CTE + multi-table JOIN + NULLIF",
        kind: ReportKind::Query,
        category: ReportCategory::Employees,
        icon: "fas fa-file-invoice-dollar",
        parameters: &[],
    },
    ReportDescriptor {
        id: "employee-performance",
        name: "Çalışan-Proje Performansı",
        technique_hint: "VIEW: vw_employee_project_performance",
        kind: ReportKind::View,
        category: ReportCategory::Employees,
        icon: "fas fa-eye",
        parameters: &[],
    },
    ReportDescriptor {
        id: "project-cost-analysis",
        name: "Proje Maliyet Analizi",
        technique_hint: "VIEW: vw_project_cost_summary",
        kind: ReportKind::View,
        category: ReportCategory::Projects,
        icon: "fas fa-eye",
        parameters: &[],
    },
    ReportDescriptor {
        id: "monthly-attendance",
        name: "Aylık Devam Raporu",
        technique_hint: "STORED PROCEDURE: sp_monthly_attendance_report(year, month)",
        kind: ReportKind::Procedure,
        category: ReportCategory::Attendance,
        icon: "fas fa-cogs",
        parameters: MONTHLY_ATTENDANCE_PARAMETERS,
    },
    ReportDescriptor {
        id: "budget-alerts",
        name: "Bütçe Uyarıları",
        technique_hint: "STORED PROCEDURE: sp_budget_alert_projects()",
        kind: ReportKind::Procedure,
        category: ReportCategory::Projects,
        icon: "fas fa-exclamation-triangle",
        parameters: &[],
    },
];

/// Every report in selector order.
pub fn all_reports() -> &'static [ReportDescriptor] {
    &REPORTS
}

pub fn get_descriptor(id: &str) -> Option<&'static ReportDescriptor> {
    REPORTS.iter().find(|descriptor| descriptor.id == id)
}

/// Label for the results header; blank for unknown ids.
pub fn descriptor_label(id: &str) -> &'static str {
    get_descriptor(id).map(|descriptor| descriptor.name).unwrap_or("")
}

pub fn reports_in(category: ReportCategory) -> impl Iterator<Item = &'static ReportDescriptor> {
    REPORTS
        .iter()
        .filter(move |descriptor| descriptor.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all_reports().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), all_reports().len());
    }

    #[test]
    fn test_lookup() {
        let descriptor = get_descriptor("project-expenses").unwrap();
        assert_eq!(descriptor.kind, ReportKind::Query);
        assert_eq!(descriptor.name, "Proje Harcamaları");

        assert!(get_descriptor("no-such-report").is_none());
        assert_eq!(descriptor_label("no-such-report"), "");
    }

    #[test]
    fn test_kinds_match_known_reports() {
        let kind_of = |id: &str| get_descriptor(id).unwrap().kind;
        assert_eq!(kind_of("employee-performance"), ReportKind::View);
        assert_eq!(kind_of("project-cost-analysis"), ReportKind::View);
        assert_eq!(kind_of("monthly-attendance"), ReportKind::Procedure);
        assert_eq!(kind_of("budget-alerts"), ReportKind::Procedure);
        assert_eq!(
            all_reports()
                .iter()
                .filter(|d| d.kind == ReportKind::Query)
                .count(),
            11
        );
    }

    #[test]
    fn test_only_procedures_take_parameters() {
        for descriptor in all_reports() {
            if descriptor.is_parameterized() {
                assert_eq!(descriptor.kind, ReportKind::Procedure, "{}", descriptor.id);
            }
        }
        let monthly = get_descriptor("monthly-attendance").unwrap();
        assert_eq!(
            monthly.parameters.iter().map(|p| p.name).collect::<Vec<_>>(),
            vec!["year", "month"]
        );
    }

    #[test]
    fn test_every_category_has_reports() {
        for category in ReportCategory::ALL {
            assert!(reports_in(category).count() > 0, "{:?}", category);
        }
    }
}
