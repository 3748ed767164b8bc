//! What runs behind each report id.

use common::ReportKind;
use model::routines::{self, FunctionRoutine, ViewRoutine};

/// A hand-written aggregate statement, executed verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryReport {
    pub sql: &'static str,
}

/// A database view read in full. The view's `CREATE` text is what gets displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewReport {
    pub view_name: &'static str,
    pub definition: &'static str,
}

/// A set-returning function called with positional integer arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcedureReport {
    pub function_name: &'static str,
    pub arity: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSource {
    Query(QueryReport),
    View(ViewReport),
    Procedure(ProcedureReport),
}

impl ViewReport {
    fn from_routine(routine: ViewRoutine) -> Self {
        Self {
            view_name: routine.name,
            definition: routine.definition,
        }
    }

    pub fn select_statement(&self) -> String {
        format!("SELECT * FROM {}", self.view_name)
    }
}

impl ProcedureReport {
    fn from_routine(routine: FunctionRoutine, arity: usize) -> Self {
        Self {
            function_name: routine.name,
            arity,
        }
    }

    /// `SELECT * FROM fn($1, $2, ...)`; values are always bound, never inlined.
    pub fn call_statement(&self) -> String {
        let placeholders: Vec<String> = (1..=self.arity).map(|i| format!("${}", i)).collect();
        format!(
            "SELECT * FROM {}({})",
            self.function_name,
            placeholders.join(", ")
        )
    }
}

impl ReportSource {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportSource::Query(_) => ReportKind::Query,
            ReportSource::View(_) => ReportKind::View,
            ReportSource::Procedure(_) => ReportKind::Procedure,
        }
    }

    /// The statement sent to the database.
    pub fn executed_sql(&self) -> String {
        match self {
            ReportSource::Query(query) => query.sql.to_string(),
            ReportSource::View(view) => view.select_statement(),
            ReportSource::Procedure(procedure) => procedure.call_statement(),
        }
    }

    /// The SQL shown next to the results.
    pub fn display_sql(&self) -> String {
        match self {
            ReportSource::Query(query) => query.sql.to_string(),
            ReportSource::View(view) => view.definition.to_string(),
            ReportSource::Procedure(procedure) => procedure.call_statement(),
        }
    }
}

/// Resolves a catalog id to its source.
pub fn source_for(id: &str) -> Option<ReportSource> {
    let query = |sql: &'static str| Some(ReportSource::Query(QueryReport { sql }));
    match id {
        "project-expenses" => query(PROJECT_EXPENSES),
        "expense-by-category" => query(EXPENSE_BY_CATEGORY),
        "employee-attendance-stats" => query(EMPLOYEE_ATTENDANCE_STATS),
        "monthly-expenses" => query(MONTHLY_EXPENSES),
        "top-active-employees" => query(TOP_ACTIVE_EMPLOYEES),
        "role-salary-analysis" => query(ROLE_SALARY_ANALYSIS),
        "pending-expenses" => query(PENDING_EXPENSES),
        "project-performance" => query(PROJECT_PERFORMANCE),
        "weekly-attendance" => query(WEEKLY_ATTENDANCE),
        "most-expensive-projects" => query(MOST_EXPENSIVE_PROJECTS),
        "employee-cost-report" => query(EMPLOYEE_COST_REPORT),
        "employee-performance" => Some(ReportSource::View(ViewReport::from_routine(
            routines::EMPLOYEE_PROJECT_PERFORMANCE,
        ))),
        "project-cost-analysis" => Some(ReportSource::View(ViewReport::from_routine(
            routines::PROJECT_COST_SUMMARY,
        ))),
        "monthly-attendance" => Some(ReportSource::Procedure(ProcedureReport::from_routine(
            routines::MONTHLY_ATTENDANCE_REPORT,
            2,
        ))),
        "budget-alerts" => Some(ReportSource::Procedure(ProcedureReport::from_routine(
            routines::BUDGET_ALERT_PROJECTS,
            0,
        ))),
        _ => None,
    }
}

// Aggregates are cast to float8 so they serialize as JSON numbers.

const PROJECT_EXPENSES: &str = r#"SELECT
    p.id AS project_id,
    p.name AS project_name,
    p.budget::float8 AS budget,
    COUNT(e.id) AS expense_count,
    SUM(e.amount)::float8 AS total_expense
FROM projects p
INNER JOIN expenses e ON e.project_id = p.id
GROUP BY p.id, p.name, p.budget
ORDER BY total_expense DESC"#;

const EXPENSE_BY_CATEGORY: &str = r#"SELECT
    e.category,
    COUNT(*) AS expense_count,
    SUM(e.amount)::float8 AS total_amount,
    ROUND(AVG(e.amount), 2)::float8 AS average_amount,
    MIN(e.amount)::float8 AS min_amount,
    MAX(e.amount)::float8 AS max_amount
FROM expenses e
GROUP BY e.category
ORDER BY total_amount DESC"#;

const EMPLOYEE_ATTENDANCE_STATS: &str = r#"SELECT
    e.id AS employee_id,
    e.first_name || ' ' || e.last_name AS employee_name,
    r.name AS role_name,
    COUNT(a.id) AS total_days,
    COUNT(a.id) FILTER (WHERE a.status = 'present') AS days_present,
    COUNT(a.id) FILTER (WHERE a.status = 'absent') AS days_absent,
    COUNT(a.id) FILTER (WHERE a.status = 'late') AS days_late,
    ROUND(AVG(a.hours_worked), 2)::float8 AS average_hours
FROM employees e
INNER JOIN roles r ON r.id = e.role_id
LEFT JOIN attendance a ON a.employee_id = e.id
WHERE e.is_active
GROUP BY e.id, e.first_name, e.last_name, r.name
ORDER BY days_present DESC, employee_name"#;

const MONTHLY_EXPENSES: &str = r#"SELECT
    TO_CHAR(DATE_TRUNC('month', e.expense_date), 'FMMonth YYYY') AS month_name,
    COUNT(*) AS expense_count,
    SUM(e.amount)::float8 AS total_amount
FROM expenses e
GROUP BY DATE_TRUNC('month', e.expense_date)
ORDER BY DATE_TRUNC('month', e.expense_date) DESC"#;

const TOP_ACTIVE_EMPLOYEES: &str = r#"SELECT
    e.first_name || ' ' || e.last_name AS employee_name,
    r.name AS role_name,
    COUNT(a.id) AS worked_days,
    SUM(a.hours_worked)::float8 AS total_hours
FROM attendance a
INNER JOIN employees e ON e.id = a.employee_id
INNER JOIN roles r ON r.id = e.role_id
WHERE a.status IN ('present', 'late')
GROUP BY e.id, e.first_name, e.last_name, r.name
ORDER BY total_hours DESC
LIMIT 10"#;

const ROLE_SALARY_ANALYSIS: &str = r#"SELECT
    r.name AS role_name,
    COUNT(e.id) AS employee_count,
    ROUND(AVG(e.salary), 2)::float8 AS average_salary,
    MIN(e.salary)::float8 AS min_salary,
    MAX(e.salary)::float8 AS max_salary,
    SUM(e.salary)::float8 AS total_salary
FROM roles r
LEFT JOIN employees e ON e.role_id = r.id AND e.is_active
GROUP BY r.id, r.name
HAVING COUNT(e.id) > 0
ORDER BY average_salary DESC"#;

const PENDING_EXPENSES: &str = r#"SELECT
    e.id AS expense_id,
    p.name AS project_name,
    e.category,
    e.amount::float8 AS amount,
    e.expense_date,
    e.description,
    CURRENT_DATE - e.expense_date AS days_waiting
FROM expenses e
INNER JOIN projects p ON p.id = e.project_id
WHERE e.status = 'pending'
ORDER BY e.expense_date"#;

const PROJECT_PERFORMANCE: &str = r#"SELECT
    p.name AS project_name,
    p.status,
    p.budget::float8 AS budget,
    (SELECT COALESCE(SUM(e.amount), 0) FROM expenses e WHERE e.project_id = p.id)::float8 AS total_expense,
    (SELECT COUNT(*) FROM project_employees pe WHERE pe.project_id = p.id) AS employee_count,
    (SELECT COALESCE(SUM(a.hours_worked), 0) FROM attendance a WHERE a.project_id = p.id)::float8 AS total_hours,
    ROUND(
        (SELECT COALESCE(SUM(e.amount), 0) FROM expenses e WHERE e.project_id = p.id) * 100
            / NULLIF(p.budget, 0),
        2
    )::float8 AS budget_usage_percent
FROM projects p
ORDER BY budget_usage_percent DESC NULLS LAST"#;

const WEEKLY_ATTENDANCE: &str = r#"SELECT
    DATE_TRUNC('week', a.work_date)::date AS week_start,
    COUNT(DISTINCT a.employee_id) AS active_employees,
    COUNT(*) AS attendance_records,
    COUNT(*) FILTER (WHERE a.status = 'absent') AS days_absent,
    SUM(a.hours_worked)::float8 AS total_hours
FROM attendance a
WHERE a.work_date >= CURRENT_DATE - INTERVAL '12 weeks'
GROUP BY DATE_TRUNC('week', a.work_date)
ORDER BY week_start DESC"#;

const MOST_EXPENSIVE_PROJECTS: &str = r#"SELECT
    p.name AS project_name,
    p.location,
    SUM(e.amount)::float8 AS total_expense,
    p.budget::float8 AS budget
FROM projects p
INNER JOIN expenses e ON e.project_id = p.id
GROUP BY p.id, p.name, p.location, p.budget
HAVING SUM(e.amount) > (
    SELECT AVG(project_total)
    FROM (SELECT SUM(amount) AS project_total FROM expenses GROUP BY project_id) totals
)
ORDER BY total_expense DESC
LIMIT 5"#;

const EMPLOYEE_COST_REPORT: &str = r#"WITH hours AS (
    SELECT employee_id, SUM(hours_worked) AS total_hours
    FROM attendance
    GROUP BY employee_id
)
SELECT
    e.first_name || ' ' || e.last_name AS employee_name,
    r.name AS role_name,
    e.salary::float8 AS salary,
    (SELECT COUNT(*) FROM project_employees pe WHERE pe.employee_id = e.id) AS project_count,
    COALESCE(h.total_hours, 0)::float8 AS total_hours,
    ROUND(e.salary / NULLIF(h.total_hours, 0), 2)::float8 AS cost_per_hour
FROM employees e
INNER JOIN roles r ON r.id = e.role_id
LEFT JOIN hours h ON h.employee_id = e.id
WHERE e.is_active
ORDER BY cost_per_hour DESC NULLS LAST"#;

#[cfg(test)]
mod tests {
    use super::*;
    use common::all_reports;

    #[test]
    fn test_every_catalog_entry_has_a_source_of_the_same_kind() {
        for descriptor in all_reports() {
            let source = source_for(descriptor.id)
                .unwrap_or_else(|| panic!("no source for {}", descriptor.id));
            assert_eq!(source.kind(), descriptor.kind, "{}", descriptor.id);
            if let ReportSource::Procedure(procedure) = source {
                assert_eq!(procedure.arity, descriptor.parameters.len(), "{}", descriptor.id);
            }
        }
        assert!(source_for("drop-tables").is_none());
    }

    #[test]
    fn test_every_executed_statement_is_read_only() {
        for descriptor in all_reports() {
            let sql = source_for(descriptor.id).unwrap().executed_sql();
            let head = sql.trim_start().to_uppercase();
            assert!(
                head.starts_with("SELECT") || head.starts_with("WITH"),
                "{} is not a read-only statement",
                descriptor.id
            );
            assert!(!sql.contains(';'), "{} contains a statement separator", descriptor.id);
        }
    }

    #[test]
    fn test_project_expenses_joins_and_groups() {
        let sql = source_for("project-expenses").unwrap().executed_sql();
        assert!(sql.contains("JOIN"));
        assert!(sql.contains("GROUP BY"));
        assert!(sql.contains("AS total_expense"));
    }

    #[test]
    fn test_view_shows_definition_but_selects_everything() {
        let source = source_for("project-cost-analysis").unwrap();
        assert_eq!(source.executed_sql(), "SELECT * FROM vw_project_cost_summary");
        assert!(
            source
                .display_sql()
                .starts_with("CREATE OR REPLACE VIEW vw_project_cost_summary")
        );
    }

    #[test]
    fn test_procedure_call_uses_placeholders() {
        let monthly = source_for("monthly-attendance").unwrap();
        assert_eq!(
            monthly.executed_sql(),
            "SELECT * FROM sp_monthly_attendance_report($1, $2)"
        );
        assert_eq!(monthly.display_sql(), monthly.executed_sql());

        let alerts = source_for("budget-alerts").unwrap();
        assert_eq!(alerts.executed_sql(), "SELECT * FROM sp_budget_alert_projects()");
    }
}
