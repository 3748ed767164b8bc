//! Database-side report objects: two views and two set-returning functions.
//!
//! The DDL text is shared by the migration that creates these objects and by the
//! report executor, which shows the view definitions as the query behind a report.
//! All of it is PostgreSQL-only.

/// A view the report layer reads with `SELECT * FROM <name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRoutine {
    pub name: &'static str,
    pub definition: &'static str,
}

/// A set-returning SQL function taking `INTEGER` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionRoutine {
    pub name: &'static str,
    /// Argument types as they appear in `DROP FUNCTION`.
    pub signature: &'static str,
    pub definition: &'static str,
}

impl ViewRoutine {
    pub fn drop_statement(&self) -> String {
        format!("DROP VIEW IF EXISTS {}", self.name)
    }
}

impl FunctionRoutine {
    pub fn drop_statement(&self) -> String {
        format!("DROP FUNCTION IF EXISTS {}({})", self.name, self.signature)
    }
}

pub const EMPLOYEE_PROJECT_PERFORMANCE: ViewRoutine = ViewRoutine {
    name: "vw_employee_project_performance",
    definition: r#"CREATE OR REPLACE VIEW vw_employee_project_performance AS
SELECT
    e.id AS employee_id,
    e.first_name || ' ' || e.last_name AS employee_name,
    r.name AS role_name,
    p.name AS project_name,
    pe.assigned_date,
    COUNT(a.id) FILTER (WHERE a.status = 'present') AS days_present,
    COUNT(a.id) FILTER (WHERE a.status = 'absent') AS days_absent,
    COALESCE(SUM(a.hours_worked), 0)::float8 AS total_hours
FROM employees e
INNER JOIN roles r ON r.id = e.role_id
INNER JOIN project_employees pe ON pe.employee_id = e.id
INNER JOIN projects p ON p.id = pe.project_id
LEFT JOIN attendance a ON a.employee_id = e.id AND a.project_id = p.id
GROUP BY e.id, e.first_name, e.last_name, r.name, p.name, pe.assigned_date
ORDER BY employee_name, project_name"#,
};

/// Labour cost is hours worked times the hourly rate, taking a month as 160 hours.
pub const PROJECT_COST_SUMMARY: ViewRoutine = ViewRoutine {
    name: "vw_project_cost_summary",
    definition: r#"CREATE OR REPLACE VIEW vw_project_cost_summary AS
WITH expense_totals AS (
    SELECT project_id, SUM(amount) AS total_expense
    FROM expenses
    WHERE status = 'approved'
    GROUP BY project_id
),
labor_totals AS (
    SELECT a.project_id, ROUND(SUM(a.hours_worked * e.salary / 160), 2) AS labor_cost
    FROM attendance a
    INNER JOIN employees e ON e.id = a.employee_id
    WHERE a.project_id IS NOT NULL
    GROUP BY a.project_id
)
SELECT
    p.id AS project_id,
    p.name AS project_name,
    p.status,
    p.budget::float8 AS budget,
    COALESCE(et.total_expense, 0)::float8 AS total_expense,
    COALESCE(lt.labor_cost, 0)::float8 AS labor_cost,
    (COALESCE(et.total_expense, 0) + COALESCE(lt.labor_cost, 0))::float8 AS total_cost,
    (p.budget - COALESCE(et.total_expense, 0) - COALESCE(lt.labor_cost, 0))::float8 AS remaining_budget
FROM projects p
LEFT JOIN expense_totals et ON et.project_id = p.id
LEFT JOIN labor_totals lt ON lt.project_id = p.id
ORDER BY total_cost DESC"#,
};

pub const MONTHLY_ATTENDANCE_REPORT: FunctionRoutine = FunctionRoutine {
    name: "sp_monthly_attendance_report",
    signature: "INTEGER, INTEGER",
    definition: r#"CREATE OR REPLACE FUNCTION sp_monthly_attendance_report(p_year INTEGER, p_month INTEGER)
RETURNS TABLE (
    employee_name TEXT,
    role_name VARCHAR,
    month_name TEXT,
    days_present BIGINT,
    days_absent BIGINT,
    days_late BIGINT,
    total_hours DOUBLE PRECISION
)
LANGUAGE sql STABLE
AS $$
    SELECT
        e.first_name || ' ' || e.last_name,
        r.name,
        TO_CHAR(MAKE_DATE(p_year, p_month, 1), 'FMMonth YYYY'),
        COUNT(a.id) FILTER (WHERE a.status = 'present'),
        COUNT(a.id) FILTER (WHERE a.status = 'absent'),
        COUNT(a.id) FILTER (WHERE a.status = 'late'),
        COALESCE(SUM(a.hours_worked), 0)::float8
    FROM employees e
    INNER JOIN roles r ON r.id = e.role_id
    LEFT JOIN attendance a
        ON a.employee_id = e.id
        AND EXTRACT(YEAR FROM a.work_date) = p_year
        AND EXTRACT(MONTH FROM a.work_date) = p_month
    WHERE e.is_active
    GROUP BY e.id, e.first_name, e.last_name, r.name
    ORDER BY 1
$$"#,
};

/// Projects whose approved spending reached 80% of their budget.
pub const BUDGET_ALERT_PROJECTS: FunctionRoutine = FunctionRoutine {
    name: "sp_budget_alert_projects",
    signature: "",
    definition: r#"CREATE OR REPLACE FUNCTION sp_budget_alert_projects()
RETURNS TABLE (
    project_name VARCHAR,
    budget DOUBLE PRECISION,
    total_expense DOUBLE PRECISION,
    usage_percent DOUBLE PRECISION,
    alert_level TEXT
)
LANGUAGE sql STABLE
AS $$
    SELECT
        p.name,
        p.budget::float8,
        SUM(e.amount)::float8,
        ROUND(SUM(e.amount) * 100 / NULLIF(p.budget, 0), 2)::float8,
        CASE
            WHEN SUM(e.amount) > p.budget THEN 'Bütçe Aşıldı'
            WHEN SUM(e.amount) >= p.budget * 0.9 THEN 'Kritik'
            ELSE 'Uyarı'
        END
    FROM projects p
    INNER JOIN expenses e ON e.project_id = p.id AND e.status = 'approved'
    GROUP BY p.id, p.name, p.budget
    HAVING SUM(e.amount) >= p.budget * 0.8
    ORDER BY 4 DESC
$$"#,
};

pub const VIEWS: [ViewRoutine; 2] = [EMPLOYEE_PROJECT_PERFORMANCE, PROJECT_COST_SUMMARY];

pub const FUNCTIONS: [FunctionRoutine; 2] = [MONTHLY_ATTENDANCE_REPORT, BUDGET_ALERT_PROJECTS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_create_the_named_object() {
        for v in VIEWS {
            assert!(v.definition.starts_with(&format!("CREATE OR REPLACE VIEW {} AS", v.name)));
        }
        for f in FUNCTIONS {
            assert!(
                f.definition
                    .starts_with(&format!("CREATE OR REPLACE FUNCTION {}(", f.name))
            );
        }
    }

    #[test]
    fn test_drop_statements() {
        assert_eq!(
            MONTHLY_ATTENDANCE_REPORT.drop_statement(),
            "DROP FUNCTION IF EXISTS sp_monthly_attendance_report(INTEGER, INTEGER)"
        );
        assert_eq!(
            BUDGET_ALERT_PROJECTS.drop_statement(),
            "DROP FUNCTION IF EXISTS sp_budget_alert_projects()"
        );
        assert_eq!(
            PROJECT_COST_SUMMARY.drop_statement(),
            "DROP VIEW IF EXISTS vw_project_cost_summary"
        );
    }
}
