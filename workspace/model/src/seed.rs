//! Demo data for a fresh database so every report has something to show.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Set, TransactionTrait,
};
use tracing::{debug, info, instrument};

use crate::entities::{attendance, employee, expense, project, project_employee, role};
use crate::entities::attendance::AttendanceStatus;
use crate::entities::expense::ExpenseStatus;
use crate::entities::project::ProjectStatus;

/// Days of attendance history generated before `today`.
pub const ATTENDANCE_HISTORY_DAYS: i64 = 56;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub roles: usize,
    pub employees: usize,
    pub projects: usize,
    pub assignments: usize,
    pub expenses: usize,
    pub attendance: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

const ROLES: [(&str, &str, i64); 4] = [
    ("İnşaat Mühendisi", "Saha ve şantiye mühendisliği", 6500000),
    ("Şantiye Şefi", "Şantiye yönetimi", 8000000),
    ("Formen", "Ekip sorumlusu", 4500000),
    ("Operatör", "İş makinesi operatörü", 3800000),
];

// (first name, last name, role index, salary in kuruş, active)
const EMPLOYEES: [(&str, &str, usize, i64, bool); 7] = [
    ("Ayşe", "Demir", 0, 7000000, true),
    ("Mehmet", "Kaya", 1, 8500000, true),
    ("Ali", "Yıldız", 2, 4700000, true),
    ("Zeynep", "Çelik", 0, 6800000, true),
    ("Hasan", "Şahin", 3, 3900000, true),
    ("Elif", "Aydın", 3, 4000000, true),
    ("Murat", "Öztürk", 2, 4600000, false),
];

// (name, location, budget in kuruş, status, start offset in days before today)
const PROJECTS: [(&str, &str, i64, ProjectStatus, i64); 4] = [
    ("Köprü Onarımı", "İzmir", 150000000, ProjectStatus::Active, 200),
    ("Konut Sitesi A Blok", "Ankara", 900000000, ProjectStatus::Active, 320),
    ("Tünel Güçlendirme", "Bursa", 60000000, ProjectStatus::Active, 120),
    ("Okul Binası", "Konya", 250000000, ProjectStatus::Planned, -30),
];

// (project index, category, amount in kuruş, days before today, status)
const EXPENSES: [(usize, &str, i64, i64, ExpenseStatus); 14] = [
    (0, "Malzeme", 42000000, 150, ExpenseStatus::Approved),
    (0, "Ekipman Kiralama", 35000000, 95, ExpenseStatus::Approved),
    (0, "Nakliye", 8500000, 60, ExpenseStatus::Approved),
    (0, "Malzeme", 39000000, 12, ExpenseStatus::Approved),
    (1, "Malzeme", 210000000, 280, ExpenseStatus::Approved),
    (1, "İşçilik", 95000000, 180, ExpenseStatus::Approved),
    (1, "Ekipman Kiralama", 40000000, 70, ExpenseStatus::Pending),
    (1, "Nakliye", 12500000, 20, ExpenseStatus::Rejected),
    (2, "Malzeme", 31000000, 100, ExpenseStatus::Approved),
    (2, "Ekipman Kiralama", 22000000, 45, ExpenseStatus::Approved),
    (2, "Güvenlik", 9500000, 30, ExpenseStatus::Approved),
    (2, "Nakliye", 3000000, 8, ExpenseStatus::Pending),
    (0, "Güvenlik", 2750000, 5, ExpenseStatus::Pending),
    (1, "Malzeme", 18000000, 3, ExpenseStatus::Pending),
];

// (employee index, project index)
const ASSIGNMENTS: [(usize, usize); 8] = [
    (0, 0),
    (1, 1),
    (2, 1),
    (3, 2),
    (4, 0),
    (5, 2),
    (1, 0),
    (6, 1),
];

/// Inserts the demo data set unless the database already has roles.
///
/// Dates are laid out relative to `today`, so the week and month based reports
/// have recent rows. Runs in a single transaction.
#[instrument(skip(db))]
pub async fn seed_demo_data<C>(db: &C, today: NaiveDate) -> Result<SeedSummary, DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    if role::Entity::find().count(db).await? > 0 {
        info!("Database already contains data, skipping seed");
        return Ok(SeedSummary::default());
    }

    let txn = db.begin().await?;
    let mut summary = SeedSummary::default();

    let mut role_ids = Vec::with_capacity(ROLES.len());
    for (name, description, base_salary) in ROLES {
        let model = role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
            base_salary: Set(Decimal::new(base_salary, 2)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        role_ids.push(model.id);
        summary.roles += 1;
    }

    let mut employee_ids = Vec::with_capacity(EMPLOYEES.len());
    for (index, (first_name, last_name, role_index, salary, is_active)) in
        EMPLOYEES.into_iter().enumerate()
    {
        let model = employee::ActiveModel {
            first_name: Set(first_name.to_string()),
            last_name: Set(last_name.to_string()),
            email: Set(Some(format!("calisan{}@example.com", index + 1))),
            phone: Set(None),
            role_id: Set(role_ids[role_index]),
            hire_date: Set(today - Duration::days(400 + 30 * index as i64)),
            salary: Set(Decimal::new(salary, 2)),
            is_active: Set(is_active),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        employee_ids.push(model.id);
        summary.employees += 1;
    }

    let mut project_ids = Vec::with_capacity(PROJECTS.len());
    for (name, location, budget, status, started_days_ago) in PROJECTS {
        let model = project::ActiveModel {
            name: Set(name.to_string()),
            location: Set(Some(location.to_string())),
            description: Set(None),
            start_date: Set(today - Duration::days(started_days_ago)),
            end_date: Set(None),
            budget: Set(Decimal::new(budget, 2)),
            status: Set(status),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        project_ids.push(model.id);
        summary.projects += 1;
    }

    for (employee_index, project_index) in ASSIGNMENTS {
        project_employee::ActiveModel {
            project_id: Set(project_ids[project_index]),
            employee_id: Set(employee_ids[employee_index]),
            assigned_date: Set(today - Duration::days(PROJECTS[project_index].4.max(0))),
        }
        .insert(&txn)
        .await?;
        summary.assignments += 1;
    }

    for (project_index, category, amount, days_ago, status) in EXPENSES {
        expense::ActiveModel {
            project_id: Set(project_ids[project_index]),
            category: Set(category.to_string()),
            amount: Set(Decimal::new(amount, 2)),
            expense_date: Set(today - Duration::days(days_ago)),
            description: Set(Some(format!("{} gideri", category))),
            status: Set(status),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        summary.expenses += 1;
    }

    // First assignment of each active employee decides the site they work on
    for (employee_index, employee_id) in employee_ids.iter().enumerate() {
        if !EMPLOYEES[employee_index].4 {
            continue;
        }
        let project_id = ASSIGNMENTS
            .iter()
            .find(|(e, _)| *e == employee_index)
            .map(|(_, p)| project_ids[*p]);

        for offset in 1..=ATTENDANCE_HISTORY_DAYS {
            let work_date = today - Duration::days(offset);
            if matches!(work_date.weekday(), Weekday::Sat | Weekday::Sun) {
                continue;
            }
            let (status, hours) = attendance_pattern(employee_index, offset);
            attendance::ActiveModel {
                employee_id: Set(*employee_id),
                project_id: Set(project_id),
                work_date: Set(work_date),
                hours_worked: Set(hours),
                status: Set(status),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            summary.attendance += 1;
        }
    }

    txn.commit().await?;
    info!("Seeded demo data: {:?}", summary);
    Ok(summary)
}

/// Deterministic mix of statuses so the attendance reports are not uniform.
fn attendance_pattern(employee_index: usize, offset: i64) -> (AttendanceStatus, Decimal) {
    let slot = (offset as usize + employee_index * 3) % 17;
    let pattern = match slot {
        0 => (AttendanceStatus::Absent, Decimal::ZERO),
        5 | 11 => (AttendanceStatus::Late, Decimal::new(65, 1)),
        8 if employee_index % 2 == 0 => (AttendanceStatus::Leave, Decimal::ZERO),
        _ => (AttendanceStatus::Present, Decimal::new(8, 0)),
    };
    debug!("Attendance slot {} for employee {}", slot, employee_index);
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::prelude::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ColumnTrait, Database, QueryFilter};

    #[tokio::test]
    async fn test_seed_populates_every_table_once() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await.expect("Migrations failed.");
        let today = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();

        let summary = seed_demo_data(&db, today).await?;
        assert_eq!(summary.roles, ROLES.len());
        assert_eq!(summary.employees, EMPLOYEES.len());
        assert_eq!(summary.projects, PROJECTS.len());
        assert_eq!(summary.assignments, ASSIGNMENTS.len());
        assert_eq!(summary.expenses, EXPENSES.len());
        assert!(summary.attendance > 0);

        assert_eq!(Attendance::find().count(&db).await? as usize, summary.attendance);
        let weekend_rows = Attendance::find()
            .all(&db)
            .await?
            .into_iter()
            .filter(|a| matches!(a.work_date.weekday(), Weekday::Sat | Weekday::Sun))
            .count();
        assert_eq!(weekend_rows, 0);

        let pending = Expense::find()
            .filter(expense::Column::Status.eq(ExpenseStatus::Pending))
            .count(&db)
            .await?;
        assert!(pending > 0);

        // A second run leaves the data alone
        assert!(seed_demo_data(&db, today).await?.is_empty());
        assert_eq!(Role::find().count(&db).await? as usize, ROLES.len());
        Ok(())
    }
}
