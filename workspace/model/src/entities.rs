//! SeaORM entities for the construction company database: roles, employees,
//! projects and their assignments, project expenses and daily attendance.

pub mod attendance;
pub mod employee;
pub mod expense;
pub mod project;
pub mod project_employee;
pub mod role;

pub mod prelude {
    pub use super::attendance::Entity as Attendance;
    pub use super::employee::Entity as Employee;
    pub use super::expense::Entity as Expense;
    pub use super::project::Entity as Project;
    pub use super::project_employee::Entity as ProjectEmployee;
    pub use super::role::Entity as Role;
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let engineer = role::ActiveModel {
            name: Set("İnşaat Mühendisi".to_string()),
            description: Set(Some("Saha mühendisi".to_string())),
            base_salary: Set(Decimal::new(6500000, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let ayse = employee::ActiveModel {
            first_name: Set("Ayşe".to_string()),
            last_name: Set("Demir".to_string()),
            email: Set(Some("ayse@example.com".to_string())),
            phone: Set(None),
            role_id: Set(engineer.id),
            hire_date: Set(NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()),
            salary: Set(Decimal::new(7000000, 2)),
            is_active: Set(true),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let bridge = project::ActiveModel {
            name: Set("Köprü Onarımı".to_string()),
            location: Set(Some("İzmir".to_string())),
            description: Set(None),
            start_date: Set(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()),
            end_date: Set(None),
            budget: Set(Decimal::new(150000000, 2)),
            status: Set(project::ProjectStatus::Active),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        project_employee::ActiveModel {
            project_id: Set(bridge.id),
            employee_id: Set(ayse.id),
            assigned_date: Set(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()),
        }
        .insert(&db)
        .await?;

        for (amount, status) in [
            (Decimal::new(2500000, 2), expense::ExpenseStatus::Approved),
            (Decimal::new(400000, 2), expense::ExpenseStatus::Pending),
        ] {
            expense::ActiveModel {
                project_id: Set(bridge.id),
                category: Set("Malzeme".to_string()),
                amount: Set(amount),
                expense_date: Set(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()),
                description: Set(Some("Çimento".to_string())),
                status: Set(status),
                ..Default::default()
            }
            .insert(&db)
            .await?;
        }

        attendance::ActiveModel {
            employee_id: Set(ayse.id),
            project_id: Set(Some(bridge.id)),
            work_date: Set(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()),
            hours_worked: Set(Decimal::new(85, 1)),
            status: Set(attendance::AttendanceStatus::Present),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Relations
        let employee_role = ayse.find_related(Role).one(&db).await?;
        assert_eq!(employee_role.map(|r| r.id), Some(engineer.id));

        let assigned = bridge.find_related(Employee).all(&db).await?;
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].last_name, "Demir");

        let employees = bridge.find_related(ProjectEmployee).all(&db).await?;
        assert_eq!(employees.len(), 1);
        let assignment = &employees[0];
        let assigned_project = assignment.find_related(Project).one(&db).await?;
        assert_eq!(assigned_project.map(|p| p.name), Some("Köprü Onarımı".to_string()));
        let assigned_employee = assignment.find_related(Employee).one(&db).await?;
        assert_eq!(assigned_employee.map(|e| e.id), Some(ayse.id));
        assert_eq!(
            ayse.find_related(ProjectEmployee).count(&db).await?,
            1
        );

        let pending = Expense::find()
            .filter(expense::Column::Status.eq(expense::ExpenseStatus::Pending))
            .count(&db)
            .await?;
        assert_eq!(pending, 1);

        let days = ayse.find_related(Attendance).all(&db).await?;
        assert_eq!(days[0].status, attendance::AttendanceStatus::Present);
        assert_eq!(days[0].project_id, Some(bridge.id));

        // Deleting a project removes its expenses and assignments
        bridge.delete(&db).await?;
        assert_eq!(Expense::find().count(&db).await?, 0);
        assert_eq!(ProjectEmployee::find().count(&db).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_role_name_is_unique() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let make = || role::ActiveModel {
            name: Set("Formen".to_string()),
            description: Set(None),
            base_salary: Set(Decimal::new(4000000, 2)),
            ..Default::default()
        };
        make().insert(&db).await?;
        assert!(make().insert(&db).await.is_err());
        Ok(())
    }
}
