use crate::entity_iden::EntityIden;
use model::entities::prelude::*;
use model::entities::{attendance, employee, expense, project, project_employee, role};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::table())
                    .if_not_exists()
                    .col(pk_auto(Role::column(role::Column::Id)))
                    .col(string(Role::column(role::Column::Name)).unique_key())
                    .col(string_null(Role::column(role::Column::Description)))
                    .col(decimal(Role::column(role::Column::BaseSalary)).decimal_len(12, 2))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employee::table())
                    .if_not_exists()
                    .col(pk_auto(Employee::column(employee::Column::Id)))
                    .col(string(Employee::column(employee::Column::FirstName)))
                    .col(string(Employee::column(employee::Column::LastName)))
                    .col(string_null(Employee::column(employee::Column::Email)))
                    .col(string_null(Employee::column(employee::Column::Phone)))
                    .col(integer(Employee::column(employee::Column::RoleId)))
                    .col(date(Employee::column(employee::Column::HireDate)))
                    .col(decimal(Employee::column(employee::Column::Salary)).decimal_len(12, 2))
                    .col(boolean(Employee::column(employee::Column::IsActive)).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_role")
                            .from(Employee::table(), Employee::column(employee::Column::RoleId))
                            .to(Role::table(), Role::column(role::Column::Id))
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Project::table())
                    .if_not_exists()
                    .col(pk_auto(Project::column(project::Column::Id)))
                    .col(string(Project::column(project::Column::Name)))
                    .col(string_null(Project::column(project::Column::Location)))
                    .col(string_null(Project::column(project::Column::Description)))
                    .col(date(Project::column(project::Column::StartDate)))
                    .col(date_null(Project::column(project::Column::EndDate)))
                    .col(decimal(Project::column(project::Column::Budget)).decimal_len(14, 2))
                    .col(
                        string(Project::column(project::Column::Status))
                            .string_len(20)
                            .default("planned"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectEmployee::table())
                    .if_not_exists()
                    .col(integer(ProjectEmployee::column(project_employee::Column::ProjectId)))
                    .col(integer(ProjectEmployee::column(project_employee::Column::EmployeeId)))
                    .col(date(ProjectEmployee::column(project_employee::Column::AssignedDate)))
                    .primary_key(
                        Index::create()
                            .name("pk_project_employees")
                            .col(ProjectEmployee::column(project_employee::Column::ProjectId))
                            .col(ProjectEmployee::column(project_employee::Column::EmployeeId)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_employees_project")
                            .from(
                                ProjectEmployee::table(),
                                ProjectEmployee::column(project_employee::Column::ProjectId),
                            )
                            .to(Project::table(), Project::column(project::Column::Id))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_employees_employee")
                            .from(
                                ProjectEmployee::table(),
                                ProjectEmployee::column(project_employee::Column::EmployeeId),
                            )
                            .to(Employee::table(), Employee::column(employee::Column::Id))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Expense::table())
                    .if_not_exists()
                    .col(pk_auto(Expense::column(expense::Column::Id)))
                    .col(integer(Expense::column(expense::Column::ProjectId)))
                    .col(string(Expense::column(expense::Column::Category)))
                    .col(decimal(Expense::column(expense::Column::Amount)).decimal_len(12, 2))
                    .col(date(Expense::column(expense::Column::ExpenseDate)))
                    .col(string_null(Expense::column(expense::Column::Description)))
                    .col(
                        string(Expense::column(expense::Column::Status))
                            .string_len(20)
                            .default("pending"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expenses_project")
                            .from(Expense::table(), Expense::column(expense::Column::ProjectId))
                            .to(Project::table(), Project::column(project::Column::Id))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Attendance::table())
                    .if_not_exists()
                    .col(pk_auto(Attendance::column(attendance::Column::Id)))
                    .col(integer(Attendance::column(attendance::Column::EmployeeId)))
                    .col(integer_null(Attendance::column(attendance::Column::ProjectId)))
                    .col(date(Attendance::column(attendance::Column::WorkDate)))
                    .col(
                        decimal(Attendance::column(attendance::Column::HoursWorked))
                            .decimal_len(5, 2)
                            .default(0),
                    )
                    .col(string(Attendance::column(attendance::Column::Status)).string_len(20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_employee")
                            .from(
                                Attendance::table(),
                                Attendance::column(attendance::Column::EmployeeId),
                            )
                            .to(Employee::table(), Employee::column(employee::Column::Id))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_project")
                            .from(
                                Attendance::table(),
                                Attendance::column(attendance::Column::ProjectId),
                            )
                            .to(Project::table(), Project::column(project::Column::Id))
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The reports filter and group on these
        manager
            .create_index(
                Index::create()
                    .name("idx_expenses_project_date")
                    .table(Expense::table())
                    .col(Expense::column(expense::Column::ProjectId))
                    .col(Expense::column(expense::Column::ExpenseDate))
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_employee_date")
                    .table(Attendance::table())
                    .col(Attendance::column(attendance::Column::EmployeeId))
                    .col(Attendance::column(attendance::Column::WorkDate))
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse order of creation because of the foreign keys
        manager
            .drop_table(Table::drop().table(Attendance::table()).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expense::table()).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectEmployee::table()).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Project::table()).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employee::table()).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Role::table()).to_owned())
            .await?;
        Ok(())
    }
}
