pub use sea_orm_migration::prelude::*;

pub mod entity_iden;
mod m20250101_000001_create_tables;
mod m20250101_000002_create_report_routines;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_tables::Migration),
            Box::new(m20250101_000002_create_report_routines::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};

    async fn table_names(db: &sea_orm::DatabaseConnection) -> Result<Vec<String>, DbErr> {
        let rows = db
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
            ))
            .await?;
        rows.iter().map(|row| row.try_get::<String>("", "name")).collect()
    }

    #[tokio::test]
    async fn test_up_and_down_on_sqlite() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        Migrator::up(&db, None).await?;
        let tables = table_names(&db).await?;
        for table in [
            "attendance",
            "employees",
            "expenses",
            "project_employees",
            "projects",
            "roles",
        ] {
            assert!(tables.contains(&table.to_string()), "missing table {}", table);
        }
        // Routines are PostgreSQL-only, so SQLite has no views
        let views = db
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'view'",
            ))
            .await?;
        assert!(views.is_empty());

        Migrator::down(&db, None).await?;
        let tables = table_names(&db).await?;
        assert!(!tables.contains(&"expenses".to_string()));
        Ok(())
    }
}
