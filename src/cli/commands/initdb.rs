use anyhow::Result;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use model::seed::seed_demo_data;
use sea_orm::DatabaseConnection;
use tracing::{error, info, trace};

use crate::config::{Settings, connect};

pub async fn init_database(settings: &Settings, seed: bool) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");

    let db = connect(settings).await?;
    migrate(&db, seed).await?;

    info!("Database initialization completed successfully!");
    Ok(())
}

/// Applies pending migrations and optionally seeds demo data.
pub async fn migrate(db: &DatabaseConnection, seed: bool) -> Result<()> {
    info!("Running database migrations");
    if let Err(e) = Migrator::up(db, None).await {
        error!("Failed to run database migrations: {}", e);
        return Err(e.into());
    }
    info!("Database migrations completed successfully");

    if seed {
        let summary = seed_demo_data(db, Utc::now().date_naive()).await?;
        if summary.is_empty() {
            info!("Seed skipped, database already has data");
        } else {
            info!(
                "Seeded {} projects, {} employees, {} expenses, {} attendance records",
                summary.projects, summary.employees, summary.expenses, summary.attendance
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::entities::prelude::*;
    use sea_orm::{Database, EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn test_migrate_with_seed_is_repeatable() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migrate(&db, true).await.unwrap();
        let projects = Project::find().count(&db).await.unwrap();
        assert!(projects > 0);

        migrate(&db, true).await.unwrap();
        assert_eq!(Project::find().count(&db).await.unwrap(), projects);
    }
}
