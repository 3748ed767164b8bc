use model::routines::{FUNCTIONS, VIEWS};
use sea_orm::DbBackend;
use sea_orm_migration::prelude::*;
use tracing::{info, warn};

/// Report views and functions. They use PostgreSQL-only SQL (`FILTER`,
/// `MAKE_DATE`, `LANGUAGE sql` functions), so other backends skip this step.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DbBackend::Postgres {
            warn!("Skipping report views and functions, they require PostgreSQL");
            return Ok(());
        }

        let db = manager.get_connection();
        for view in VIEWS {
            info!("Creating view {}", view.name);
            db.execute_unprepared(view.definition).await?;
        }
        for function in FUNCTIONS {
            info!("Creating function {}", function.name);
            db.execute_unprepared(function.definition).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DbBackend::Postgres {
            return Ok(());
        }

        let db = manager.get_connection();
        for function in FUNCTIONS.iter().rev() {
            db.execute_unprepared(&function.drop_statement()).await?;
        }
        for view in VIEWS.iter().rev() {
            db.execute_unprepared(&view.drop_statement()).await?;
        }
        Ok(())
    }
}
