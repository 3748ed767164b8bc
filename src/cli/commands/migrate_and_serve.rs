use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, trace};

use super::initdb::migrate;
use super::serve::serve_with_state;
use crate::config::{Settings, connect};
use crate::schemas::AppState;

pub async fn migrate_and_serve(settings: &Settings, seed: bool) -> Result<()> {
    trace!("Entering migrate_and_serve function");
    info!("Applying database migrations and starting server");

    let db = connect(settings).await?;
    migrate(&db, seed).await?;

    // Same pool serves the reports
    let state = AppState::new(Arc::new(db), settings.audit_log_capacity);
    debug!("Application state initialized successfully");

    serve_with_state(state, settings).await
}
