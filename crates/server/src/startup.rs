//! Server startup: store connection and shared state initialization.

use std::sync::Arc;

use tracing::info;

use travelog_core::Config;

use crate::db;
use crate::state::{AppState, SharedStore};
use crate::store::{MemoryTripStore, PgTripStore};

/// Connect the trip store. `None` means degraded mode: the server still
/// starts, `/test` reports the database as unavailable and data endpoints 500.
pub async fn connect_store(config: &Config, memory: bool) -> Option<SharedStore> {
    if memory {
        info!("Using in-memory trip store (data is lost on exit)");
        return Some(Arc::new(MemoryTripStore::new()));
    }
    let pool = db::init_pg_pool(&config.database).await?;
    Some(Arc::new(PgTripStore::new(pool)))
}

/// Build `AppState` for the HTTP server.
pub async fn build_app_state(config: &Config, memory: bool) -> Arc<AppState> {
    let store = connect_store(config, memory).await;
    if store.is_none() {
        tracing::warn!("Starting without a database — trip endpoints will answer 500");
    }
    Arc::new(AppState::new(store, config.clone()))
}
