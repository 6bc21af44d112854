use std::sync::Arc;

use travelog_core::Config;

use crate::store::TripStore;

pub type SharedStore = Arc<dyn TripStore>;

pub struct AppState {
    /// `None` when the database is not configured or unreachable (degraded mode).
    pub store: Option<SharedStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Option<SharedStore>, config: Config) -> Self {
        Self { store, config }
    }
}
