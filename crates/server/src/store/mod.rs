//! Trip document store.
//!
//! Handlers never talk to Postgres directly: they go through the
//! [`TripStore`] trait object held in `AppState`, so the whole HTTP surface
//! can run against [`MemoryTripStore`] in tests.

mod memory;
mod postgres;

use async_trait::async_trait;

use travelog_core::{Trip, TripId, TripRecord};

pub use memory::MemoryTripStore;
pub use postgres::PgTripStore;

pub type StoreResult<T> = Result<T, travelog_core::TravelogError>;

/// Minimal document-store contract the trip service needs.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Insert a validated trip, returning the store-assigned id.
    async fn insert(&self, trip: &Trip) -> StoreResult<TripId>;

    /// All trips in store-native (insertion) order.
    async fn find_all(&self) -> StoreResult<Vec<TripRecord>>;

    async fn find_by_id(&self, id: TripId) -> StoreResult<Option<TripRecord>>;

    /// Names of the collections visible to this connection.
    async fn list_collection_names(&self) -> StoreResult<Vec<String>>;
}
