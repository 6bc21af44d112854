use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use travelog_core::{TravelogError, Trip, TripId, TripRecord};

use super::{StoreResult, TripStore};

/// Postgres-backed document store: each trip is a JSONB document in the
/// `trip` table, keyed by a UUID generated on insert.
#[derive(Debug, Clone)]
pub struct PgTripStore {
    pool: PgPool,
}

impl PgTripStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_err(e: sqlx::Error) -> TravelogError {
    TravelogError::Storage(e.to_string())
}

fn record_from_row(row: &sqlx::postgres::PgRow) -> StoreResult<TripRecord> {
    let id: Uuid = row.try_get("id").map_err(storage_err)?;
    let Json(trip): Json<Trip> = row.try_get("doc").map_err(storage_err)?;
    Ok(TripRecord::new(id, trip))
}

#[async_trait]
impl TripStore for PgTripStore {
    async fn insert(&self, trip: &Trip) -> StoreResult<TripId> {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO trip (id, doc) VALUES ($1, $2)")
            .bind(id)
            .bind(Json(trip))
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(id)
    }

    async fn find_all(&self) -> StoreResult<Vec<TripRecord>> {
        let rows = sqlx::query("SELECT id, doc FROM trip ORDER BY seq")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        rows.iter().map(record_from_row).collect()
    }

    async fn find_by_id(&self, id: TripId) -> StoreResult<Option<TripRecord>> {
        let row = sqlx::query("SELECT id, doc FROM trip WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        row.as_ref().map(record_from_row).transpose()
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT table_name::text FROM information_schema.tables \
             WHERE table_schema = current_schema() \
               AND table_type = 'BASE TABLE' \
               AND table_name NOT LIKE '\\_sqlx%' \
             ORDER BY table_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(names)
    }
}
