//! Trip record operations: create, list, get, seed and the store diagnostic.
//!
//! HTTP handlers and the `seed` CLI command both go through these functions;
//! none of them know which [`TripStore`] implementation they are talking to.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use travelog_core::config::DatabaseConfig;
use travelog_core::seed::seed_trips;
use travelog_core::validate::check_trip;
use travelog_core::{parse_trip_id, TravelogError, Trip, TripId, TripRecord};

use crate::store::TripStore;

/// Collections listed by the diagnostic probe.
const MAX_DIAGNOSTIC_COLLECTIONS: usize = 10;
/// Probe errors are cut to this many characters.
const MAX_DIAGNOSTIC_ERROR_CHARS: usize = 80;

pub async fn create_trip(store: &dyn TripStore, trip: &Trip) -> Result<TripId, TravelogError> {
    let id = store.insert(trip).await?;
    info!("Created trip {} ('{}')", id, trip.title);
    Ok(id)
}

pub async fn list_trips(store: &dyn TripStore) -> Result<Vec<TripRecord>, TravelogError> {
    store.find_all().await
}

/// Look up a trip by its client-facing id string.
///
/// Malformed ids fail with `InvalidId` before the store is queried.
pub async fn get_trip(store: &dyn TripStore, raw_id: &str) -> Result<TripRecord, TravelogError> {
    let id = parse_trip_id(raw_id)?;
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| TravelogError::NotFound(raw_id.to_string()))
}

/// Insert every seed trip whose title is not already stored.
///
/// Each insert is independent: if one fails, the ones before it stay.
/// Entries are checked before they are written.
pub async fn seed(store: &dyn TripStore) -> Result<usize, TravelogError> {
    let mut titles: HashSet<String> = store
        .find_all()
        .await?
        .into_iter()
        .map(|r| r.trip.title)
        .collect();

    let mut inserted = 0;
    for trip in seed_trips() {
        if titles.contains(&trip.title) {
            continue;
        }
        check_trip(&trip)?;
        if let Err(e) = store.insert(&trip).await {
            warn!("Seeding stopped after {} inserts: {}", inserted, e);
            return Err(e);
        }
        titles.insert(trip.title);
        inserted += 1;
    }

    info!("Seed complete: {} new trips ({} titles stored)", inserted, titles.len());
    Ok(inserted)
}

// ── Diagnostics ───────────────────────────────────────────────

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn set_marker(present: bool) -> String {
    if present { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate_chars(msg: &str, max: usize) -> String {
    msg.chars().take(max).collect()
}

/// Probe the store without ever failing; problems are reported in the body.
pub async fn diagnostics(store: Option<&dyn TripStore>, config: &DatabaseConfig) -> Diagnostics {
    let mut report = Diagnostics {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_marker(config.url.is_some()),
        database_name: set_marker(config.name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Some(store) = store else {
        return report;
    };

    report.database = "✅ Available".to_string();
    report.connection_status = "Connected".to_string();
    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_DIAGNOSTIC_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            warn!("Diagnostic probe failed: {}", e);
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&e.to_string(), MAX_DIAGNOSTIC_ERROR_CHARS)
            );
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::store::MemoryTripStore;

    fn sample(title: &str) -> Trip {
        Trip {
            title: title.to_string(),
            date_text: "Juli 2019".to_string(),
            ..Trip::default()
        }
    }

    #[tokio::test]
    async fn get_distinguishes_invalid_id_from_not_found() {
        let store = MemoryTripStore::new();
        assert!(matches!(
            get_trip(&store, "not-an-id").await,
            Err(TravelogError::InvalidId(_))
        ));
        assert!(matches!(
            get_trip(&store, &Uuid::new_v4().to_string()).await,
            Err(TravelogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_then_get_returns_same_trip() {
        let store = MemoryTripStore::new();
        let trip = sample("Dublin, Irland");
        let id = create_trip(&store, &trip).await.unwrap();

        let record = get_trip(&store, &id.to_string()).await.unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.trip, trip);
    }

    #[tokio::test]
    async fn list_on_empty_store_is_empty() {
        let store = MemoryTripStore::new();
        assert!(list_trips(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let store = MemoryTripStore::new();
        assert_eq!(seed(&store).await.unwrap(), 11);
        assert_eq!(seed(&store).await.unwrap(), 0);
        assert_eq!(list_trips(&store).await.unwrap().len(), 11);
    }

    #[tokio::test]
    async fn seed_skips_titles_already_present() {
        let store = MemoryTripStore::new();
        create_trip(&store, &sample("Dublin, Irland")).await.unwrap();
        create_trip(&store, &sample("Somewhere else")).await.unwrap();

        assert_eq!(seed(&store).await.unwrap(), 10);
        let all = list_trips(&store).await.unwrap();
        assert_eq!(all.len(), 12);
        assert_eq!(all.iter().filter(|r| r.trip.title == "Dublin, Irland").count(), 1);
    }

    #[tokio::test]
    async fn seed_failure_keeps_earlier_inserts_and_resumes() {
        let store = MemoryTripStore::new();
        store.fail_after(4);

        assert!(matches!(seed(&store).await, Err(TravelogError::Storage(_))));
        let kept = list_trips(&store).await.unwrap();
        assert_eq!(kept.len(), 4);
        let expected: Vec<String> = seed_trips().into_iter().take(4).map(|t| t.title).collect();
        let titles: Vec<String> = kept.into_iter().map(|r| r.trip.title).collect();
        assert_eq!(titles, expected);

        store.clear_failures();
        assert_eq!(seed(&store).await.unwrap(), 7);
        assert_eq!(list_trips(&store).await.unwrap().len(), 11);
    }

    #[tokio::test]
    async fn diagnostics_without_store_reports_not_connected() {
        let config = DatabaseConfig::default();
        let report = diagnostics(None, &config).await;
        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "❌ Not Available");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn diagnostics_lists_collections_when_connected() {
        let store = MemoryTripStore::new();
        seed(&store).await.unwrap();
        let config = DatabaseConfig {
            url: Some("postgres://localhost/travelog".to_string()),
            ..DatabaseConfig::default()
        };

        let report = diagnostics(Some(&store), &config).await;
        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections, vec!["trip"]);
    }

    #[tokio::test]
    async fn diagnostics_truncates_probe_errors() {
        let store = MemoryTripStore::new();
        store.fail_with("x".repeat(200));

        let report = diagnostics(Some(&store), &DatabaseConfig::default()).await;
        let detail = report
            .database
            .strip_prefix("⚠️  Connected but Error: ")
            .unwrap();
        assert_eq!(detail.chars().count(), MAX_DIAGNOSTIC_ERROR_CHARS);
        assert_eq!(report.connection_status, "Connected");
    }
}
