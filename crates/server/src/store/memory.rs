use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use travelog_core::{TravelogError, Trip, TripId, TripRecord, TRIP_COLLECTION};

use super::{StoreResult, TripStore};

/// In-process trip store backed by an ordered `Vec`.
///
/// Used by the test suite and by `serve --memory`. The collection only shows
/// up in [`TripStore::list_collection_names`] after the first insert, the way
/// a document store creates collections lazily.
#[derive(Debug, Default)]
pub struct MemoryTripStore {
    trips: RwLock<Vec<TripRecord>>,
    failure: Mutex<Option<String>>,
    /// Inserts allowed before every further insert fails.
    insert_budget: Mutex<Option<usize>>,
}

impl MemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_failure(&self) -> StoreResult<()> {
        let failure = self.failure.lock().map_err(|_| poisoned())?;
        match failure.as_ref() {
            Some(msg) => Err(TravelogError::Storage(msg.clone())),
            None => Ok(()),
        }
    }

    fn take_insert_slot(&self) -> StoreResult<()> {
        let mut budget = self.insert_budget.lock().map_err(|_| poisoned())?;
        match budget.as_mut() {
            Some(0) => Err(TravelogError::Storage("insert budget exhausted".to_string())),
            Some(left) => {
                *left -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
impl MemoryTripStore {
    /// Make every subsequent operation fail with a storage error carrying `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = Some(message.into());
        }
    }

    /// Let the next `inserts` inserts succeed, then fail every insert after them.
    pub fn fail_after(&self, inserts: usize) {
        if let Ok(mut budget) = self.insert_budget.lock() {
            *budget = Some(inserts);
        }
    }

    /// Undo [`fail_with`](Self::fail_with) and [`fail_after`](Self::fail_after).
    pub fn clear_failures(&self) {
        if let Ok(mut budget) = self.insert_budget.lock() {
            *budget = None;
        }
        if let Ok(mut failure) = self.failure.lock() {
            *failure = None;
        }
    }

    pub fn len(&self) -> usize {
        self.trips.read().map(|t| t.len()).unwrap_or(0)
    }
}

fn poisoned() -> TravelogError {
    TravelogError::Storage("memory store lock poisoned".to_string())
}

#[async_trait]
impl TripStore for MemoryTripStore {
    async fn insert(&self, trip: &Trip) -> StoreResult<TripId> {
        self.check_failure()?;
        self.take_insert_slot()?;
        let id = Uuid::new_v4();
        let mut trips = self.trips.write().map_err(|_| poisoned())?;
        trips.push(TripRecord::new(id, trip.clone()));
        Ok(id)
    }

    async fn find_all(&self) -> StoreResult<Vec<TripRecord>> {
        self.check_failure()?;
        let trips = self.trips.read().map_err(|_| poisoned())?;
        Ok(trips.clone())
    }

    async fn find_by_id(&self, id: TripId) -> StoreResult<Option<TripRecord>> {
        self.check_failure()?;
        let trips = self.trips.read().map_err(|_| poisoned())?;
        Ok(trips.iter().find(|r| r.id == id).cloned())
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        self.check_failure()?;
        let trips = self.trips.read().map_err(|_| poisoned())?;
        if trips.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![TRIP_COLLECTION.to_string()])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> Trip {
        Trip {
            title: title.to_string(),
            date_text: "2024".to_string(),
            ..Trip::default()
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let store = MemoryTripStore::new();
        let id = store.insert(&sample("Budapest")).await.unwrap();

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.trip.title, "Budapest");
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let store = MemoryTripStore::new();
        for title in ["a", "b", "c"] {
            store.insert(&sample(title)).await.unwrap();
        }
        let titles: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.trip.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn collection_appears_after_first_insert() {
        let store = MemoryTripStore::new();
        assert!(store.list_collection_names().await.unwrap().is_empty());
        store.insert(&sample("x")).await.unwrap();
        assert_eq!(store.list_collection_names().await.unwrap(), vec!["trip"]);
    }

    #[tokio::test]
    async fn fail_with_turns_every_call_into_storage_error() {
        let store = MemoryTripStore::new();
        store.fail_with("connection reset");
        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, TravelogError::Storage(ref m) if m == "connection reset"));
        assert!(store.insert(&sample("x")).await.is_err());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn fail_after_lets_n_inserts_through() {
        let store = MemoryTripStore::new();
        store.fail_after(2);
        store.insert(&sample("a")).await.unwrap();
        store.insert(&sample("b")).await.unwrap();
        assert!(matches!(store.insert(&sample("c")).await, Err(TravelogError::Storage(_))));
        assert_eq!(store.find_all().await.unwrap().len(), 2);

        store.clear_failures();
        store.insert(&sample("c")).await.unwrap();
        assert_eq!(store.len(), 3);
    }
}
