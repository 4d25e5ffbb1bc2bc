//! Local staging store for onboarding records
//!
//! Holds the three user-edited collections (skills, interests, past
//! projects) across a session. Owns both the in-memory view and its
//! persisted form behind a single write path, so the two can never drift.
//! No network side effects; every mutation persists to the session store.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::session::SessionStore;

/// The three staged collections, addressed by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Skills,
    Interests,
    PastProjects,
}

impl Collection {
    /// Key under which this collection is persisted in the session store
    pub fn session_key(self) -> &'static str {
        match self {
            Collection::Skills => "staging.skills",
            Collection::Interests => "staging.interests",
            Collection::PastProjects => "staging.pastProjects",
        }
    }
}

/// Session-persisted staging area for user-entered records
pub struct StagingStore {
    session: Arc<dyn SessionStore>,
}

impl StagingStore {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// Load a staged collection. Missing or corrupt stored data yields an
    /// empty collection, never an error.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let Some(raw) = self.session.get(collection.session_key()) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    collection = collection.session_key(),
                    %err,
                    "discarding corrupt staged collection"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite a staged collection in one atomic save
    pub fn save<T: Serialize>(&self, collection: Collection, records: &[T]) {
        match serde_json::to_string(records) {
            Ok(raw) => self.session.set(collection.session_key(), &raw),
            Err(err) => {
                warn!(
                    collection = collection.session_key(),
                    %err,
                    "failed to serialize staged collection"
                );
            }
        }
    }

    /// Replace the record with the same natural key, or append if absent.
    /// Returns the new collection length.
    pub fn upsert<T, K, F>(&self, collection: Collection, record: T, key_fn: F) -> usize
    where
        T: Serialize + DeserializeOwned,
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let mut records: Vec<T> = self.load(collection);
        let key = key_fn(&record);

        match records.iter().position(|existing| key_fn(existing) == key) {
            Some(index) => records[index] = record,
            None => records.push(record),
        }

        self.save(collection, &records);
        debug!(
            collection = collection.session_key(),
            len = records.len(),
            "staged record upserted"
        );
        records.len()
    }

    /// Remove the first record whose natural key matches; no-op when absent
    pub fn remove<T, K, F>(&self, collection: Collection, key: &K, key_fn: F)
    where
        T: Serialize + DeserializeOwned,
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let mut records: Vec<T> = self.load(collection);

        if let Some(index) = records.iter().position(|existing| key_fn(existing) == *key) {
            records.remove(index);
            self.save(collection, &records);
            debug!(
                collection = collection.session_key(),
                len = records.len(),
                "staged record removed"
            );
        }
    }

    /// Drop the stored collection entirely
    pub fn clear(&self, collection: Collection) {
        self.session.remove(collection.session_key());
    }
}
