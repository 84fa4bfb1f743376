//! In-memory record store for membership entries.
//!
//! # Design
//! `RecordStore` owns the key/value map outright and only exposes the four
//! CRUD primitives plus size queries. Reads take the lock in shared mode;
//! `create`, `update` and `delete` take it exclusively, and each primitive
//! completes its check-then-mutate inside a single guard so concurrent
//! callers never observe a half-applied write.
//!
//! Missing and duplicate keys are reported through [`Outcome`] rather than as
//! errors. Mapping outcomes to HTTP statuses and wire sentinels is the
//! response layer's job.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

/// Result of a single store primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `create` inserted the value.
    Created(String),
    /// `create` found the key already present and left it untouched.
    AlreadyExists,
    /// `read` found the key.
    Found(String),
    /// The key was absent for `read`, `update` or `delete`.
    NotFound,
    /// `update` overwrote the value.
    Updated(String),
    /// `delete` removed the entry.
    Removed,
}

#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<HashMap<String, String>>,
}

/// Handle shared between request handlers.
pub type SharedStore = Arc<RecordStore>;

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Insert `value` under `key` unless the key is already present.
    pub async fn create(&self, key: &str, value: String) -> Outcome {
        let mut records = self.records.write().await;
        if records.contains_key(key) {
            return Outcome::AlreadyExists;
        }
        records.insert(key.to_string(), value.clone());
        Outcome::Created(value)
    }

    pub async fn read(&self, key: &str) -> Outcome {
        let records = self.records.read().await;
        records
            .get(key)
            .cloned()
            .map(Outcome::Found)
            .unwrap_or(Outcome::NotFound)
    }

    /// Overwrite the value of an existing key. Never inserts.
    pub async fn update(&self, key: &str, value: String) -> Outcome {
        let mut records = self.records.write().await;
        match records.get_mut(key) {
            Some(slot) => {
                slot.clone_from(&value);
                Outcome::Updated(value)
            }
            None => Outcome::NotFound,
        }
    }

    pub async fn delete(&self, key: &str) -> Outcome {
        let mut records = self.records.write().await;
        records
            .remove(key)
            .map(|_| Outcome::Removed)
            .unwrap_or(Outcome::NotFound)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_of_unknown_key_is_not_found() {
        let store = RecordStore::new();
        assert_eq!(store.read("0001").await, Outcome::NotFound);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn create_then_read_returns_value() {
        let store = RecordStore::new();
        assert_eq!(
            store.create("0001", "apple".to_string()).await,
            Outcome::Created("apple".to_string())
        );
        assert_eq!(store.read("0001").await, Outcome::Found("apple".to_string()));
    }

    #[tokio::test]
    async fn second_create_keeps_first_value() {
        let store = RecordStore::new();
        store.create("0001", "apple".to_string()).await;
        assert_eq!(
            store.create("0001", "xpple".to_string()).await,
            Outcome::AlreadyExists
        );
        assert_eq!(store.read("0001").await, Outcome::Found("apple".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_of_absent_key_does_not_insert() {
        let store = RecordStore::new();
        assert_eq!(
            store.update("0002", "xrange".to_string()).await,
            Outcome::NotFound
        );
        assert_eq!(store.read("0002").await, Outcome::NotFound);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_overwrites_existing_value() {
        let store = RecordStore::new();
        store.create("0002", "xrange".to_string()).await;
        assert_eq!(
            store.update("0002", "orange".to_string()).await,
            Outcome::Updated("orange".to_string())
        );
        assert_eq!(store.read("0002").await, Outcome::Found("orange".to_string()));
    }

    #[tokio::test]
    async fn update_accepts_empty_value() {
        let store = RecordStore::new();
        store.create("0002", "xrange".to_string()).await;
        assert_eq!(
            store.update("0002", String::new()).await,
            Outcome::Updated(String::new())
        );
        assert_eq!(store.read("0002").await, Outcome::Found(String::new()));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = RecordStore::new();
        store.create("0001", "apple".to_string()).await;
        assert_eq!(store.delete("0001").await, Outcome::Removed);
        assert_eq!(store.read("0001").await, Outcome::NotFound);
        assert_eq!(store.delete("0001").await, Outcome::NotFound);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_have_one_winner() {
        let store = RecordStore::shared();
        let callers = 32;

        let handles: Vec<_> = (0..callers)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { (i, store.create("race", format!("v{i}")).await) })
            })
            .collect();

        let mut winners = Vec::new();
        let mut losers = 0;
        for handle in handles {
            match handle.await.unwrap() {
                (i, Outcome::Created(value)) => {
                    assert_eq!(value, format!("v{i}"));
                    winners.push(value);
                }
                (_, Outcome::AlreadyExists) => losers += 1,
                (_, other) => panic!("unexpected outcome: {other:?}"),
            }
        }

        assert_eq!(winners.len(), 1);
        assert_eq!(losers, callers - 1);
        assert_eq!(store.read("race").await, Outcome::Found(winners.remove(0)));
    }
}
