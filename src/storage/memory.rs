// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage for tests and offline sessions.

use super::{check_quota, KeyValueStore};
use crate::error::StorageError;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory key-value store.
///
/// Clones share the same entries, so a test can keep a handle while the
/// controller owns another.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: Option<Arc<DashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store with no quota.
    pub fn new() -> Self {
        Self {
            entries: Some(Arc::new(DashMap::new())),
            quota_bytes: None,
        }
    }

    /// Create an empty store that rejects values larger than `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::new()
        }
    }

    /// Create a store that is never available (offline mode).
    ///
    /// All operations will return an error if called.
    pub fn unavailable() -> Self {
        Self {
            entries: None,
            quota_bytes: None,
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |e| e.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Helper to get the entries or return an error if offline.
    fn get_entries(&self) -> Result<&DashMap<String, String>, StorageError> {
        self.entries
            .as_deref()
            .ok_or_else(|| StorageError::Unavailable("Storage not available (offline mode)".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get_entries()?.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let entries = self.get_entries()?;
        check_quota(self.quota_bytes, value.len())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.get_entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("workouts").unwrap(), None);

        store.set("workouts", "[]").unwrap();
        assert_eq!(store.get("workouts").unwrap().as_deref(), Some("[]"));

        store.set("workouts", "[1]").unwrap();
        assert_eq!(store.get("workouts").unwrap().as_deref(), Some("[1]"));

        store.remove("workouts").unwrap();
        assert_eq!(store.get("workouts").unwrap(), None);
        // Removing twice is fine
        store.remove("workouts").unwrap();
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_quota_rejects_large_values() {
        let store = MemoryStore::with_quota(4);
        store.set("k", "1234").unwrap();
        let err = store.set("k", "12345").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                needed: 5,
                quota: 4
            }
        ));
        // Previous value is kept
        assert_eq!(store.get("k").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_unavailable_fails_every_operation() {
        let store = MemoryStore::unavailable();
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(
            store.set("k", "v"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(matches!(store.remove("k"), Err(StorageError::Unavailable(_))));
        assert!(store.is_empty());
    }
}
