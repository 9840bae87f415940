// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable key-value storage.
//!
//! The tracker keeps its whole history under a single key, so the storage
//! interface is a plain string-to-string map: read a key, overwrite a key,
//! remove a key. Every call is synchronous and atomic per key.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;

/// Storage key names as constants.
pub mod keys {
    /// Serialized array of every workout, in insertion order.
    pub const WORKOUTS: &str = "workouts";
}

/// Synchronous key-value storage surviving across sessions.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Reject a write that would not fit in `quota` bytes.
pub(crate) fn check_quota(quota: Option<usize>, needed: usize) -> Result<(), StorageError> {
    match quota {
        Some(quota) if needed > quota => Err(StorageError::QuotaExceeded { needed, quota }),
        _ => Ok(()),
    }
}
