// ABOUTME: Key-value persistence for session state with versioned JSON envelopes
// ABOUTME: Pluggable backends (in-memory, file) plus typed load/save helpers with safe fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Persistence
//!
//! Each top-level entity is stored as JSON under its own key, wrapped in an
//! envelope carrying the schema version:
//!
//! ```json
//! { "schemaVersion": 1, "value": { ... } }
//! ```
//!
//! Readers never fail on bad data. A missing key, malformed JSON, or a version
//! mismatch is logged and the caller receives the default value.

/// File-backed store, one JSON file per key
pub mod file;
/// In-memory store
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use macroplan_core::constants::storage_keys::SCHEMA_VERSION;
use macroplan_core::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Raw string storage keyed by entity name
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    /// Write the raw value under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn set_raw(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Versioned wrapper written around every stored value
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    schema_version: u32,
    value: T,
}

/// Reject keys that could escape a storage namespace
///
/// # Errors
///
/// Returns `InvalidInput` for empty keys or keys with characters other than
/// ASCII letters, digits, `_` and `-`.
pub fn validate_key(key: &str) -> AppResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!("Invalid storage key '{key}'")))
    }
}

/// Load a value, or `None` when absent or unreadable
///
/// Unreadable covers malformed JSON, a schema version mismatch, and backend
/// read failures; each is logged at warn level.
pub async fn load<T>(store: &dyn KeyValueStore, key: &str) -> Option<T>
where
    T: DeserializeOwned,
{
    let raw = match store.get_raw(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No stored value, using default");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored value, using default");
            return None;
        }
    };

    let envelope: Envelope<Value> = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!(key, error = %e, "Malformed stored JSON, using default");
            return None;
        }
    };

    if envelope.schema_version != SCHEMA_VERSION {
        warn!(
            key,
            found = envelope.schema_version,
            expected = SCHEMA_VERSION,
            "Stored schema version mismatch, using default"
        );
        return None;
    }

    match serde_json::from_value(envelope.value) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored value has unexpected shape, using default");
            None
        }
    }
}

/// Load a value, falling back to `T::default()`
pub async fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    load(store, key).await.unwrap_or_default()
}

/// Serialize `value` into a versioned envelope and store it
///
/// # Errors
///
/// Returns `SerializationError` or `StorageError` from the backend.
pub async fn save<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + Sync + ?Sized,
{
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        value,
    };
    let raw = serde_json::to_string(&envelope)?;
    store.set_raw(key, raw).await?;
    debug!(key, "Persisted value");
    Ok(())
}
