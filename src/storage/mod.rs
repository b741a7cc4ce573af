// ABOUTME: Key-value persistence port for the session profile
// ABOUTME: Pluggable backends (in-memory, JSON file) behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

/// Backend selection from configuration
pub mod factory;
/// JSON-file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use factory::Storage;
pub use file::FileStore;
pub use memory::InMemoryStore;

use nutriveda_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// String-keyed, string-valued store with browser-storage semantics
///
/// Values are opaque strings; callers that persist structured data
/// serialize it themselves (see [`get_json`] and [`set_json`]). Writes are
/// last-writer-wins.
///
/// # Examples
///
/// ```rust,no_run
/// use nutriveda::storage::{InMemoryStore, KeyValueStore};
/// # async fn example() -> Result<(), nutriveda::errors::AppError> {
/// let store = InMemoryStore::new();
/// store.set("user", "{\"id\":\"abc1234\"}").await?;
/// assert!(store.get("user").await?.is_some());
/// store.remove("user").await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Delete every key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn clear(&self) -> AppResult<()>;
}

/// Read and decode a JSON value
///
/// # Errors
///
/// Returns a storage error from the backend or a serialization error if the
/// stored text is not valid JSON for `T`
pub async fn get_json<T, S>(store: &S, key: &str) -> AppResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON value
///
/// # Errors
///
/// Returns a serialization error or a storage error from the backend
pub async fn set_json<T, S>(store: &S, key: &str, value: &T) -> AppResult<()>
where
    T: Serialize + Sync,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}
