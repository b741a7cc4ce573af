// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Wraps the in-memory and JSON-file stores behind one enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use super::{FileStore, InMemoryStore, KeyValueStore};
use crate::config::StorageUrl;
use nutriveda_core::errors::AppResult;
use tracing::info;

/// Unified storage interface selected by [`StorageUrl`]
#[derive(Debug, Clone)]
pub enum Storage {
    /// Process-local map
    Memory(InMemoryStore),
    /// JSON document on disk
    File(FileStore),
}

impl Storage {
    /// Create the backend named by `url`
    #[must_use]
    pub fn new(url: &StorageUrl) -> Self {
        match url {
            StorageUrl::Memory => {
                info!("Initializing in-memory storage");
                Self::Memory(InMemoryStore::new())
            }
            StorageUrl::File { path } => {
                info!(path = %path.display(), "Initializing file storage");
                Self::File(FileStore::new(path.clone()))
            }
        }
    }

    /// Short backend name for logs and CLI output
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::File(_) => "file",
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }

    async fn clear(&self) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.clear().await,
            Self::File(store) => store.clear().await,
        }
    }
}
