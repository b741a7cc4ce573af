// ABOUTME: JSON-file key-value store persisting a single object document on disk
// ABOUTME: Whole-document read-modify-write, serialized by an async mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use super::KeyValueStore;
use nutriveda_core::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type Document = BTreeMap<String, String>;

/// Store persisted as one JSON object (`{"key": "value", ...}`)
///
/// A missing file reads as an empty store. Parent directories are created on
/// first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    /// Store backed by the document at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_raw(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read storage document {}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }

    fn parse(&self, raw: &str) -> AppResult<Document> {
        if raw.trim().is_empty() {
            return Ok(Document::new());
        }
        serde_json::from_str(raw).map_err(|e| {
            AppError::storage(format!(
                "Storage document {} is not a JSON object of strings",
                self.path.display()
            ))
            .with_source(e)
        })
    }

    async fn load(&self) -> AppResult<Document> {
        match self.read_raw().await? {
            Some(raw) => self.parse(&raw),
            None => Ok(Document::new()),
        }
    }

    /// Load for a write; a malformed document is discarded
    async fn load_for_write(&self) -> AppResult<Document> {
        let Some(raw) = self.read_raw().await? else {
            return Ok(Document::new());
        };
        Ok(self.parse(&raw).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Replacing unreadable storage document");
            Document::new()
        }))
    }

    async fn persist(&self, document: &Document) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Failed to create {}", parent.display())).with_source(e)
            })?;
        }

        let raw = serde_json::to_string_pretty(document)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, raw).await.map_err(|e| {
            AppError::storage(format!("Failed to write {}", staging.display())).with_source(e)
        })?;
        fs::rename(&staging, &self.path).await.map_err(|e| {
            AppError::storage(format!("Failed to replace {}", self.path.display())).with_source(e)
        })?;

        debug!(path = %self.path.display(), keys = document.len(), "Persisted storage document");
        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load_for_write().await?;
        document.insert(key.to_owned(), value.to_owned());
        self.persist(&document).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.load_for_write().await?;
        if document.remove(key).is_some() {
            self.persist(&document).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to remove {}",
                self.path.display()
            ))
            .with_source(e)),
        }
    }
}
