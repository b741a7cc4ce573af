// ABOUTME: Integration tests for the key-value storage backends
// ABOUTME: Exercises in-memory and JSON-file stores through the shared trait and factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutriveda::config::StorageUrl;
use nutriveda::models::UserProfile;
use nutriveda::services::SimulatedLatency;
use nutriveda::session::SessionManager;
use nutriveda::storage::{get_json, set_json, FileStore, InMemoryStore, KeyValueStore, Storage};
use tempfile::TempDir;

async fn exercise_contract(store: &dyn KeyValueStore) {
    assert!(store.get("user").await.unwrap().is_none());

    store.set("user", "first").await.unwrap();
    store.set("user", "second").await.unwrap();
    store.set("theme", "dark").await.unwrap();
    assert_eq!(store.get("user").await.unwrap().as_deref(), Some("second"));

    store.remove("user").await.unwrap();
    store.remove("user").await.unwrap();
    assert!(store.get("user").await.unwrap().is_none());
    assert_eq!(store.get("theme").await.unwrap().as_deref(), Some("dark"));

    store.clear().await.unwrap();
    assert!(store.get("theme").await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_store_contract() {
    common::init_test_logging();
    exercise_contract(&InMemoryStore::new()).await;
}

#[tokio::test]
async fn test_file_store_contract() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    exercise_contract(&FileStore::new(dir.path().join("nested/state.json"))).await;
}

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let profile = UserProfile::new("abc1234", "asha@example.com", "Asha");
    set_json(&FileStore::new(&path), "user", &profile)
        .await
        .unwrap();

    let reopened: Option<UserProfile> = get_json(&FileStore::new(&path), "user").await.unwrap();
    assert_eq!(reopened, Some(profile));

    let raw = std::fs::read_to_string(&path).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(document.get("user").unwrap().is_string());
}

#[tokio::test]
async fn test_file_store_replaces_corrupt_document_on_write() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let store = FileStore::new(&path);
    assert!(store.get("user").await.is_err());

    store.set("user", "fresh").await.unwrap();
    assert_eq!(store.get("user").await.unwrap().as_deref(), Some("fresh"));
}

#[tokio::test]
async fn test_factory_selects_backend() {
    let dir = TempDir::new().unwrap();
    let memory = Storage::new(&StorageUrl::Memory);
    assert_eq!(memory.backend_name(), "memory");

    let url = StorageUrl::parse_url(&format!("file:{}", dir.path().join("s.json").display())).unwrap();
    let file = Storage::new(&url);
    assert_eq!(file.backend_name(), "file");
    file.set("k", "v").await.unwrap();
    assert!(dir.path().join("s.json").exists());
}

#[tokio::test]
async fn test_session_persists_across_file_store_instances() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let mut first = SessionManager::new(FileStore::new(&path), SimulatedLatency::disabled());
    let id = first
        .signup("asha@example.com", "secret", "Asha")
        .await
        .unwrap()
        .id
        .clone();

    let mut second = SessionManager::new(FileStore::new(&path), SimulatedLatency::disabled());
    assert!(second.restore().await.authenticated);
    assert_eq!(second.current_user().unwrap().id, id);

    second.logout().await.unwrap();
    let mut third = SessionManager::new(FileStore::new(&path), SimulatedLatency::disabled());
    assert!(!third.restore().await.authenticated);
}
