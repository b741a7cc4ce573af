// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory sessions, and questionnaire fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutriveda`

use async_trait::async_trait;
use nutriveda::config::AppConfig;
use nutriveda::context::AppContext;
use nutriveda::errors::{AppError, AppResult};
use nutriveda::models::{Constitution, FoodItem, Questionnaire};
use nutriveda::services::{FoodSource, SimulatedLatency};
use nutriveda::session::SessionManager;
use nutriveda::storage::InMemoryStore;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Anonymous session over a fresh in-memory store, no latency
pub fn memory_session() -> SessionManager<InMemoryStore> {
    init_test_logging();
    SessionManager::new(InMemoryStore::new(), SimulatedLatency::disabled())
}

/// Signed-in session without a questionnaire
pub async fn signed_in_session() -> SessionManager<InMemoryStore> {
    let mut session = memory_session();
    session
        .signup("asha@example.com", "secret", "Asha")
        .await
        .unwrap();
    session
}

/// Questionnaire for a pitta user in South Asia chasing strength
pub fn pitta_questionnaire() -> Questionnaire {
    Questionnaire {
        age: Some(34),
        gender: Some("female".to_owned()),
        height: Some(162.0),
        weight: Some(58.0),
        dietary_restrictions: Some(vec!["Vegetarian".to_owned()]),
        fitness_goals: Some(vec!["Increased strength".to_owned(), "Muscle gain".to_owned()]),
        health_conditions: Some(Vec::new()),
        ayurvedic_type: Some(Constitution::Pitta),
        region: Some("South Asia".to_owned()),
    }
}

/// Signed-in session that has completed the questionnaire
pub async fn onboarded_session() -> SessionManager<InMemoryStore> {
    let mut session = signed_in_session().await;
    session
        .update_questionnaire(pitta_questionnaire())
        .await
        .unwrap();
    session
}

/// Context over an in-memory store with no latency
pub async fn test_context() -> AppContext<InMemoryStore> {
    init_test_logging();
    AppContext::with_store(AppConfig::for_testing(), InMemoryStore::new()).await
}

/// Food source whose backend is always down
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCatalog;

#[async_trait]
impl FoodSource for OfflineCatalog {
    async fn foods(&self) -> AppResult<Vec<FoodItem>> {
        Err(AppError::storage("catalog unavailable"))
    }
}
