// ABOUTME: Application context wiring configuration, storage, session and services
// ABOUTME: Built once at startup and passed explicitly to every handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use crate::config::AppConfig;
use crate::routes::{resolve, Route, RouteDecision};
use crate::services::{MealPlanService, NutritionSearch, NutritionService, SimulatedLatency};
use crate::session::SessionManager;
use crate::storage::{KeyValueStore, Storage};
use tracing::info;

/// Everything a handler needs, with the session held explicitly
#[derive(Debug)]
pub struct AppContext<S: KeyValueStore = Storage> {
    /// Loaded configuration
    pub config: AppConfig,
    /// Round-trip delay policy
    pub latency: SimulatedLatency,
    /// The user session
    pub session: SessionManager<S>,
    /// Catalog backend
    pub nutrition: NutritionService,
    /// Meal plan generation
    pub meal_plans: MealPlanService,
    /// Search box over the catalog backend
    pub search: NutritionSearch,
}

impl AppContext<Storage> {
    /// Build from configuration and restore any stored session
    pub async fn bootstrap(config: AppConfig) -> Self {
        let store = Storage::new(&config.storage);
        Self::with_store(config, store).await
    }
}

impl<S: KeyValueStore> AppContext<S> {
    /// Build over an explicit store and restore any stored session
    pub async fn with_store(config: AppConfig, store: S) -> Self {
        let latency = SimulatedLatency::new(config.latency);
        let nutrition = NutritionService::new(latency);
        let mut session = SessionManager::new(store, latency);
        let status = session.restore().await;

        info!(
            authenticated = status.authenticated,
            questionnaire = status.questionnaire_complete,
            "Application context ready"
        );

        Self {
            config,
            latency,
            session,
            meal_plans: MealPlanService::new(nutrition.clone()),
            search: NutritionSearch::new(nutrition.clone()),
            nutrition,
        }
    }

    /// Gate navigation to `route` on the current session
    #[must_use]
    pub fn navigate(&self, route: Route) -> RouteDecision {
        resolve(route, self.session.status())
    }
}
