// ABOUTME: Mock nutrition backend over the static food catalog
// ABOUTME: Every call waits a fixed simulated round trip before answering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use super::latency::SimulatedLatency;
use crate::logging::AppLogger;
use async_trait::async_trait;
use nutriveda_core::catalog::food_catalog;
use nutriveda_core::constants::{latency, search};
use nutriveda_core::errors::{AppError, AppResult};
use nutriveda_core::models::{Constitution, FoodItem, MealPreferences, Season};
use nutriveda_intelligence::preference_filter::{
    filter_foods, find_by_id, foods_by_category, foods_by_constitution, foods_by_region,
    foods_by_season, search_by_name,
};
use nutriveda_intelligence::{MealAssembler, MealPlan};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// Where the nutrition backend reads its food items from
#[async_trait]
pub trait FoodSource: Send + Sync + fmt::Debug {
    /// Every available food item, in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if the items cannot be loaded
    async fn foods(&self) -> AppResult<Vec<FoodItem>>;
}

/// The built-in ten-item catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

#[async_trait]
impl FoodSource for StaticCatalog {
    async fn foods(&self) -> AppResult<Vec<FoodItem>> {
        Ok(food_catalog().to_vec())
    }
}

/// Catalog queries and meal generation behind simulated latency
#[derive(Debug, Clone)]
pub struct NutritionService {
    source: Arc<dyn FoodSource>,
    latency: SimulatedLatency,
    assembler: MealAssembler,
    rng: Arc<Mutex<StdRng>>,
}

impl NutritionService {
    /// Service over the built-in catalog with an entropy-seeded shuffler
    #[must_use]
    pub fn new(latency: SimulatedLatency) -> Self {
        Self::with_rng(latency, StdRng::from_entropy())
    }

    /// Service with a deterministic shuffler
    #[must_use]
    pub fn with_seed(latency: SimulatedLatency, seed: u64) -> Self {
        Self::with_rng(latency, StdRng::seed_from_u64(seed))
    }

    fn with_rng(latency: SimulatedLatency, rng: StdRng) -> Self {
        Self {
            source: Arc::new(StaticCatalog),
            latency,
            assembler: MealAssembler::new(),
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Read food items from `source` instead of the built-in catalog
    #[must_use]
    pub fn with_source(mut self, source: impl FoodSource + 'static) -> Self {
        self.source = Arc::new(source);
        self
    }

    /// Wait the round trip, load the items and answer `query` over them
    async fn call<T>(
        &self,
        operation: &str,
        delay_ms: u64,
        query: impl FnOnce(&[FoodItem]) -> (usize, T) + Send,
    ) -> AppResult<T> {
        let applied = self.latency.round_trip(delay_ms).await;
        let catalog = self.source.foods().await.map_err(|e| {
            warn!(service.operation = %operation, error = %e, "Food source unavailable");
            e
        })?;
        let (results, value) = query(&catalog);
        AppLogger::log_service_call(operation, results, applied);
        Ok(value)
    }

    /// Case-insensitive name search
    ///
    /// # Errors
    ///
    /// Returns the food source's error if it cannot be read
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodItem>> {
        self.call("search_foods", latency::SEARCH_FOODS_MS, |catalog| {
            let found = search_by_name(catalog, query);
            (found.len(), found)
        })
        .await
    }

    /// Single item by identifier
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no item has the identifier, or the food
    /// source's error if it cannot be read
    pub async fn get_food_by_id(&self, id: &str) -> AppResult<FoodItem> {
        let found = self
            .call("get_food_by_id", latency::CATALOG_LOOKUP_MS, |catalog| {
                let found = find_by_id(catalog, id).cloned();
                (usize::from(found.is_some()), found)
            })
            .await?;
        found.ok_or_else(|| AppError::not_found(format!("Food item '{id}'")))
    }

    /// Items in a category (exact match)
    ///
    /// # Errors
    ///
    /// Returns the food source's error if it cannot be read
    pub async fn get_foods_by_category(&self, category: &str) -> AppResult<Vec<FoodItem>> {
        self.call("get_foods_by_category", latency::CATALOG_LOOKUP_MS, |catalog| {
            let found = foods_by_category(catalog, category);
            (found.len(), found)
        })
        .await
    }

    /// Items in season or available year-round
    ///
    /// # Errors
    ///
    /// Returns the food source's error if it cannot be read
    pub async fn get_foods_by_season(&self, season: Season) -> AppResult<Vec<FoodItem>> {
        self.call("get_foods_by_season", latency::CATALOG_LOOKUP_MS, |catalog| {
            let found = foods_by_season(catalog, season);
            (found.len(), found)
        })
        .await
    }

    /// Items from a region or tagged `Global`
    ///
    /// # Errors
    ///
    /// Returns the food source's error if it cannot be read
    pub async fn get_foods_by_region(&self, region: &str) -> AppResult<Vec<FoodItem>> {
        self.call("get_foods_by_region", latency::CATALOG_LOOKUP_MS, |catalog| {
            let found = foods_by_region(catalog, region);
            (found.len(), found)
        })
        .await
    }

    /// Items suiting a constitution or tagged `tridoshic`
    ///
    /// # Errors
    ///
    /// Returns the food source's error if it cannot be read
    pub async fn get_foods_by_ayurvedic_type(
        &self,
        constitution: Constitution,
    ) -> AppResult<Vec<FoodItem>> {
        self.call(
            "get_foods_by_ayurvedic_type",
            latency::CATALOG_LOOKUP_MS,
            |catalog| {
                let found = foods_by_constitution(catalog, constitution);
                (found.len(), found)
            },
        )
        .await
    }

    /// The whole catalog
    ///
    /// # Errors
    ///
    /// Returns the food source's error if it cannot be read
    pub async fn get_all_foods(&self) -> AppResult<Vec<FoodItem>> {
        self.call("get_all_foods", latency::CATALOG_LOOKUP_MS, |catalog| {
            (catalog.len(), catalog.to_vec())
        })
        .await
    }

    /// Filter by preferences, then draw breakfast, lunch and dinner
    ///
    /// # Errors
    ///
    /// Returns the food source's error if it cannot be read
    pub async fn get_random_meal(&self, preferences: &MealPreferences) -> AppResult<MealPlan> {
        let candidates = self
            .call("get_random_meal", latency::RANDOM_MEAL_MS, |catalog| {
                let candidates = filter_foods(catalog, preferences);
                (candidates.len(), candidates)
            })
            .await?;
        let mut rng = self.rng.lock().await;
        Ok(self.assembler.assemble(&candidates, &mut *rng))
    }
}

/// The search box: short queries never reach the backend
#[derive(Debug, Clone)]
pub struct NutritionSearch {
    service: NutritionService,
}

impl NutritionSearch {
    /// Search front-end over `service`
    #[must_use]
    pub const fn new(service: NutritionService) -> Self {
        Self { service }
    }

    /// True when `query` is long enough to be sent
    #[must_use]
    pub fn is_searchable(query: &str) -> bool {
        query.chars().count() >= search::MIN_QUERY_LENGTH
    }

    /// Results for `query`; empty without a service call when it is too short
    ///
    /// # Errors
    ///
    /// Propagates backend failures as `OperationFailed`
    pub async fn run(&self, query: &str) -> AppResult<Vec<FoodItem>> {
        if !Self::is_searchable(query) {
            return Ok(Vec::new());
        }
        self.service
            .search_foods(query)
            .await
            .map_err(|e| e.into_operation_failed("search foods"))
    }
}
