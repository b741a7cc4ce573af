// ABOUTME: Service layer over the static catalogs with simulated network latency
// ABOUTME: Nutrition lookups, meal plan generation and fitness recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! Domain service layer
//!
//! These services stand in for a remote backend. Each async call waits a
//! fixed round trip before answering from the in-process catalogs.

/// Exercise recommendations from questionnaire goals
pub mod fitness;

/// Fixed per-operation delays
pub mod latency;

/// Meal plan generation from the session questionnaire
pub mod meal_plans;

/// Catalog lookups, search and random meals
pub mod nutrition;

pub use fitness::recommendations_for;
pub use latency::SimulatedLatency;
pub use meal_plans::{current_season, MealPlanService};
pub use nutrition::{FoodSource, NutritionSearch, NutritionService, StaticCatalog};
