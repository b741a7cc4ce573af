// ABOUTME: Meal planning and fitness recommendation engine for the Nutriveda platform
// ABOUTME: Preference filtering, meal bucket assembly, catalog queries, and exercise matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

#![deny(unsafe_code)]

//! # Nutriveda Intelligence
//!
//! Pure, synchronous algorithms over the static catalogs. Nothing here
//! sleeps or persists, and logging stays at `debug`. The service layer in
//! the main crate wraps these with simulated latency and error reporting.
//!
//! - [`preference_filter`]: conjunctive wildcard-aware filtering plus per-axis queries
//! - [`meal_assembler`]: shuffle-then-take buckets for breakfast, lunch and dinner
//! - [`fitness`]: goal-matched exercise recommendations

/// Conjunctive catalog filtering by constitution, region and season
pub mod preference_filter;

/// Random breakfast/lunch/dinner bucket assembly
pub mod meal_assembler;

/// Goal-based exercise recommendations
pub mod fitness;

pub use fitness::recommend_exercises;
pub use meal_assembler::{BucketCapacities, MacroTotals, MealAssembler, MealPlan, MealSlot};
pub use preference_filter::filter_foods;
