// ABOUTME: Core data models for the Nutriveda platform
// ABOUTME: Re-exports FoodItem, MealPreferences, UserProfile, Exercise and their tag enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! # Data Models
//!
//! - `FoodItem`: a catalog entry with its season, region and constitution tags
//! - `MealPreferences`: the per-request preference record fed to the filter
//! - `UserProfile` / `Questionnaire`: the persisted profile, read leniently
//! - `Exercise`: a catalog entry for fitness recommendations

mod exercise;
mod food;
mod lenient;
mod preferences;
mod profile;

pub use exercise::{Exercise, ExerciseCategory, Intensity};
pub use food::{Constitution, FoodItem, NutritionFacts, Season};
pub use preferences::MealPreferences;
pub use profile::{ProfileUpdate, Questionnaire, UserProfile};
