// ABOUTME: Simulated network latency for in-process service calls
// ABOUTME: Fixed delays per operation, mirroring the round trips of a real backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

/// Food name search
pub const SEARCH_FOODS_MS: u64 = 500;

/// Single food lookup and per-axis catalog queries
pub const CATALOG_LOOKUP_MS: u64 = 300;

/// Meal plan generation
pub const RANDOM_MEAL_MS: u64 = 800;

/// Login and signup
pub const AUTH_ROUND_TRIP_MS: u64 = 1_000;

/// Questionnaire submission
pub const QUESTIONNAIRE_SUBMIT_MS: u64 = 1_000;
