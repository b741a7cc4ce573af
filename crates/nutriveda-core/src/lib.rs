// ABOUTME: Core types and constants for the Nutriveda meal planning platform
// ABOUTME: Foundation crate with error handling, domain models, static catalogs, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

#![deny(unsafe_code)]

//! # Nutriveda Core
//!
//! Foundation crate providing shared types and constants for the Nutriveda
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Flat error taxonomy with `AppError` and `ErrorCode`
//! - **constants**: Simulated latencies, bucket capacities, wildcard tags, storage keys
//! - **models**: Food items, preferences, exercises, and the persisted user profile
//! - **catalog**: The fixed food and exercise catalogs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FoodItem`, `MealPreferences`, `UserProfile`, `Exercise`)
pub mod models;

/// Immutable food and exercise catalogs
pub mod catalog;
