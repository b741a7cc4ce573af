// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Simulated latencies, meal bucket sizes, catalog wildcards, and storage keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Simulated round-trip delays for every in-process service call
pub mod latency;

/// Questionnaire option lists and form defaults
pub mod questionnaire;

/// Wildcard tags that match every value on their filter axis
pub mod wildcards {
    /// Region tag that passes every region filter
    pub const GLOBAL_REGION: &str = "Global";
    /// Season tag that passes every season filter
    pub const ALL_SEASONS: &str = "All";
    /// Constitution tag that passes every constitution filter
    pub const TRIDOSHIC: &str = "tridoshic";
}

/// Meal bucket capacities
pub mod meals {
    /// Breakfast bucket size
    pub const BREAKFAST_ITEMS: usize = 3;
    /// Lunch bucket size
    pub const LUNCH_ITEMS: usize = 4;
    /// Dinner bucket size
    pub const DINNER_ITEMS: usize = 3;
}

/// Fitness recommendation tuning
pub mod fitness {
    /// Below this many goal matches the whole exercise catalog is recommended
    pub const MIN_GOAL_MATCHES: usize = 3;
}

/// Nutrition search tuning
pub mod search {
    /// Queries shorter than this return no results without hitting the service
    pub const MIN_QUERY_LENGTH: usize = 2;
}

/// Session and persistence
pub mod session {
    /// Key under which the whole user profile is persisted
    pub const PROFILE_STORAGE_KEY: &str = "user";
    /// Length of fabricated user identifiers
    pub const USER_ID_LENGTH: usize = 7;
    /// Alphabet for fabricated user identifiers (base 36)
    pub const USER_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
}

/// Service names for structured logging
pub mod service_names {
    /// Main service name
    pub const NUTRIVEDA: &str = "nutriveda";
    /// CLI binary name
    pub const NUTRIVEDA_CLI: &str = "nutriveda-cli";
}
