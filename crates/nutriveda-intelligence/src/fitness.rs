// ABOUTME: Goal-based exercise recommendations over the exercise catalog
// ABOUTME: Falls back to the full catalog when too few exercises match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use nutriveda_core::constants::fitness::MIN_GOAL_MATCHES;
use nutriveda_core::models::Exercise;
use tracing::debug;

/// Exercises suited to the user's fitness goals
///
/// An exercise matches when any of its goal labels contains any of `goals`
/// (case-insensitive). With no goals, or fewer than
/// [`MIN_GOAL_MATCHES`] matches, the whole catalog is returned.
#[must_use]
pub fn recommend_exercises(catalog: &[Exercise], goals: Option<&[String]>) -> Vec<Exercise> {
    let Some(goals) = goals else {
        return catalog.to_vec();
    };

    let matching: Vec<Exercise> = catalog
        .iter()
        .filter(|exercise| exercise.suits_any(goals))
        .cloned()
        .collect();

    debug!(
        goals = goals.len(),
        matched = matching.len(),
        "Matched exercises to fitness goals"
    );

    if matching.len() >= MIN_GOAL_MATCHES {
        matching
    } else {
        catalog.to_vec()
    }
}
