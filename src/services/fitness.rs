// ABOUTME: Exercise recommendations for the signed-in user's fitness goals
// ABOUTME: Synchronous; reads goals from the session questionnaire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use crate::session::SessionManager;
use crate::storage::KeyValueStore;
use nutriveda_core::catalog::exercise_catalog;
use nutriveda_core::models::Exercise;
use nutriveda_intelligence::recommend_exercises;

/// Recommended exercises for the session
///
/// Without a user, questionnaire or goal list, the full catalog is returned.
#[must_use]
pub fn recommendations_for<S: KeyValueStore>(session: &SessionManager<S>) -> Vec<Exercise> {
    let goals = session
        .current_user()
        .and_then(|user| user.questionnaire.as_ref())
        .and_then(|questionnaire| questionnaire.fitness_goals.as_deref());
    recommend_exercises(exercise_catalog(), goals)
}
