// ABOUTME: Exercise catalog models for goal-based workout suggestions
// ABOUTME: Exercise, Intensity, and ExerciseCategory definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use serde::{Deserialize, Serialize};

/// Perceived effort of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    /// Easy, conversational pace
    Low,
    /// Moderate effort
    Medium,
    /// Hard effort
    High,
}

/// Training modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseCategory {
    /// Heart and lung conditioning
    Cardio,
    /// Resistance work
    Strength,
    /// Range of motion
    Flexibility,
    /// Stability and coordination
    Balance,
}

/// A catalog exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Approximate energy burned per session (kcal)
    pub calories_burned: u32,
    /// Effort level
    pub intensity: Intensity,
    /// Modality
    pub category: ExerciseCategory,
    /// Goal labels this exercise is good for
    pub suitable: Vec<String>,
}

impl Exercise {
    /// Whether any goal label contains any of `goals` (case-insensitive)
    #[must_use]
    pub fn suits_any(&self, goals: &[String]) -> bool {
        let goals: Vec<String> = goals.iter().map(|goal| goal.to_lowercase()).collect();
        self.suitable.iter().any(|label| {
            let label = label.to_lowercase();
            goals.iter().any(|goal| label.contains(goal.as_str()))
        })
    }
}
