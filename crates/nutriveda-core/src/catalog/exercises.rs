// ABOUTME: The fixed eight-item exercise catalog
// ABOUTME: Each entry lists the goals it is suitable for
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use crate::models::{Exercise, ExerciseCategory, Intensity};

fn exercise(
    id: &str,
    name: &str,
    description: &str,
    (duration_minutes, calories_burned): (u32, u32),
    intensity: Intensity,
    category: ExerciseCategory,
    suitable: &[&str],
) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        duration_minutes,
        calories_burned,
        intensity,
        category,
        suitable: suitable.iter().map(|&goal| goal.to_owned()).collect(),
    }
}

#[rustfmt::skip]
pub(super) fn build() -> Vec<Exercise> {
    use ExerciseCategory::{Cardio, Flexibility, Strength};
    use Intensity::{High, Low, Medium};

    vec![
        exercise("1", "Walking", "Brisk walking outdoors or on a treadmill",
            (30, 120), Low, Cardio,
            &["Weight loss", "Overall health", "Stress reduction"]),
        exercise("2", "Yoga", "Beginner-friendly yoga poses focusing on flexibility",
            (30, 110), Low, Flexibility,
            &["Better flexibility", "Stress reduction", "Overall health"]),
        exercise("3", "Bodyweight Exercises", "Push-ups, squats, lunges, and planks circuit",
            (20, 150), Medium, Strength,
            &["Muscle gain", "Increased strength", "Weight loss"]),
        exercise("4", "Swimming", "Freestyle swimming laps in a pool",
            (30, 200), Medium, Cardio,
            &["Weight loss", "Improved endurance", "Overall health"]),
        exercise("5", "Cycling", "Outdoor cycling or stationary bike",
            (30, 180), Medium, Cardio,
            &["Weight loss", "Improved endurance", "Overall health"]),
        exercise("6", "HIIT Workout",
            "High-intensity interval training with short bursts of intense exercise",
            (20, 250), High, Cardio,
            &["Weight loss", "Improved endurance", "Increased metabolism"]),
        exercise("7", "Weight Training", "Resistance training with dumbbells or machines",
            (45, 180), Medium, Strength,
            &["Muscle gain", "Increased strength", "Weight loss"]),
        exercise("8", "Pilates", "Core-strengthening exercises with controlled movements",
            (40, 160), Medium, Flexibility,
            &["Better flexibility", "Core strength", "Overall health"]),
    ]
}
