// ABOUTME: Questionnaire option lists and default form values
// ABOUTME: Dietary restrictions, fitness goals, regions, and basic-information defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

/// Selectable dietary restrictions
pub const DIETARY_RESTRICTIONS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Gluten-free",
    "Dairy-free",
    "Nut-free",
    "Low-carb",
    "Keto",
    "Paleo",
];

/// Selectable fitness goals
pub const FITNESS_GOALS: &[&str] = &[
    "Weight loss",
    "Muscle gain",
    "Improved endurance",
    "Increased strength",
    "Better flexibility",
    "Overall health",
    "Stress reduction",
];

/// Selectable regions
pub const REGIONS: &[&str] = &[
    "North America",
    "South America",
    "Europe",
    "Africa",
    "South Asia",
    "East Asia",
    "Southeast Asia",
    "Australia/Oceania",
    "Middle East",
];

/// Default age on a fresh form (years)
pub const DEFAULT_AGE: u32 = 30;

/// Default height on a fresh form (cm)
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;

/// Default weight on a fresh form (kg)
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
