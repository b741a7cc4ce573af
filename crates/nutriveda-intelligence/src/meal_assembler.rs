// ABOUTME: Splits a filtered food list into breakfast, lunch and dinner buckets
// ABOUTME: Each bucket is an independent shuffle-then-take-prefix of the same list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! # Meal Assembler
//!
//! Buckets are drawn independently, so the same food may appear in more than
//! one meal. A list shorter than a bucket's capacity yields every available
//! item for that bucket; there is no padding and no error.
//!
//! The randomness source is injected so callers can seed it in tests; bucket
//! contents carry no ordering guarantee.

use nutriveda_core::constants::meals;
use nutriveda_core::models::FoodItem;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of the three meal slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// Slots in serving order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

/// Maximum number of items per bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCapacities {
    /// Breakfast bucket size
    pub breakfast: usize,
    /// Lunch bucket size
    pub lunch: usize,
    /// Dinner bucket size
    pub dinner: usize,
}

impl Default for BucketCapacities {
    fn default() -> Self {
        Self {
            breakfast: meals::BREAKFAST_ITEMS,
            lunch: meals::LUNCH_ITEMS,
            dinner: meals::DINNER_ITEMS,
        }
    }
}

impl BucketCapacities {
    /// Capacity for a slot
    #[must_use]
    pub const fn for_slot(&self, slot: MealSlot) -> usize {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }
}

/// Summed macronutrients for a set of foods (per 100 g servings)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl MacroTotals {
    /// Sum the per-100 g nutrition of every food
    #[must_use]
    pub fn of(foods: &[FoodItem]) -> Self {
        foods.iter().fold(Self::default(), |totals, food| {
            let facts = &food.nutrition_per_100g;
            Self {
                calories: totals.calories + facts.calories,
                protein: totals.protein + facts.protein,
                carbs: totals.carbs + facts.carbs,
                fat: totals.fat + facts.fat,
            }
        })
    }
}

/// A generated day of meals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Breakfast foods
    pub breakfast: Vec<FoodItem>,
    /// Lunch foods
    pub lunch: Vec<FoodItem>,
    /// Dinner foods
    pub dinner: Vec<FoodItem>,
}

impl MealPlan {
    /// Foods for a slot
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Calories of one meal
    #[must_use]
    pub fn meal_calories(&self, slot: MealSlot) -> u32 {
        self.slot(slot)
            .iter()
            .map(|food| food.nutrition_per_100g.calories)
            .sum()
    }

    /// Calories across all three meals
    #[must_use]
    pub fn total_calories(&self) -> u32 {
        MealSlot::ALL
            .iter()
            .map(|&slot| self.meal_calories(slot))
            .sum()
    }

    /// Macro totals across all three meals
    #[must_use]
    pub fn macro_totals(&self) -> MacroTotals {
        let all: Vec<FoodItem> = MealSlot::ALL
            .iter()
            .flat_map(|&slot| self.slot(slot).iter().cloned())
            .collect();
        MacroTotals::of(&all)
    }

    /// True when every bucket is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.breakfast.is_empty() && self.lunch.is_empty() && self.dinner.is_empty()
    }
}

/// Builds meal plans from a filtered food list
#[derive(Debug, Clone, Copy, Default)]
pub struct MealAssembler {
    capacities: BucketCapacities,
}

impl MealAssembler {
    /// Assembler with the standard 3/4/3 buckets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembler with custom bucket sizes
    #[must_use]
    pub const fn with_capacities(capacities: BucketCapacities) -> Self {
        Self { capacities }
    }

    /// Configured bucket sizes
    #[must_use]
    pub const fn capacities(&self) -> BucketCapacities {
        self.capacities
    }

    /// Draw three independent buckets from `foods`
    pub fn assemble<R: Rng + ?Sized>(&self, foods: &[FoodItem], rng: &mut R) -> MealPlan {
        let plan = MealPlan {
            breakfast: Self::draw(foods, self.capacities.breakfast, rng),
            lunch: Self::draw(foods, self.capacities.lunch, rng),
            dinner: Self::draw(foods, self.capacities.dinner, rng),
        };

        debug!(
            available = foods.len(),
            breakfast = plan.breakfast.len(),
            lunch = plan.lunch.len(),
            dinner = plan.dinner.len(),
            "Assembled meal plan"
        );

        plan
    }

    fn draw<R: Rng + ?Sized>(foods: &[FoodItem], capacity: usize, rng: &mut R) -> Vec<FoodItem> {
        let mut shuffled = foods.to_vec();
        shuffled.shuffle(rng);
        shuffled.truncate(capacity);
        shuffled
    }
}
