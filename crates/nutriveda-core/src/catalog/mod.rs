// ABOUTME: Immutable food and exercise catalogs compiled into the binary
// ABOUTME: Built once on first access and shared as static slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! The catalogs are fixed at compile time and never mutated at runtime.
//! Callers receive `&'static` slices and clone the items they keep.

mod exercises;
mod foods;

use crate::models::{Exercise, FoodItem};
use std::sync::OnceLock;

static FOOD_CATALOG: OnceLock<Vec<FoodItem>> = OnceLock::new();
static EXERCISE_CATALOG: OnceLock<Vec<Exercise>> = OnceLock::new();

/// The full food catalog, in catalog order
#[must_use]
pub fn food_catalog() -> &'static [FoodItem] {
    FOOD_CATALOG.get_or_init(foods::build)
}

/// The full exercise catalog, in catalog order
#[must_use]
pub fn exercise_catalog() -> &'static [Exercise] {
    EXERCISE_CATALOG.get_or_init(exercises::build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(food_catalog().len(), 10);
        assert_eq!(exercise_catalog().len(), 8);
    }

    #[test]
    fn test_ids_are_unique() {
        let food_ids: HashSet<&str> = food_catalog().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(food_ids.len(), food_catalog().len());

        let exercise_ids: HashSet<&str> =
            exercise_catalog().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(exercise_ids.len(), exercise_catalog().len());
    }

    #[test]
    fn test_catalog_is_shared() {
        assert!(std::ptr::eq(food_catalog(), food_catalog()));
    }
}
