// ABOUTME: Property tests for random meal bucket assembly
// ABOUTME: Bucket sizes are min(n, capacity) and every bucket is a subset of its input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriveda_core::catalog::food_catalog;
use nutriveda_core::models::{FoodItem, MealPreferences};
use nutriveda_intelligence::{filter_foods, BucketCapacities, MealAssembler, MealSlot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn assert_subset(bucket: &[FoodItem], pool: &[FoodItem]) {
    let pool_ids: HashSet<&str> = pool.iter().map(|food| food.id.as_str()).collect();
    for food in bucket {
        assert!(pool_ids.contains(food.id.as_str()), "{} not in pool", food.name);
    }
}

fn assert_no_duplicates_within(bucket: &[FoodItem]) {
    let ids: HashSet<&str> = bucket.iter().map(|food| food.id.as_str()).collect();
    assert_eq!(ids.len(), bucket.len());
}

#[test]
fn test_full_catalog_yields_three_four_three() {
    let filtered = filter_foods(food_catalog(), &MealPreferences::default());
    let assembler = MealAssembler::new();

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let plan = assembler.assemble(&filtered, &mut rng);
        assert_eq!(plan.breakfast.len(), 3);
        assert_eq!(plan.lunch.len(), 4);
        assert_eq!(plan.dinner.len(), 3);
    }
}

#[test]
fn test_bucket_sizes_are_min_of_input_and_capacity() {
    let assembler = MealAssembler::new();
    let capacities = assembler.capacities();

    for n in 0..=food_catalog().len() {
        let pool = &food_catalog()[..n];
        let mut rng = ChaCha8Rng::seed_from_u64(n as u64);
        let plan = assembler.assemble(pool, &mut rng);

        for slot in MealSlot::ALL {
            let bucket = plan.slot(slot);
            assert_eq!(bucket.len(), n.min(capacities.for_slot(slot)));
            assert_subset(bucket, pool);
            assert_no_duplicates_within(bucket);
        }
    }
}

#[test]
fn test_small_pool_returns_everything_without_padding() {
    let pool = &food_catalog()[..2];
    let plan = MealAssembler::new().assemble(pool, &mut rand::thread_rng());
    for slot in MealSlot::ALL {
        let got: HashSet<&str> = plan.slot(slot).iter().map(|f| f.id.as_str()).collect();
        assert_eq!(got, HashSet::from(["1", "2"]));
    }
}

#[test]
fn test_custom_capacities() {
    let assembler = MealAssembler::with_capacities(BucketCapacities {
        breakfast: 1,
        lunch: 0,
        dinner: 10,
    });
    let plan = assembler.assemble(food_catalog(), &mut ChaCha8Rng::seed_from_u64(7));
    assert_eq!(plan.breakfast.len(), 1);
    assert!(plan.lunch.is_empty());
    assert_eq!(plan.dinner.len(), 10);
}

#[test]
fn test_buckets_may_overlap() {
    // Three buckets drawn from a 3-item pool must all contain the same items
    let pool = &food_catalog()[..3];
    let plan = MealAssembler::new().assemble(pool, &mut ChaCha8Rng::seed_from_u64(1));
    let breakfast: HashSet<&str> = plan.breakfast.iter().map(|f| f.id.as_str()).collect();
    let dinner: HashSet<&str> = plan.dinner.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(breakfast, dinner);
}

#[test]
fn test_totals_match_bucket_contents() {
    let plan = MealAssembler::new().assemble(food_catalog(), &mut ChaCha8Rng::seed_from_u64(3));
    let expected: u32 = plan
        .breakfast
        .iter()
        .chain(&plan.lunch)
        .chain(&plan.dinner)
        .map(|food| food.nutrition_per_100g.calories)
        .sum();
    assert_eq!(plan.total_calories(), expected);
    assert_eq!(plan.macro_totals().calories, expected);
}
