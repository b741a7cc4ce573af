// ABOUTME: Integration tests for the mock nutrition backend and search box
// ABOUTME: Verifies catalog answers, simulated delays on paused time, and the short-query rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutriveda::config::LatencyMode;
use nutriveda::errors::ErrorCode;
use nutriveda::models::{Constitution, FoodItem, MealPreferences, Season};
use nutriveda::notices::Notice;
use nutriveda::services::{NutritionSearch, NutritionService, SimulatedLatency};
use std::time::Duration;
use tokio::time::Instant;

fn instant_service() -> NutritionService {
    common::init_test_logging();
    NutritionService::with_seed(SimulatedLatency::disabled(), 42)
}

fn slow_service() -> NutritionService {
    NutritionService::with_seed(SimulatedLatency::new(LatencyMode::Simulated), 42)
}

fn names(foods: &[FoodItem]) -> Vec<&str> {
    foods.iter().map(|f| f.name.as_str()).collect()
}

#[tokio::test]
async fn test_catalog_lookups() {
    let service = instant_service();

    assert_eq!(service.get_all_foods().await.unwrap().len(), 10);
    assert_eq!(service.get_food_by_id("8").await.unwrap().name, "Salmon");
    assert_eq!(
        names(&service.get_foods_by_category("Protein").await.unwrap()),
        vec!["Chicken Breast", "Salmon"]
    );
    assert_eq!(
        names(&service.get_foods_by_season(Season::Autumn).await.unwrap()),
        vec![
            "Basmati Rice",
            "Lentils (Dal)",
            "Yogurt",
            "Chicken Breast",
            "Sweet Potato",
            "Salmon",
            "Quinoa",
            "Avocado"
        ]
    );
    assert_eq!(
        service.get_foods_by_region("South Asia").await.unwrap().len(),
        10
    );
    assert_eq!(
        names(
            &service
                .get_foods_by_ayurvedic_type(Constitution::Kapha)
                .await
                .unwrap()
        ),
        vec!["Basmati Rice", "Yogurt", "Chicken Breast", "Quinoa"]
    );
}

#[tokio::test]
async fn test_unknown_food_is_not_found() {
    let err = instant_service().get_food_by_id("99").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_random_meal_respects_preferences() {
    let service = instant_service();
    let prefs = MealPreferences::new()
        .with_ayurvedic_type(Constitution::Pitta)
        .with_season(Season::Winter);

    let plan = service.get_random_meal(&prefs).await.unwrap();
    for food in plan
        .breakfast
        .iter()
        .chain(&plan.lunch)
        .chain(&plan.dinner)
    {
        assert!(matches!(
            food.constitution,
            Constitution::Pitta | Constitution::Tridoshic
        ));
        assert!(matches!(food.season, Season::Winter | Season::All));
    }
    // pitta or tridoshic, winter or all-season: Basmati, Lentils, Salmon, Quinoa
    assert_eq!(plan.breakfast.len(), 3);
    assert_eq!(plan.lunch.len(), 4);
    assert_eq!(plan.dinner.len(), 3);
}

#[tokio::test]
async fn test_seeded_services_agree() {
    let prefs = MealPreferences::new();
    let a = instant_service().get_random_meal(&prefs).await.unwrap();
    let b = instant_service().get_random_meal(&prefs).await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test(start_paused = true)]
async fn test_operations_wait_their_round_trip() {
    let service = slow_service();

    let start = Instant::now();
    service.search_foods("rice").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(500));

    let start = Instant::now();
    service.get_food_by_id("1").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(300));
    assert!(start.elapsed() < Duration::from_millis(500));

    let start = Instant::now();
    service
        .get_random_meal(&MealPreferences::new())
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(800));
}

#[tokio::test(start_paused = true)]
async fn test_short_queries_skip_the_backend() {
    let search = NutritionSearch::new(slow_service());

    let start = Instant::now();
    assert!(search.run("r").await.unwrap().is_empty());
    assert!(search.run("").await.unwrap().is_empty());
    assert_eq!(start.elapsed(), Duration::ZERO);

    let results = search.run("ri").await.unwrap();
    assert_eq!(names(&results), vec!["Basmati Rice"]);
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let search = NutritionSearch::new(instant_service());
    assert_eq!(
        names(&search.run("POTATO").await.unwrap()),
        vec!["Sweet Potato"]
    );
    assert_eq!(
        names(&search.run("an").await.unwrap()),
        vec!["Mango"]
    );
    assert!(search.run("pizza").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_source_failure_reaches_callers() {
    let service = instant_service().with_source(common::OfflineCatalog);
    let err = service.get_all_foods().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(service
        .get_random_meal(&MealPreferences::new())
        .await
        .is_err());
}

#[tokio::test]
async fn test_failed_search_is_operation_failed() {
    let search = NutritionSearch::new(instant_service().with_source(common::OfflineCatalog));
    let result = search.run("rice").await;
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.code, ErrorCode::OperationFailed);
    assert_eq!(err.message, "search foods failed");

    let notice = Notice::from_error(err, "Search failed");
    assert!(notice.is_error());
    assert_eq!(notice.message, "Search failed");

    // short queries never reach the broken backend
    assert!(search.run("r").await.unwrap().is_empty());
}
