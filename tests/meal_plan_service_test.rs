// ABOUTME: Integration tests for meal plan generation and fitness recommendations
// ABOUTME: Validation gap without a questionnaire, preference-driven plans, goal-matched exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{memory_session, onboarded_session, signed_in_session};
use nutriveda::errors::ErrorCode;
use nutriveda::models::{Constitution, Questionnaire, Season};
use nutriveda::notices::{messages, Notice, NoticeLevel};
use nutriveda::services::{
    recommendations_for, MealPlanService, NutritionService, SimulatedLatency,
};

fn meal_plans() -> MealPlanService {
    MealPlanService::new(NutritionService::with_seed(SimulatedLatency::disabled(), 7))
}

#[tokio::test]
async fn test_missing_questionnaire_is_validation_gap() {
    let session = signed_in_session().await;
    let result = meal_plans().generate(&session).await;
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationMissing);

    let notice = Notice::from_result(
        &result,
        messages::MEAL_PLAN_GENERATED,
        messages::MEAL_PLAN_FAILED,
    );
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Please complete your profile questionnaire first");
}

#[tokio::test]
async fn test_anonymous_session_is_validation_gap() {
    let session = memory_session();
    let err = meal_plans().generate(&session).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationMissing);
}

#[tokio::test]
async fn test_plan_follows_questionnaire_and_season() {
    let session = onboarded_session().await;
    let plan = meal_plans()
        .generate_in_season(&session, Season::Summer)
        .await
        .unwrap();

    // pitta or tridoshic, South Asia or Global, summer or all-season:
    // Basmati Rice, Lentils, Mango, Salmon, Quinoa
    let allowed = ["1", "2", "4", "8", "9"];
    for food in plan.breakfast.iter().chain(&plan.lunch).chain(&plan.dinner) {
        assert!(allowed.contains(&food.id.as_str()), "unexpected {}", food.name);
    }
    assert_eq!(plan.breakfast.len(), 3);
    assert_eq!(plan.lunch.len(), 4);
    assert_eq!(plan.dinner.len(), 3);
    assert!(plan.total_calories() > 0);
}

#[tokio::test]
async fn test_unknown_region_keeps_global_foods() {
    let mut session = signed_in_session().await;
    session
        .update_questionnaire(Questionnaire {
            ayurvedic_type: Some(Constitution::Kapha),
            region: Some("Atlantis".to_owned()),
            ..Questionnaire::default()
        })
        .await
        .unwrap();

    // kapha/tridoshic and Global: Yogurt, Chicken Breast, Quinoa survive
    let plan = meal_plans()
        .generate_in_season(&session, Season::Winter)
        .await
        .unwrap();
    assert_eq!(plan.breakfast.len(), 3);
    assert_eq!(plan.lunch.len(), 3);
}

#[tokio::test]
async fn test_backend_failure_shows_generic_notice() {
    let session = onboarded_session().await;
    let service = MealPlanService::new(
        NutritionService::with_seed(SimulatedLatency::disabled(), 7)
            .with_source(common::OfflineCatalog),
    );

    let result = service.generate_in_season(&session, Season::Summer).await;
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.code, ErrorCode::OperationFailed);
    assert_eq!(err.message, "Generate meal plan failed");

    let notice = Notice::from_result(
        &result,
        messages::MEAL_PLAN_GENERATED,
        messages::MEAL_PLAN_FAILED,
    );
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, messages::MEAL_PLAN_FAILED);
}

#[tokio::test]
async fn test_current_season_plan_succeeds() {
    let session = onboarded_session().await;
    let plan = meal_plans().generate(&session).await.unwrap();
    assert!(!plan.is_empty());
}

#[tokio::test]
async fn test_fitness_recommendations_follow_goals() {
    let mut session = signed_in_session().await;
    session
        .update_questionnaire(Questionnaire {
            fitness_goals: Some(vec!["Weight loss".to_owned()]),
            ..Questionnaire::default()
        })
        .await
        .unwrap();

    let names: Vec<String> = recommendations_for(&session)
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Walking",
            "Bodyweight Exercises",
            "Swimming",
            "Cycling",
            "HIIT Workout",
            "Weight Training"
        ]
    );
}

#[tokio::test]
async fn test_too_few_goal_matches_fall_back_to_catalog() {
    // "Increased strength" and "Muscle gain" only match two exercises
    let session = onboarded_session().await;
    assert_eq!(recommendations_for(&session).len(), 8);
}

#[tokio::test]
async fn test_fitness_without_goals_returns_catalog() {
    assert_eq!(recommendations_for(&memory_session()).len(), 8);
    assert_eq!(recommendations_for(&signed_in_session().await).len(), 8);
}
