// ABOUTME: Meal plan generation for the signed-in user's questionnaire and the current season
// ABOUTME: Missing questionnaire is a validation gap; backend failures become OperationFailed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use super::nutrition::NutritionService;
use crate::session::SessionManager;
use crate::storage::KeyValueStore;
use chrono::{Datelike, Local};
use nutriveda_core::errors::{AppError, AppResult};
use nutriveda_core::models::Season;
use nutriveda_intelligence::MealPlan;
use tracing::{error, info};

/// Season of the local calendar date
#[must_use]
pub fn current_season() -> Season {
    Season::for_month(Local::now().month())
}

/// Builds meal plans from the session's questionnaire
#[derive(Debug, Clone)]
pub struct MealPlanService {
    nutrition: NutritionService,
}

impl MealPlanService {
    /// Service over `nutrition`
    #[must_use]
    pub const fn new(nutrition: NutritionService) -> Self {
        Self { nutrition }
    }

    /// Generate a plan for the current season
    ///
    /// # Errors
    ///
    /// Returns `ValidationMissing` without a questionnaire and
    /// `OperationFailed` if the backend call fails
    pub async fn generate<S: KeyValueStore>(
        &self,
        session: &SessionManager<S>,
    ) -> AppResult<MealPlan> {
        self.generate_in_season(session, current_season()).await
    }

    /// Generate a plan for an explicit season
    ///
    /// # Errors
    ///
    /// Returns `ValidationMissing` without a questionnaire and
    /// `OperationFailed` if the backend call fails
    pub async fn generate_in_season<S: KeyValueStore>(
        &self,
        session: &SessionManager<S>,
        season: Season,
    ) -> AppResult<MealPlan> {
        let Some(questionnaire) = session
            .current_user()
            .and_then(|user| user.questionnaire.as_ref())
        else {
            return Err(AppError::validation_missing(
                "Please complete your profile questionnaire first",
            ));
        };

        let preferences = questionnaire.meal_preferences(season);
        match self.nutrition.get_random_meal(&preferences).await {
            Ok(plan) => {
                info!(
                    season = %season,
                    total_calories = plan.total_calories(),
                    "Generated meal plan"
                );
                Ok(plan)
            }
            Err(e) => {
                error!(error = %e, "Error generating meal plan");
                Err(e.into_operation_failed("Generate meal plan"))
            }
        }
    }
}
