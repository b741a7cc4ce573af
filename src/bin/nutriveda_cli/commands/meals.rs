// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
// ABOUTME: Meal plan and fitness commands for nutriveda-cli
// ABOUTME: Both are gated on the session the same way their pages are

use super::require_page;
use crate::helpers::display::{print_exercises, print_json, print_meal_plan, print_notice, OutputFormat};
use anyhow::{bail, Result};
use nutriveda::context::AppContext;
use nutriveda::models::Season;
use nutriveda::notices::{messages, Notice};
use nutriveda::routes::Route;
use nutriveda::services::{current_season, recommendations_for};
use serde_json::json;

/// Generate and print a meal plan
pub async fn meal_plan(ctx: &AppContext, format: OutputFormat, season: Option<Season>) -> Result<()> {
    require_page(ctx, Route::MealPlans)?;

    let season = season.unwrap_or_else(current_season);
    let result = ctx.meal_plans.generate_in_season(&ctx.session, season).await;
    let notice = Notice::from_result(&result, messages::MEAL_PLAN_GENERATED, messages::MEAL_PLAN_FAILED);

    match format {
        OutputFormat::Json => print_json(&json!({
            "notice": notice,
            "season": season,
            "plan": result.as_ref().ok(),
            "total_calories": result.as_ref().ok().map(nutriveda::intelligence::MealPlan::total_calories),
        }))?,
        OutputFormat::Text => {
            print_notice(&notice);
            if let Ok(plan) = &result {
                println!("Season: {season}");
                print_meal_plan(plan);
            }
        }
    }

    if let Err(e) = result {
        bail!(e);
    }
    Ok(())
}

/// Print exercise recommendations
pub fn fitness(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    require_page(ctx, Route::Fitness)?;

    let exercises = recommendations_for(&ctx.session);
    match format {
        OutputFormat::Json => print_json(&exercises),
        OutputFormat::Text => {
            print_exercises(&exercises);
            Ok(())
        }
    }
}
