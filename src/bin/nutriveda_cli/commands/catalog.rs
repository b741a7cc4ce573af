// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
// ABOUTME: Nutrition catalog commands for nutriveda-cli: search and food lookups
// ABOUTME: Uses the search box rule for short queries and the per-axis service lookups

use super::require_page;
use crate::helpers::display::{print_food_details, print_foods, print_json, OutputFormat};
use anyhow::Result;
use nutriveda::constants::search::MIN_QUERY_LENGTH;
use nutriveda::context::AppContext;
use nutriveda::models::{Constitution, FoodItem, Season};
use nutriveda::routes::Route;
use nutriveda::services::NutritionSearch;

/// Food lookup selectors; at most one is used, in field order
pub struct FoodQuery {
    /// Food id
    pub id: Option<String>,
    /// Exact category
    pub category: Option<String>,
    /// Season or year-round
    pub season: Option<Season>,
    /// Region or `Global`
    pub region: Option<String>,
    /// Constitution or `tridoshic`
    pub ayurvedic_type: Option<Constitution>,
}

/// Search by name
pub async fn search(ctx: &AppContext, format: OutputFormat, query: &str) -> Result<()> {
    require_page(ctx, Route::Nutrition)?;

    if !NutritionSearch::is_searchable(query) && format == OutputFormat::Text {
        println!("Type at least {MIN_QUERY_LENGTH} characters to search.");
        return Ok(());
    }

    let results = ctx.search.run(query).await?;
    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Text => {
            print_foods(&results);
            Ok(())
        }
    }
}

/// Single food by id, or a filtered list
pub async fn food(ctx: &AppContext, format: OutputFormat, query: FoodQuery) -> Result<()> {
    require_page(ctx, Route::Nutrition)?;
    let service = &ctx.nutrition;

    if let Some(id) = query.id {
        let item = service.get_food_by_id(&id).await?;
        return match format {
            OutputFormat::Json => print_json(&item),
            OutputFormat::Text => {
                print_food_details(&item);
                Ok(())
            }
        };
    }

    let foods: Vec<FoodItem> = if let Some(category) = query.category {
        service.get_foods_by_category(&category).await?
    } else if let Some(season) = query.season {
        service.get_foods_by_season(season).await?
    } else if let Some(region) = query.region {
        service.get_foods_by_region(&region).await?
    } else if let Some(constitution) = query.ayurvedic_type {
        service.get_foods_by_ayurvedic_type(constitution).await?
    } else {
        service.get_all_foods().await?
    };

    match format {
        OutputFormat::Json => print_json(&foods),
        OutputFormat::Text => {
            print_foods(&foods);
            Ok(())
        }
    }
}
