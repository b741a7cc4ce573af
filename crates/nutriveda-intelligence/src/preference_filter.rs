// ABOUTME: Narrows the food catalog by constitution, region and season preferences
// ABOUTME: Conjunctive across axes; wildcard tags (tridoshic, Global, All) always pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! # Preference Filter
//!
//! For each specified axis an item survives when its tag equals the
//! requested value or is that axis's wildcard. Unspecified axes impose no
//! constraint, so an empty preference record returns the catalog unchanged.
//! Catalog order is preserved. An empty result is a valid answer.

use nutriveda_core::models::{Constitution, FoodItem, MealPreferences, Season};
use tracing::debug;

/// Keep the items that satisfy every specified preference axis
#[must_use]
pub fn filter_foods(catalog: &[FoodItem], preferences: &MealPreferences) -> Vec<FoodItem> {
    let region = preferences.region_filter();

    let filtered: Vec<FoodItem> = catalog
        .iter()
        .filter(|food| {
            preferences
                .ayurvedic_type
                .is_none_or(|wanted| food.suits_constitution(wanted))
        })
        .filter(|food| region.is_none_or(|wanted| food.suits_region(wanted)))
        .filter(|food| {
            preferences
                .season
                .is_none_or(|wanted| food.suits_season(wanted))
        })
        .cloned()
        .collect();

    debug!(
        catalog_size = catalog.len(),
        matched = filtered.len(),
        ayurvedic_type = ?preferences.ayurvedic_type,
        region = ?region,
        season = ?preferences.season,
        "Filtered food catalog by preferences"
    );

    filtered
}

/// Items in the given season or available year-round
#[must_use]
pub fn foods_by_season(catalog: &[FoodItem], season: Season) -> Vec<FoodItem> {
    filter_foods(catalog, &MealPreferences::new().with_season(season))
}

/// Items from the given region or tagged `Global`
#[must_use]
pub fn foods_by_region(catalog: &[FoodItem], region: &str) -> Vec<FoodItem> {
    filter_foods(catalog, &MealPreferences::new().with_region(region))
}

/// Items matching the constitution or tagged `tridoshic`
#[must_use]
pub fn foods_by_constitution(catalog: &[FoodItem], constitution: Constitution) -> Vec<FoodItem> {
    filter_foods(
        catalog,
        &MealPreferences::new().with_ayurvedic_type(constitution),
    )
}

/// Items whose category equals `category` exactly (categories have no wildcard)
#[must_use]
pub fn foods_by_category(catalog: &[FoodItem], category: &str) -> Vec<FoodItem> {
    catalog
        .iter()
        .filter(|food| food.category == category)
        .cloned()
        .collect()
}

/// Case-insensitive substring match on the display name
///
/// An empty query matches every item.
#[must_use]
pub fn search_by_name(catalog: &[FoodItem], query: &str) -> Vec<FoodItem> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Look up a single item by identifier
#[must_use]
pub fn find_by_id<'a>(catalog: &'a [FoodItem], id: &str) -> Option<&'a FoodItem> {
    catalog.iter().find(|food| food.id == id)
}
