// ABOUTME: The fixed ten-item food catalog
// ABOUTME: Nutrition values are per 100 g
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use crate::constants::wildcards::GLOBAL_REGION;
use crate::models::{Constitution, FoodItem, NutritionFacts, Season};

const SOUTH_ASIA: &str = "South Asia";

fn food(
    id: &str,
    name: &str,
    category: &str,
    season: Season,
    region: &str,
    constitution: Constitution,
    nutrition_per_100g: NutritionFacts,
) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
        season,
        region: region.to_owned(),
        constitution,
        nutrition_per_100g,
    }
}

#[rustfmt::skip]
pub(super) fn build() -> Vec<FoodItem> {
    use Constitution::{Kapha, Pitta, Tridoshic, Vata};
    use Season::{All, Autumn, Summer, Winter};

    vec![
        food("1", "Basmati Rice", "Grains", All, SOUTH_ASIA, Tridoshic,
            NutritionFacts::macros(130, 2.7, 28.0, 0.3, 0.4, 0.1)),
        food("2", "Lentils (Dal)", "Legumes", All, SOUTH_ASIA, Pitta,
            NutritionFacts::macros(116, 9.0, 20.0, 0.4, 8.0, 1.8)),
        food("3", "Spinach", "Vegetables", Winter, GLOBAL_REGION, Vata,
            NutritionFacts::macros(23, 2.9, 3.6, 0.4, 2.2, 0.4)),
        food("4", "Mango", "Fruits", Summer, SOUTH_ASIA, Pitta,
            NutritionFacts::macros(60, 0.8, 15.0, 0.4, 1.6, 14.0)),
        food("5", "Yogurt", "Dairy", All, GLOBAL_REGION, Kapha,
            NutritionFacts::macros(59, 3.5, 5.0, 3.3, 0.0, 5.0)),
        food("6", "Chicken Breast", "Protein", All, GLOBAL_REGION, Kapha,
            NutritionFacts::macros(165, 31.0, 0.0, 3.6, 0.0, 0.0)),
        food("7", "Sweet Potato", "Vegetables", Autumn, GLOBAL_REGION, Vata,
            NutritionFacts::macros(86, 1.6, 20.0, 0.1, 3.0, 4.2)),
        food("8", "Salmon", "Protein", All, GLOBAL_REGION, Pitta,
            NutritionFacts::macros(206, 22.0, 0.0, 13.0, 0.0, 0.0)),
        food("9", "Quinoa", "Grains", All, GLOBAL_REGION, Tridoshic,
            NutritionFacts::macros(120, 4.4, 21.3, 1.9, 2.8, 0.9)),
        food("10", "Avocado", "Fruits", All, GLOBAL_REGION, Vata,
            NutritionFacts::macros(160, 2.0, 8.5, 14.7, 6.7, 0.7)),
    ]
}
