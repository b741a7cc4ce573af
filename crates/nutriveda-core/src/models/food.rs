// ABOUTME: Food catalog models with season, region, and constitution tags
// ABOUTME: FoodItem, NutritionFacts, Season, and Constitution definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use crate::constants::wildcards;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Season a food is associated with
///
/// `All` is the wildcard: such items pass every season filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// March to May
    Spring,
    /// June to August
    Summer,
    /// September to November
    Autumn,
    /// December to February
    Winter,
    /// Available year-round
    All,
}

impl Season {
    /// Season for a calendar month (1 = January)
    ///
    /// Months outside 1..=12 fall through to winter.
    #[must_use]
    pub const fn for_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Autumn,
            _ => Self::Winter,
        }
    }

    /// Whether this tag passes every season filter
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Canonical display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
            Self::All => wildcards::ALL_SEASONS,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "autumn" | "fall" => Ok(Self::Autumn),
            "winter" => Ok(Self::Winter),
            "all" => Ok(Self::All),
            other => Err(AppError::invalid_input(format!("Unknown season '{other}'"))),
        }
    }
}

/// Ayurvedic body-constitution tag
///
/// Three mutually exclusive types plus `Tridoshic`, which suits all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Constitution {
    /// Air and space elements
    Vata,
    /// Fire and water elements
    Pitta,
    /// Earth and water elements
    Kapha,
    /// Balances every constitution
    Tridoshic,
}

impl Constitution {
    /// The three exclusive constitutions a user can pick
    pub const SELECTABLE: [Self; 3] = [Self::Vata, Self::Pitta, Self::Kapha];

    /// Whether this tag passes every constitution filter
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Tridoshic)
    }

    /// Lowercase tag as persisted
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vata => "vata",
            Self::Pitta => "pitta",
            Self::Kapha => "kapha",
            Self::Tridoshic => wildcards::TRIDOSHIC,
        }
    }

    /// Short description shown next to the questionnaire option
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Vata => "Air and space elements - creative, energetic, and quick-thinking",
            Self::Pitta => "Fire and water elements - focused, ambitious, and intelligent",
            Self::Kapha => "Earth and water elements - calm, strong, and loyal",
            Self::Tridoshic => "Balances all three constitutions",
        }
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Constitution {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vata" => Ok(Self::Vata),
            "pitta" => Ok(Self::Pitta),
            "kapha" => Ok(Self::Kapha),
            "tridoshic" => Ok(Self::Tridoshic),
            other => Err(AppError::invalid_input(format!(
                "Unknown constitution '{other}'"
            ))),
        }
    }
}

/// Nutrition values per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
    /// Sugar in grams
    pub sugar: f64,
    /// Open-ended vitamin amounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamins: Option<BTreeMap<String, f64>>,
    /// Open-ended mineral amounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minerals: Option<BTreeMap<String, f64>>,
}

impl NutritionFacts {
    /// Macro-only facts with no vitamin or mineral breakdown
    #[must_use]
    pub const fn macros(
        calories: u32,
        protein: f64,
        carbs: f64,
        fat: f64,
        fiber: f64,
        sugar: f64,
    ) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
            sugar,
            vitamins: None,
            minerals: None,
        }
    }
}

/// A single catalog food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category (Grains, Legumes, Vegetables, ...)
    pub category: String,
    /// Season tag
    pub season: Season,
    /// Region tag; `Global` matches every region
    pub region: String,
    /// Constitution tag
    #[serde(rename = "ayurvedicProperty")]
    pub constitution: Constitution,
    /// Nutrition per 100 g
    pub nutrition_per_100g: NutritionFacts,
}

impl FoodItem {
    /// Whether this item passes a constitution filter
    #[must_use]
    pub fn suits_constitution(&self, requested: Constitution) -> bool {
        self.constitution == requested || self.constitution.is_wildcard()
    }

    /// Whether this item passes a region filter
    #[must_use]
    pub fn suits_region(&self, requested: &str) -> bool {
        self.region == requested || self.region == wildcards::GLOBAL_REGION
    }

    /// Whether this item passes a season filter
    #[must_use]
    pub fn suits_season(&self, requested: Season) -> bool {
        self.season == requested || self.season.is_wildcard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_for_month() {
        assert_eq!(Season::for_month(1), Season::Winter);
        assert_eq!(Season::for_month(3), Season::Spring);
        assert_eq!(Season::for_month(5), Season::Spring);
        assert_eq!(Season::for_month(6), Season::Summer);
        assert_eq!(Season::for_month(8), Season::Summer);
        assert_eq!(Season::for_month(9), Season::Autumn);
        assert_eq!(Season::for_month(11), Season::Autumn);
        assert_eq!(Season::for_month(12), Season::Winter);
    }

    #[test]
    fn test_constitution_parsing() {
        assert_eq!("Pitta".parse::<Constitution>().unwrap(), Constitution::Pitta);
        assert_eq!(" vata ".parse::<Constitution>().unwrap(), Constitution::Vata);
        assert!("dosha".parse::<Constitution>().is_err());
    }

    #[test]
    fn test_season_serde_matches_persisted_tags() {
        assert_eq!(serde_json::to_string(&Season::Autumn).unwrap(), "\"Autumn\"");
        let season: Season = serde_json::from_str("\"All\"").unwrap();
        assert!(season.is_wildcard());
    }
}
