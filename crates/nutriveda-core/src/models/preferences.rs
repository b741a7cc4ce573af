// ABOUTME: Per-request preference record driving the catalog filter
// ABOUTME: Dietary list, constitution, region, and season; every axis independently optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use super::food::{Constitution, Season};
use serde::{Deserialize, Serialize};

/// Preferences used to narrow the food catalog
///
/// Built fresh per request from questionnaire state and never persisted on
/// its own. An absent axis, or a blank region, places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealPreferences {
    /// Dietary restrictions selected by the user
    ///
    /// Carried along for display; catalog items have no dietary tags to
    /// match against, so the filter does not consult it.
    pub dietary: Vec<String>,
    /// Requested constitution
    pub ayurvedic_type: Option<Constitution>,
    /// Requested region
    pub region: Option<String>,
    /// Requested season
    pub season: Option<Season>,
}

impl MealPreferences {
    /// Preference record with no constraints
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dietary restrictions
    #[must_use]
    pub fn with_dietary(mut self, dietary: Vec<String>) -> Self {
        self.dietary = dietary;
        self
    }

    /// Constrain by constitution
    #[must_use]
    pub const fn with_ayurvedic_type(mut self, constitution: Constitution) -> Self {
        self.ayurvedic_type = Some(constitution);
        self
    }

    /// Constrain by region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Constrain by season
    #[must_use]
    pub const fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Region filter value, ignoring blanks
    #[must_use]
    pub fn region_filter(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|region| !region.is_empty())
    }

    /// True when no axis constrains the catalog
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.ayurvedic_type.is_none() && self.region_filter().is_none() && self.season.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_region_is_no_constraint() {
        let prefs = MealPreferences::new().with_region("   ");
        assert_eq!(prefs.region_filter(), None);
        assert!(prefs.is_unconstrained());
    }

    #[test]
    fn test_deserialize_partial_record() {
        let prefs: MealPreferences =
            serde_json::from_str(r#"{"ayurvedicType":"pitta","season":"Summer"}"#).unwrap();
        assert_eq!(prefs.ayurvedic_type, Some(Constitution::Pitta));
        assert_eq!(prefs.season, Some(Season::Summer));
        assert!(prefs.dietary.is_empty());
        assert!(!prefs.is_unconstrained());
    }
}
