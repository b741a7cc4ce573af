// ABOUTME: Persisted user profile with the nested health questionnaire
// ABOUTME: Read leniently (every field optional), merged shallowly on update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use super::food::{Constitution, Season};
use super::lenient;
use super::preferences::MealPreferences;
use serde::{Deserialize, Serialize};

/// Answers collected by the health questionnaire
///
/// Every field is optional; partial questionnaires are merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Questionnaire {
    /// Age in years
    #[serde(deserialize_with = "lenient::whole_number", skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Free-form gender
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in cm
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kg
    #[serde(deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Selected dietary restrictions
    #[serde(deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<Vec<String>>,
    /// Selected fitness goals
    #[serde(deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub fitness_goals: Option<Vec<String>>,
    /// Reported health conditions
    #[serde(deserialize_with = "lenient::text_list", skip_serializing_if = "Option::is_none")]
    pub health_conditions: Option<Vec<String>>,
    /// Self-identified constitution
    #[serde(deserialize_with = "lenient::constitution", skip_serializing_if = "Option::is_none")]
    pub ayurvedic_type: Option<Constitution>,
    /// Home region
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Questionnaire {
    /// Overlay every field present in `update` onto `self`
    pub fn merge(&mut self, update: Self) {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if update.$field.is_some() {
                    self.$field = update.$field;
                })*
            };
        }
        overlay!(
            age,
            gender,
            height,
            weight,
            dietary_restrictions,
            fitness_goals,
            health_conditions,
            ayurvedic_type,
            region
        );
    }

    /// Preference record for meal planning in the given season
    #[must_use]
    pub fn meal_preferences(&self, season: Season) -> MealPreferences {
        MealPreferences {
            dietary: self.dietary_restrictions.clone().unwrap_or_default(),
            ayurvedic_type: self.ayurvedic_type,
            region: self.region.clone(),
            season: Some(season),
        }
    }
}

/// The single persisted user profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Fabricated identifier
    pub id: String,
    /// Contact email, used as the login key
    pub email: String,
    /// Display name
    pub name: String,
    /// Questionnaire answers, absent until first submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questionnaire: Option<Questionnaire>,
}

impl UserProfile {
    /// Fresh profile with no questionnaire
    #[must_use]
    pub fn new(id: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            questionnaire: None,
        }
    }

    /// Whether the questionnaire has been submitted
    #[must_use]
    pub const fn has_completed_questionnaire(&self) -> bool {
        self.questionnaire.is_some()
    }

    /// Apply a partial profile update
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(questionnaire) = update.questionnaire {
            self.questionnaire = Some(questionnaire);
        }
    }

    /// Merge questionnaire answers, creating the questionnaire if absent
    pub fn merge_questionnaire(&mut self, update: Questionnaire) {
        self.questionnaire
            .get_or_insert_with(Questionnaire::default)
            .merge(update);
    }
}

/// Partial profile update; the questionnaire, when present, replaces the old one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    /// New email
    pub email: Option<String>,
    /// New display name
    pub name: Option<String>,
    /// Replacement questionnaire
    pub questionnaire: Option<Questionnaire>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_form_strings_and_blanks() {
        let json = r#"{
            "id": "abc1234",
            "email": "asha@example.com",
            "name": "Asha",
            "questionnaire": {
                "age": "42",
                "height": "162.5",
                "weight": 58,
                "gender": "",
                "ayurvedicType": "",
                "region": "South Asia",
                "fitnessGoals": ["Weight loss", 7]
            }
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        let questionnaire = profile.questionnaire.unwrap();
        assert_eq!(questionnaire.age, Some(42));
        assert_eq!(questionnaire.height, Some(162.5));
        assert_eq!(questionnaire.weight, Some(58.0));
        assert_eq!(questionnaire.gender, None);
        assert_eq!(questionnaire.ayurvedic_type, None);
        assert_eq!(questionnaire.region.as_deref(), Some("South Asia"));
        assert_eq!(questionnaire.fitness_goals, Some(vec!["Weight loss".to_owned()]));
    }

    #[test]
    fn test_missing_fields_default() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();
        assert!(profile.id.is_empty());
        assert!(!profile.has_completed_questionnaire());
    }

    #[test]
    fn test_merge_questionnaire_overlays_present_fields() {
        let mut profile = UserProfile::new("id", "a@b.c", "A");
        profile.merge_questionnaire(Questionnaire {
            age: Some(30),
            region: Some("Europe".into()),
            ..Questionnaire::default()
        });
        profile.merge_questionnaire(Questionnaire {
            ayurvedic_type: Some(Constitution::Kapha),
            ..Questionnaire::default()
        });

        let questionnaire = profile.questionnaire.unwrap();
        assert_eq!(questionnaire.age, Some(30));
        assert_eq!(questionnaire.region.as_deref(), Some("Europe"));
        assert_eq!(questionnaire.ayurvedic_type, Some(Constitution::Kapha));
    }
}
