// ABOUTME: Six-step health questionnaire wizard with form state and submission
// ABOUTME: Step navigation clamps at the ends; submit merges answers into the session profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! # Questionnaire Wizard
//!
//! The form starts at age 30, height 170 cm and weight 70 kg with every
//! other answer empty. Blank text answers are submitted as absent, so they
//! never overwrite an earlier answer; list answers are always submitted and
//! replace the stored list.

use crate::notices::{messages, Notice};
use crate::routes::Route;
use crate::services::latency::SimulatedLatency;
use crate::session::SessionManager;
use crate::storage::KeyValueStore;
use nutriveda_core::constants::latency::QUESTIONNAIRE_SUBMIT_MS;
use nutriveda_core::constants::questionnaire::{
    DEFAULT_AGE, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG, DIETARY_RESTRICTIONS, FITNESS_GOALS,
    REGIONS,
};
use nutriveda_core::errors::{AppError, AppResult};
use nutriveda_core::models::{Constitution, Questionnaire};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Wizard pages in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    /// Age, gender, height, weight
    BasicInformation,
    /// Dietary restrictions
    DietaryPreferences,
    /// Fitness goals
    FitnessGoals,
    /// Health conditions
    HealthInformation,
    /// Ayurvedic constitution
    AyurvedicConstitution,
    /// Home region
    Region,
}

impl WizardStep {
    /// Steps in display order
    pub const ALL: [Self; 6] = [
        Self::BasicInformation,
        Self::DietaryPreferences,
        Self::FitnessGoals,
        Self::HealthInformation,
        Self::AyurvedicConstitution,
        Self::Region,
    ];

    /// Page heading
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BasicInformation => "Basic Information",
            Self::DietaryPreferences => "Dietary Preferences",
            Self::FitnessGoals => "Fitness Goals",
            Self::HealthInformation => "Health Information",
            Self::AyurvedicConstitution => "Ayurvedic Constitution",
            Self::Region => "Region",
        }
    }

    /// Persisted field names edited on this page
    #[must_use]
    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::BasicInformation => &["age", "gender", "height", "weight"],
            Self::DietaryPreferences => &["dietaryRestrictions"],
            Self::FitnessGoals => &["fitnessGoals"],
            Self::HealthInformation => &["healthConditions"],
            Self::AyurvedicConstitution => &["ayurvedicType"],
            Self::Region => &["region"],
        }
    }
}

/// Multi-select answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListField {
    /// Dietary restrictions
    DietaryRestrictions,
    /// Fitness goals
    FitnessGoals,
    /// Health conditions
    HealthConditions,
}

impl ListField {
    /// Offered choices; health conditions are free text
    #[must_use]
    pub const fn choices(&self) -> &'static [&'static str] {
        match self {
            Self::DietaryRestrictions => DIETARY_RESTRICTIONS,
            Self::FitnessGoals => FITNESS_GOALS,
            Self::HealthConditions => &[],
        }
    }
}

/// Working answers while the wizard is open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireForm {
    /// Age in years
    pub age: u32,
    /// Free-form gender; blank means unanswered
    pub gender: String,
    /// Height in cm
    pub height: f64,
    /// Weight in kg
    pub weight: f64,
    /// Selected dietary restrictions
    pub dietary_restrictions: Vec<String>,
    /// Selected fitness goals
    pub fitness_goals: Vec<String>,
    /// Reported health conditions
    pub health_conditions: Vec<String>,
    /// Chosen constitution
    pub ayurvedic_type: Option<Constitution>,
    /// Home region; blank means unanswered
    pub region: String,
}

impl Default for QuestionnaireForm {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            gender: String::new(),
            height: DEFAULT_HEIGHT_CM,
            weight: DEFAULT_WEIGHT_KG,
            dietary_restrictions: Vec::new(),
            fitness_goals: Vec::new(),
            health_conditions: Vec::new(),
            ayurvedic_type: None,
            region: String::new(),
        }
    }
}

impl QuestionnaireForm {
    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::DietaryRestrictions => &mut self.dietary_restrictions,
            ListField::FitnessGoals => &mut self.fitness_goals,
            ListField::HealthConditions => &mut self.health_conditions,
        }
    }

    /// Answers for one list field
    #[must_use]
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::DietaryRestrictions => &self.dietary_restrictions,
            ListField::FitnessGoals => &self.fitness_goals,
            ListField::HealthConditions => &self.health_conditions,
        }
    }

    /// Answers as a partial questionnaire ready to merge
    #[must_use]
    pub fn to_questionnaire(&self) -> Questionnaire {
        let non_blank = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        };

        Questionnaire {
            age: Some(self.age),
            gender: non_blank(&self.gender),
            height: Some(self.height),
            weight: Some(self.weight),
            dietary_restrictions: Some(self.dietary_restrictions.clone()),
            fitness_goals: Some(self.fitness_goals.clone()),
            health_conditions: Some(self.health_conditions.clone()),
            ayurvedic_type: self.ayurvedic_type,
            region: non_blank(&self.region),
        }
    }
}

/// Result of submitting the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Message for the user
    pub notice: Notice,
    /// Where to navigate next; `None` keeps the wizard open
    pub next_route: Option<Route>,
}

/// Step-by-step questionnaire state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionnaireWizard {
    step: usize,
    form: QuestionnaireForm,
}

impl QuestionnaireWizard {
    /// Fresh wizard on the first step with default answers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        WizardStep::ALL[self.step]
    }

    /// Zero-based page index
    #[must_use]
    pub const fn step_index(&self) -> usize {
        self.step
    }

    /// On the first page
    #[must_use]
    pub const fn is_first_step(&self) -> bool {
        self.step == 0
    }

    /// On the last page (submit is offered here)
    #[must_use]
    pub const fn is_last_step(&self) -> bool {
        self.step == WizardStep::ALL.len() - 1
    }

    /// Advance one page; stays put on the last page
    pub fn next(&mut self) -> WizardStep {
        if !self.is_last_step() {
            self.step += 1;
        }
        self.step()
    }

    /// Go back one page; stays put on the first page
    pub fn previous(&mut self) -> WizardStep {
        if !self.is_first_step() {
            self.step -= 1;
        }
        self.step()
    }

    /// Current answers
    #[must_use]
    pub const fn form(&self) -> &QuestionnaireForm {
        &self.form
    }

    /// Set age
    pub fn set_age(&mut self, age: u32) {
        self.form.age = age;
    }

    /// Set gender (free text)
    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.form.gender = gender.into();
    }

    /// Set height in cm
    pub fn set_height(&mut self, height: f64) {
        self.form.height = height;
    }

    /// Set weight in kg
    pub fn set_weight(&mut self, weight: f64) {
        self.form.weight = weight;
    }

    /// Set region (free text; the offered choices are [`REGIONS`])
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.form.region = region.into();
    }

    /// Choose a constitution or clear the answer
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for `tridoshic`, which is a food tag rather than
    /// a personal constitution
    pub fn set_ayurvedic_type(&mut self, constitution: Option<Constitution>) -> AppResult<()> {
        if constitution.is_some_and(|c| c.is_wildcard()) {
            return Err(AppError::invalid_input(
                "Ayurvedic type must be one of vata, pitta or kapha",
            ));
        }
        self.form.ayurvedic_type = constitution;
        Ok(())
    }

    /// Replace health conditions from comma-separated text
    pub fn set_health_conditions(&mut self, text: &str) {
        self.form.health_conditions = text
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect();
    }

    /// Add `value` to a list answer, or remove it if already present
    ///
    /// Returns true when the value is selected afterwards.
    pub fn toggle(&mut self, field: ListField, value: &str) -> bool {
        let list = self.form.list_mut(field);
        if let Some(position) = list.iter().position(|item| item == value) {
            list.remove(position);
            false
        } else {
            list.push(value.to_owned());
            true
        }
    }

    /// Save the answers into the session and head for the dashboard
    ///
    /// Waits a simulated round trip first. Any failure keeps the wizard open
    /// and yields an error notice.
    pub async fn submit<S: KeyValueStore>(
        &self,
        session: &mut SessionManager<S>,
        latency: SimulatedLatency,
    ) -> Submission {
        latency.round_trip(QUESTIONNAIRE_SUBMIT_MS).await;

        match session.update_questionnaire(self.form.to_questionnaire()).await {
            Ok(()) => {
                info!(step = self.step, "Questionnaire submitted");
                Submission {
                    notice: Notice::success(messages::PROFILE_UPDATED),
                    next_route: Some(Route::Dashboard),
                }
            }
            Err(e) => {
                error!(error = %e, "Questionnaire submission error");
                Submission {
                    notice: Notice::from_error(&e, messages::PROFILE_UPDATE_FAILED),
                    next_route: None,
                }
            }
        }
    }
}

/// Regions offered on the last page
#[must_use]
pub const fn region_choices() -> &'static [&'static str] {
    REGIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_not_submitted() {
        let mut wizard = QuestionnaireWizard::new();
        wizard.set_gender("   ");
        let answers = wizard.form().to_questionnaire();
        assert_eq!(answers.gender, None);
        assert_eq!(answers.region, None);
        assert_eq!(answers.age, Some(DEFAULT_AGE));
        assert_eq!(answers.fitness_goals, Some(Vec::new()));
    }

    #[test]
    fn test_health_conditions_split_on_commas() {
        let mut wizard = QuestionnaireWizard::new();
        wizard.set_health_conditions(" asthma, ,diabetes ,");
        assert_eq!(
            wizard.form().list(ListField::HealthConditions),
            ["asthma".to_owned(), "diabetes".to_owned()]
        );
    }

    #[test]
    fn test_tridoshic_is_not_selectable() {
        let mut wizard = QuestionnaireWizard::new();
        assert!(wizard.set_ayurvedic_type(Some(Constitution::Tridoshic)).is_err());
        assert!(wizard.set_ayurvedic_type(Some(Constitution::Kapha)).is_ok());
        assert_eq!(wizard.form().ayurvedic_type, Some(Constitution::Kapha));
    }
}
