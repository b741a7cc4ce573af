// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
// ABOUTME: Questionnaire command for nutriveda-cli
// ABOUTME: Fills the six wizard steps from flags, then submits through the session

use super::require_page;
use crate::helpers::display::{print_json, print_notice, OutputFormat};
use anyhow::{bail, Result};
use clap::Args;
use nutriveda::context::AppContext;
use nutriveda::models::Constitution;
use nutriveda::questionnaire::{ListField, QuestionnaireWizard, WizardStep};
use nutriveda::routes::Route;
use serde_json::json;
use tracing::debug;

/// Answers for every wizard step; omitted flags keep the form defaults
#[derive(Args)]
pub struct QuestionnaireArgs {
    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Gender (free text)
    #[arg(long)]
    gender: Option<String>,

    /// Height in cm
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kg
    #[arg(long)]
    weight: Option<f64>,

    /// Dietary restriction (repeatable)
    #[arg(long = "dietary")]
    dietary: Vec<String>,

    /// Fitness goal (repeatable)
    #[arg(long = "goal")]
    goals: Vec<String>,

    /// Health conditions, comma-separated
    #[arg(long)]
    health: Option<String>,

    /// Constitution: vata, pitta or kapha
    #[arg(long)]
    ayurvedic_type: Option<Constitution>,

    /// Home region, e.g. `South Asia`
    #[arg(long)]
    region: Option<String>,
}

fn fill_step(wizard: &mut QuestionnaireWizard, args: &QuestionnaireArgs) -> Result<()> {
    match wizard.step() {
        WizardStep::BasicInformation => {
            if let Some(age) = args.age {
                wizard.set_age(age);
            }
            if let Some(gender) = &args.gender {
                wizard.set_gender(gender.as_str());
            }
            if let Some(height) = args.height {
                wizard.set_height(height);
            }
            if let Some(weight) = args.weight {
                wizard.set_weight(weight);
            }
        }
        WizardStep::DietaryPreferences => {
            for value in &args.dietary {
                wizard.toggle(ListField::DietaryRestrictions, value);
            }
        }
        WizardStep::FitnessGoals => {
            for value in &args.goals {
                wizard.toggle(ListField::FitnessGoals, value);
            }
        }
        WizardStep::HealthInformation => {
            if let Some(text) = &args.health {
                wizard.set_health_conditions(text);
            }
        }
        WizardStep::AyurvedicConstitution => wizard.set_ayurvedic_type(args.ayurvedic_type)?,
        WizardStep::Region => {
            if let Some(region) = &args.region {
                wizard.set_region(region.as_str());
            }
        }
    }
    Ok(())
}

/// Walk the wizard and submit
pub async fn run(ctx: &mut AppContext, format: OutputFormat, args: QuestionnaireArgs) -> Result<()> {
    require_page(ctx, Route::Questionnaire)?;

    let mut wizard = QuestionnaireWizard::new();
    loop {
        debug!(step = wizard.step().title(), "Filling questionnaire step");
        fill_step(&mut wizard, &args)?;
        if wizard.is_last_step() {
            break;
        }
        wizard.next();
    }

    let submission = wizard.submit(&mut ctx.session, ctx.latency).await;
    match format {
        OutputFormat::Json => print_json(&json!({
            "notice": submission.notice,
            "next_route": submission.next_route,
            "answers": wizard.form(),
        }))?,
        OutputFormat::Text => {
            print_notice(&submission.notice);
            if let Some(route) = submission.next_route {
                println!("Next: {}", route.path());
            }
        }
    }

    if submission.notice.is_error() {
        bail!("{}", submission.notice.message);
    }
    Ok(())
}
