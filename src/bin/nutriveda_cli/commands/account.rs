// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
// ABOUTME: Account commands for nutriveda-cli: signup, login, logout, whoami
// ABOUTME: Prints a notice and the next route the app would navigate to

use crate::helpers::display::{print_json, print_notice, print_profile, OutputFormat};
use anyhow::{bail, Result};
use nutriveda::context::AppContext;
use nutriveda::notices::{messages, Notice};
use nutriveda::routes::Route;
use serde_json::json;

/// Create an account; the app continues to the questionnaire
pub async fn signup(
    ctx: &mut AppContext,
    format: OutputFormat,
    email: &str,
    password: &str,
    name: &str,
) -> Result<()> {
    let result = ctx.session.signup(email, password, name).await.cloned();
    let notice = Notice::from_result(&result, messages::SIGNUP_SUCCEEDED, messages::SIGNUP_FAILED);
    report(format, &notice, result.ok().map(|profile| (profile, Route::Questionnaire)))
}

/// Sign in; the app continues to the dashboard
pub async fn login(
    ctx: &mut AppContext,
    format: OutputFormat,
    email: &str,
    password: &str,
) -> Result<()> {
    let result = ctx.session.login(email, password).await.cloned();
    let notice = Notice::from_result(&result, messages::LOGIN_SUCCEEDED, messages::LOGIN_FAILED);
    report(format, &notice, result.ok().map(|profile| (profile, Route::Dashboard)))
}

/// Sign out and delete the stored profile
pub async fn logout(ctx: &mut AppContext, format: OutputFormat) -> Result<()> {
    ctx.session.logout().await?;
    let notice = Notice::info(messages::LOGGED_OUT);
    match format {
        OutputFormat::Json => print_json(&json!({ "notice": notice, "next_route": Route::Home })),
        OutputFormat::Text => {
            print_notice(&notice);
            Ok(())
        }
    }
}

/// Show the signed-in profile
pub fn whoami(ctx: &AppContext, format: OutputFormat) -> Result<()> {
    match (format, ctx.session.current_user()) {
        (OutputFormat::Json, user) => print_json(&json!({ "user": user })),
        (OutputFormat::Text, Some(profile)) => {
            print_profile(profile);
            Ok(())
        }
        (OutputFormat::Text, None) => {
            println!("Not signed in.");
            Ok(())
        }
    }
}

fn report(
    format: OutputFormat,
    notice: &Notice,
    outcome: Option<(nutriveda::models::UserProfile, Route)>,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "notice": notice,
            "user": outcome.as_ref().map(|(profile, _)| profile),
            "next_route": outcome.as_ref().map(|(_, route)| route),
        }))?,
        OutputFormat::Text => {
            print_notice(notice);
            if let Some((profile, route)) = &outcome {
                println!("Signed in as {} (id {}). Next: {}", profile.name, profile.id, route.path());
            }
        }
    }

    if outcome.is_none() {
        bail!("{}", notice.message);
    }
    Ok(())
}
