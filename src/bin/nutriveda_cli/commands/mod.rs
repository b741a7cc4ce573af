// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
// ABOUTME: Re-exports command modules for nutriveda-cli
// ABOUTME: Account, questionnaire, meal/fitness, catalog and navigation commands

pub mod account;
pub mod catalog;
pub mod meals;
pub mod navigation;
pub mod questionnaire;

use anyhow::{bail, Result};
use nutriveda::context::AppContext;
use nutriveda::routes::Route;

/// Stop unless `route` renders for the current session
pub fn require_page(ctx: &AppContext, route: Route) -> Result<()> {
    let decision = ctx.navigate(route);
    if decision.is_redirect() {
        bail!("Sign in first (redirected to {})", decision.target().path());
    }
    Ok(())
}
