// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
// ABOUTME: Route command for nutriveda-cli
// ABOUTME: Reports whether a page renders or redirects for the current session

use crate::helpers::display::{print_json, OutputFormat};
use anyhow::Result;
use nutriveda::context::AppContext;
use nutriveda::routes::{settle, Route, RouteDecision};
use serde_json::json;

/// Print the gating decision for `route`
pub fn route(ctx: &AppContext, format: OutputFormat, route: Route) -> Result<()> {
    let status = ctx.session.status();
    let decision = ctx.navigate(route);
    let lands_on = settle(route, status);

    match format {
        OutputFormat::Json => print_json(&json!({
            "requested": route,
            "decision": decision,
            "lands_on": lands_on,
            "session": status,
        })),
        OutputFormat::Text => {
            match decision {
                RouteDecision::Render(target) => println!("{} renders", target.path()),
                RouteDecision::Redirect(target) => {
                    println!("{} redirects to {}", route.path(), target.path());
                    if lands_on != target {
                        println!("  and then to {}", lands_on.path());
                    }
                }
            }
            Ok(())
        }
    }
}
