// ABOUTME: Application routes and authentication-based navigation gating
// ABOUTME: Resolves a requested route to render-or-redirect given the session status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! # Navigation Gating
//!
//! | Route | Anonymous | Signed in, no questionnaire | Signed in, questionnaire |
//! |---|---|---|---|
//! | home, not-found | render | render | render |
//! | login, signup | render | dashboard | dashboard |
//! | questionnaire, meal-plans, fitness, nutrition, profile | login | render | render |
//! | dashboard | login | questionnaire | render |
//!
//! Redirecting login to dashboard for a user without a questionnaire lands on
//! the dashboard rule, which then sends them to the questionnaire.

use crate::session::SessionStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Route {
    /// Landing page
    Home,
    /// Sign in
    Login,
    /// Create account
    Signup,
    /// Health questionnaire wizard
    Questionnaire,
    /// Overview after sign in
    Dashboard,
    /// Meal plan generator
    MealPlans,
    /// Exercise recommendations
    Fitness,
    /// Nutrition facts search
    Nutrition,
    /// Account details
    Profile,
    /// Catch-all for unknown paths
    NotFound,
}

impl Route {
    /// Every route, catch-all last
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::Login,
        Self::Signup,
        Self::Questionnaire,
        Self::Dashboard,
        Self::MealPlans,
        Self::Fitness,
        Self::Nutrition,
        Self::Profile,
        Self::NotFound,
    ];

    /// Route for a URL path; unknown paths map to [`Route::NotFound`]
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Self::Home,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/questionnaire" => Self::Questionnaire,
            "/dashboard" => Self::Dashboard,
            "/meal-plans" => Self::MealPlans,
            "/fitness" => Self::Fitness,
            "/nutrition" => Self::Nutrition,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    /// Canonical URL path (`*` for the catch-all)
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Questionnaire => "/questionnaire",
            Self::Dashboard => "/dashboard",
            Self::MealPlans => "/meal-plans",
            Self::Fitness => "/fitness",
            Self::Nutrition => "/nutrition",
            Self::Profile => "/profile",
            Self::NotFound => "*",
        }
    }

    /// Route name as used on the command line
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Questionnaire => "questionnaire",
            Self::Dashboard => "dashboard",
            Self::MealPlans => "meal-plans",
            Self::Fitness => "fitness",
            Self::Nutrition => "nutrition",
            Self::Profile => "profile",
            Self::NotFound => "not-found",
        }
    }

    /// Only reachable when signed in
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Questionnaire
                | Self::Dashboard
                | Self::MealPlans
                | Self::Fitness
                | Self::Nutrition
                | Self::Profile
        )
    }

    /// Only meaningful when signed out
    #[must_use]
    pub const fn is_guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    /// Accepts a route name (`meal-plans`) or a path (`/meal-plans`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('/') {
            return Ok(Self::from_path(s));
        }
        Ok(Self::ALL
            .into_iter()
            .find(|route| route.name().eq_ignore_ascii_case(s))
            .unwrap_or(Self::NotFound))
    }
}

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "route", rename_all = "lowercase")]
pub enum RouteDecision {
    /// Show the requested page
    Render(Route),
    /// Replace the location with another route
    Redirect(Route),
}

impl RouteDecision {
    /// Route that ends up on screen
    #[must_use]
    pub const fn target(&self) -> Route {
        match self {
            Self::Render(route) | Self::Redirect(route) => *route,
        }
    }

    /// True for redirects
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Decide whether `route` renders or redirects for `status`
#[must_use]
pub fn resolve(route: Route, status: SessionStatus) -> RouteDecision {
    let decision = if route.is_guest_only() && status.authenticated {
        RouteDecision::Redirect(Route::Dashboard)
    } else if route.requires_auth() && !status.authenticated {
        RouteDecision::Redirect(Route::Login)
    } else if route == Route::Dashboard && !status.questionnaire_complete {
        RouteDecision::Redirect(Route::Questionnaire)
    } else {
        RouteDecision::Render(route)
    };

    debug!(requested = %route, decision = ?decision, "Resolved navigation");
    decision
}

/// Follow redirects until a route renders
///
/// Every redirect chain in the gating table ends within two hops.
#[must_use]
pub fn settle(route: Route, status: SessionStatus) -> Route {
    let mut current = route;
    for _ in 0..Route::ALL.len() {
        match resolve(current, status) {
            RouteDecision::Render(target) => return target,
            RouteDecision::Redirect(next) => current = next,
        }
    }
    current
}
