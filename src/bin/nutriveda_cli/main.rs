// ABOUTME: Nutriveda CLI - drives the session, questionnaire and catalog services from a terminal
// ABOUTME: Parses commands with clap, bootstraps the application context, prints text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda
//!
//! Usage:
//! ```bash
//! # Create an account (password is accepted but never checked)
//! nutriveda-cli signup --email asha@example.com --password secret --name Asha
//!
//! # Answer the questionnaire
//! nutriveda-cli questionnaire --age 34 --goal "Weight loss" --ayurvedic-type pitta --region "South Asia"
//!
//! # Generate today's meal plan
//! nutriveda-cli meal-plan
//!
//! # Search the catalog without simulated delays
//! NUTRIVEDA_LATENCY=none nutriveda-cli search rice --json
//!
//! # Check where a page would send you
//! nutriveda-cli route /dashboard
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use helpers::display::OutputFormat;
use nutriveda::config::{AppConfig, LatencyMode, StorageUrl};
use nutriveda::constants::service_names;
use nutriveda::context::AppContext;
use nutriveda::logging::LoggingConfig;
use nutriveda::models::{Constitution, Season};
use nutriveda::routes::Route;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutriveda-cli",
    about = "Nutriveda meal planning CLI",
    long_about = "Sign up, answer the health questionnaire, and get meal plans, exercise suggestions and nutrition facts."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Storage override (`memory` or `file:<path>`)
    #[arg(long, global = true)]
    storage_url: Option<String>,

    /// Skip simulated network delays
    #[arg(long, global = true)]
    no_latency: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create an account and sign in
    Signup {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password (not verified)
        #[arg(long)]
        password: String,

        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Sign in as the stored account
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password (not verified)
        #[arg(long)]
        password: String,
    },

    /// Sign out and delete the stored profile
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Answer the health questionnaire
    Questionnaire(commands::questionnaire::QuestionnaireArgs),

    /// Generate a meal plan from your questionnaire
    MealPlan {
        /// Season override (defaults to the current season)
        #[arg(long)]
        season: Option<Season>,
    },

    /// Exercise recommendations for your fitness goals
    Fitness,

    /// Search foods by name
    Search {
        /// Query (at least two characters)
        query: String,
    },

    /// Look up foods by id or attribute
    Food {
        /// Food id
        id: Option<String>,

        /// Exact category, e.g. `Grains`
        #[arg(long, conflicts_with = "id")]
        category: Option<String>,

        /// Season, including year-round items
        #[arg(long, conflicts_with = "id")]
        season: Option<Season>,

        /// Region, including `Global` items
        #[arg(long, conflicts_with = "id")]
        region: Option<String>,

        /// Constitution, including `tridoshic` items
        #[arg(long, conflicts_with = "id")]
        ayurvedic_type: Option<Constitution>,
    },

    /// Show whether a page renders or redirects
    Route {
        /// Route name or path, e.g. `dashboard` or `/meal-plans`
        route: Route,
    },
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env()?;
    if let Some(url) = &cli.storage_url {
        config.storage = StorageUrl::parse_url(url)?;
    }
    if cli.no_latency {
        config.latency = LatencyMode::None;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::NUTRIVEDA_CLI);
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = load_config(&cli)?;
    debug!("{}", config.summary());
    let mut ctx = AppContext::bootstrap(config).await;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    match cli.command {
        Command::Signup {
            email,
            password,
            name,
        } => commands::account::signup(&mut ctx, format, &email, &password, &name).await,
        Command::Login { email, password } => {
            commands::account::login(&mut ctx, format, &email, &password).await
        }
        Command::Logout => commands::account::logout(&mut ctx, format).await,
        Command::Whoami => commands::account::whoami(&ctx, format),
        Command::Questionnaire(args) => commands::questionnaire::run(&mut ctx, format, args).await,
        Command::MealPlan { season } => commands::meals::meal_plan(&ctx, format, season).await,
        Command::Fitness => commands::meals::fitness(&ctx, format),
        Command::Search { query } => commands::catalog::search(&ctx, format, &query).await,
        Command::Food {
            id,
            category,
            season,
            region,
            ayurvedic_type,
        } => {
            let query = commands::catalog::FoodQuery {
                id,
                category,
                season,
                region,
                ayurvedic_type,
            };
            commands::catalog::food(&ctx, format, query).await
        }
        Command::Route { route } => commands::navigation::route(&ctx, format, route),
    }
}
