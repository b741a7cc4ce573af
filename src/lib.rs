// ABOUTME: Main library entry point for the Nutriveda meal planning platform
// ABOUTME: Session, services, questionnaire wizard and navigation over the core catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

#![deny(unsafe_code)]

//! # Nutriveda
//!
//! An Ayurveda-flavoured nutrition and fitness application core. Users sign
//! up through a mocked session store, answer a six-step health
//! questionnaire, and receive meal plans, exercise suggestions and nutrition
//! facts computed from fixed in-process catalogs.
//!
//! ## Architecture
//!
//! - **Core** (`nutriveda-core`): models, catalogs, constants, error taxonomy
//! - **Intelligence** (`nutriveda-intelligence`): preference filter, meal assembler, exercise matching
//! - **This crate**: configuration, logging, the key-value storage port, the
//!   session store, simulated-latency services, the questionnaire wizard,
//!   navigation gating and user notices
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriveda::config::AppConfig;
//! use nutriveda::context::AppContext;
//! use nutriveda::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let mut ctx = AppContext::bootstrap(config).await;
//!     ctx.session.signup("asha@example.com", "secret", "Asha").await?;
//!     println!("{:?}", ctx.session.status());
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application context wiring
pub mod context;

/// Structured logging setup
pub mod logging;

/// User-facing notices
pub mod notices;

/// Questionnaire wizard
pub mod questionnaire;

/// Routes and navigation gating
pub mod routes;

/// Catalog, meal plan and fitness services
pub mod services;

/// Simulated authentication session
pub mod session;

/// Key-value persistence port and backends
pub mod storage;

pub use nutriveda_core::{catalog, constants, errors, models};
pub use nutriveda_intelligence as intelligence;
