// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Environment-only configuration: storage backend, simulated latency, log level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! Configuration module for Nutriveda
//!
//! Configuration is read from environment variables (and an optional `.env`
//! file). There is no config file format.

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, LatencyMode, StorageUrl};
