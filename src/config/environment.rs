// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses storage URL, latency mode, log level and environment from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! Environment-based configuration management

use nutriveda_core::constants::service_names;
use nutriveda_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Storage URL environment variable
pub const STORAGE_URL_ENV: &str = "NUTRIVEDA_STORAGE_URL";
/// Latency mode environment variable
pub const LATENCY_ENV: &str = "NUTRIVEDA_LATENCY";
/// Data directory override environment variable
pub const DATA_DIR_ENV: &str = "NUTRIVEDA_DATA_DIR";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        };
        f.pad(name)
    }
}

/// Type-safe key-value storage location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageUrl {
    /// Process-local map, lost on exit
    Memory,
    /// JSON document on disk
    File {
        /// Path of the JSON document
        path: PathBuf,
    },
}

impl StorageUrl {
    /// Parse `memory` or `file:<path>`; a bare path is treated as a file
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is empty or names an empty file path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::config("Storage URL must not be empty"));
        }
        if s.eq_ignore_ascii_case("memory") || s == ":memory:" {
            return Ok(Self::Memory);
        }
        let path = s.strip_prefix("file:").unwrap_or(s);
        if path.is_empty() {
            return Err(AppError::config(format!(
                "Storage URL '{s}' has no file path"
            )));
        }
        Ok(Self::File {
            path: PathBuf::from(path),
        })
    }

    /// Check if this is an in-memory store
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for StorageUrl {
    fn default() -> Self {
        Self::File {
            path: default_data_dir().join("storage.json"),
        }
    }
}

impl fmt::Display for StorageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.pad("memory"),
            Self::File { path } => write!(f, "file:{}", path.display()),
        }
    }
}

/// Whether service calls sleep to emulate network round trips
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LatencyMode {
    /// Sleep for the fixed per-operation delay
    #[default]
    Simulated,
    /// Return immediately
    None,
}

impl LatencyMode {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "none" | "off" | "0" | "false" => Self::None,
            _ => Self::Simulated,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Where the profile is persisted
    pub storage: StorageUrl,
    /// Simulated latency
    pub latency: LatencyMode,
    /// Service name for structured logging
    pub service_name: String,
    /// Version (from Cargo.toml)
    pub service_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            storage: StorageUrl::default(),
            latency: LatencyMode::default(),
            service_name: service_names::NUTRIVEDA.to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `NUTRIVEDA_STORAGE_URL` is set but unparseable
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let storage = match env::var(STORAGE_URL_ENV) {
            Ok(url) => StorageUrl::parse_url(&url)?,
            Err(_) => StorageUrl::default(),
        };

        let config = Self {
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
            storage,
            latency: LatencyMode::from_str_or_default(&env::var(LATENCY_ENV).unwrap_or_default()),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::NUTRIVEDA.to_owned()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        };

        info!("Configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// Configuration for tests: in-memory storage, no latency
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            environment: Environment::Testing,
            storage: StorageUrl::Memory,
            latency: LatencyMode::None,
            ..Self::default()
        }
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} v{} (environment={}, storage={}, latency={:?})",
            self.service_name,
            self.service_version,
            self.environment,
            self.storage,
            self.latency
        )
    }
}

/// Default directory for persisted state
///
/// `NUTRIVEDA_DATA_DIR` wins, then the platform data directory, then `./data`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::data_dir().map_or_else(
        || PathBuf::from("./data"),
        |dir| dir.join(service_names::NUTRIVEDA),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_display_honours_width() {
        assert_eq!(format!("{:<12}|", Environment::Testing), "testing     |");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("whatever"),
            Environment::Development
        );
    }

    #[test]
    fn test_storage_url_parsing() {
        assert!(StorageUrl::parse_url("memory").unwrap().is_memory());
        assert!(StorageUrl::parse_url(":memory:").unwrap().is_memory());
        assert_eq!(
            StorageUrl::parse_url("file:./state.json").unwrap(),
            StorageUrl::File {
                path: PathBuf::from("./state.json")
            }
        );
        assert_eq!(
            StorageUrl::parse_url("/tmp/state.json").unwrap().to_string(),
            "file:/tmp/state.json"
        );
        assert!(StorageUrl::parse_url("").is_err());
        assert!(StorageUrl::parse_url("file:").is_err());
    }

    #[test]
    fn test_latency_parsing() {
        assert_eq!(LatencyMode::from_str_or_default("none"), LatencyMode::None);
        assert_eq!(LatencyMode::from_str_or_default("OFF"), LatencyMode::None);
        assert_eq!(
            LatencyMode::from_str_or_default(""),
            LatencyMode::Simulated
        );
    }
}
