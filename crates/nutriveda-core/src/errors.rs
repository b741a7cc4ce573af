// ABOUTME: Unified error type and error codes shared by every Nutriveda crate
// ABOUTME: Flat taxonomy: missing upstream data vs. failed operation, plus supporting codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! # Unified Error Handling System
//!
//! The taxonomy is intentionally flat. Two codes carry the user-facing
//! semantics:
//!
//! - [`ErrorCode::ValidationMissing`]: required upstream data is absent
//!   (for example, generating a meal plan before the questionnaire exists).
//!   Surfaced as a notice, never retried.
//! - [`ErrorCode::OperationFailed`]: anything that went wrong inside a
//!   simulated call. Logged at the call site and surfaced as a generic notice.
//!
//! The remaining codes describe failures of the ambient layers (storage,
//! serialization, configuration).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Required upstream data is absent
    ValidationMissing,
    /// A simulated service call failed
    OperationFailed,
    /// Login did not match a stored profile
    InvalidCredentials,
    /// Caller supplied malformed input
    InvalidInput,
    /// Requested resource does not exist
    ResourceNotFound,
    /// Key-value persistence failed
    StorageError,
    /// Persisted data could not be encoded or decoded
    SerializationError,
    /// Configuration value is invalid
    ConfigInvalid,
    /// Unexpected internal failure
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ValidationMissing => "Required information is missing",
            Self::OperationFailed => "The operation could not be completed",
            Self::InvalidCredentials => "Invalid credentials",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether this error should be shown to the user verbatim
    ///
    /// Validation gaps carry actionable messages ("complete your
    /// questionnaire first"); everything else collapses to a generic notice.
    #[must_use]
    pub const fn is_user_actionable(&self) -> bool {
        matches!(self, Self::ValidationMissing | Self::InvalidInput)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ValidationMissing => "VALIDATION_MISSING",
            Self::OperationFailed => "OPERATION_FAILED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidInput => "INVALID_INPUT",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::StorageError => "STORAGE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(name)
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Required upstream data is absent
    #[must_use]
    pub fn validation_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationMissing, message)
    }

    /// A simulated operation failed
    #[must_use]
    pub fn operation_failed(operation: impl Into<String>) -> Self {
        Self::new(ErrorCode::OperationFailed, operation)
    }

    /// Login credentials did not match
    #[must_use]
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "Invalid credentials")
    }

    /// Invalid caller input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Storage failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Re-tag any error as a failed operation, keeping the original as source
    ///
    /// Validation gaps pass through untouched so the caller still sees the
    /// actionable message.
    #[must_use]
    pub fn into_operation_failed(self, operation: &str) -> Self {
        if self.code == ErrorCode::ValidationMissing {
            return self;
        }
        Self::operation_failed(format!("{operation} failed")).with_source(self)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_description_and_message() {
        let err = AppError::validation_missing("Please complete your profile questionnaire first");
        assert_eq!(
            err.to_string(),
            "Required information is missing: Please complete your profile questionnaire first"
        );
    }

    #[test]
    fn test_into_operation_failed_keeps_validation() {
        let err = AppError::validation_missing("no questionnaire").into_operation_failed("meal plan");
        assert_eq!(err.code, ErrorCode::ValidationMissing);

        let err = AppError::storage("disk full").into_operation_failed("meal plan");
        assert_eq!(err.code, ErrorCode::OperationFailed);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ValidationMissing).unwrap();
        assert_eq!(json, "\"VALIDATION_MISSING\"");
        assert_eq!(ErrorCode::OperationFailed.to_string(), "OPERATION_FAILED");
    }
}
