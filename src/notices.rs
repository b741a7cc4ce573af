// ABOUTME: User-facing notices (toast messages) for operation outcomes
// ABOUTME: Maps AppError codes to a success, error or info notice with display text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

use nutriveda_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed notice texts
pub mod messages {
    /// Login succeeded
    pub const LOGIN_SUCCEEDED: &str = "Login successful";
    /// Login failed for any reason
    pub const LOGIN_FAILED: &str = "Login failed";
    /// Signup succeeded
    pub const SIGNUP_SUCCEEDED: &str = "Account created successfully";
    /// Signup failed for any reason
    pub const SIGNUP_FAILED: &str = "Signup failed";
    /// Questionnaire saved
    pub const PROFILE_UPDATED: &str = "Your profile has been updated successfully";
    /// Questionnaire save failed
    pub const PROFILE_UPDATE_FAILED: &str = "Failed to update your profile";
    /// Meal plan ready
    pub const MEAL_PLAN_GENERATED: &str = "Meal plan generated successfully";
    /// Meal plan generation failed
    pub const MEAL_PLAN_FAILED: &str = "Failed to generate meal plan";
    /// Signed out
    pub const LOGGED_OUT: &str = "You have been logged out";
}

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Operation completed
    Success,
    /// Operation failed or needs user action
    Error,
    /// Neutral information
    Info,
}

impl NoticeLevel {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// A short message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Display text
    pub message: String,
}

impl Notice {
    /// Success notice
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Error notice
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Informational notice
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Error notice for a failed operation
    ///
    /// User-actionable errors (a missing questionnaire, bad input) show their
    /// own message; everything else shows the generic `failure` text.
    #[must_use]
    pub fn from_error(error: &AppError, failure: &str) -> Self {
        if error.code.is_user_actionable() {
            Self::error(error.message.clone())
        } else {
            Self::error(failure)
        }
    }

    /// Success notice on `Ok`, [`Self::from_error`] on `Err`
    #[must_use]
    pub fn from_result<T>(result: &Result<T, AppError>, success: &str, failure: &str) -> Self {
        match result {
            Ok(_) => Self::success(success),
            Err(e) => Self::from_error(e, failure),
        }
    }

    /// True for error notices
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}
