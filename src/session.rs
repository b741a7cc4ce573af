// ABOUTME: Simulated authentication session persisted through the key-value port
// ABOUTME: Mock signup/login, profile and questionnaire merges, wholesale JSON persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriveda

//! # Session Store
//!
//! There is no real authentication. Signup always succeeds and fabricates an
//! identifier; login only checks that the supplied email matches the stored
//! profile. The profile is written in full under [`PROFILE_STORAGE_KEY`] on
//! every mutation and removed on logout.

use crate::logging::AppLogger;
use crate::services::latency::SimulatedLatency;
use crate::storage::{get_json, set_json, KeyValueStore};
use nutriveda_core::constants::latency::AUTH_ROUND_TRIP_MS;
use nutriveda_core::constants::session::{PROFILE_STORAGE_KEY, USER_ID_ALPHABET, USER_ID_LENGTH};
use nutriveda_core::errors::{AppError, AppResult, ErrorCode};
use nutriveda_core::models::{ProfileUpdate, Questionnaire, UserProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Authentication facts needed for navigation decisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    /// A profile is loaded
    pub authenticated: bool,
    /// The loaded profile carries a questionnaire
    pub questionnaire_complete: bool,
}

impl SessionStatus {
    /// No user
    pub const ANONYMOUS: Self = Self {
        authenticated: false,
        questionnaire_complete: false,
    };
}

/// Random lowercase base-36 identifier of [`USER_ID_LENGTH`] characters
#[must_use]
pub fn generate_user_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..USER_ID_LENGTH)
        .map(|_| char::from(USER_ID_ALPHABET[rng.gen_range(0..USER_ID_ALPHABET.len())]))
        .collect()
}

/// The single logical user session
#[derive(Debug)]
pub struct SessionManager<S: KeyValueStore> {
    store: S,
    latency: SimulatedLatency,
    user: Option<UserProfile>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Anonymous session over `store`; call [`Self::restore`] to rehydrate
    #[must_use]
    pub const fn new(store: S, latency: SimulatedLatency) -> Self {
        Self {
            store,
            latency,
            user: None,
        }
    }

    /// Backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current profile, if any
    #[must_use]
    pub const fn current_user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// True when a profile is loaded
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True iff the loaded profile has a questionnaire
    #[must_use]
    pub fn has_completed_questionnaire(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(UserProfile::has_completed_questionnaire)
    }

    /// Snapshot for navigation gating
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            authenticated: self.is_authenticated(),
            questionnaire_complete: self.has_completed_questionnaire(),
        }
    }

    /// Rehydrate the stored profile; absent or unreadable data leaves the session anonymous
    pub async fn restore(&mut self) -> SessionStatus {
        self.user = match get_json::<UserProfile, _>(&self.store, PROFILE_STORAGE_KEY).await {
            Ok(Some(profile)) => {
                AppLogger::log_auth_event(&profile.id, "restore", true);
                Some(profile)
            }
            Ok(None) => {
                debug!("No stored profile to restore");
                None
            }
            Err(e) => {
                warn!(error = %e, "Stored profile is unreadable, starting anonymous");
                None
            }
        };
        self.status()
    }

    /// Create a new profile and sign in as it
    ///
    /// The password is accepted but never checked or stored.
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the profile cannot be persisted
    pub async fn signup(
        &mut self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> AppResult<&UserProfile> {
        self.latency.round_trip(AUTH_ROUND_TRIP_MS).await;

        let id = generate_user_id(&mut rand::thread_rng());
        let profile = UserProfile::new(id, email, name);
        self.persist(&profile).await?;

        AppLogger::log_auth_event(&profile.id, "signup", true);
        Ok(&*self.user.insert(profile))
    }

    /// Sign in as the stored profile when its email matches
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` when no profile is stored, it is unreadable,
    /// or its email differs; returns a storage error if the store cannot be read
    pub async fn login(&mut self, email: &str, _password: &str) -> AppResult<&UserProfile> {
        self.latency.round_trip(AUTH_ROUND_TRIP_MS).await;

        let stored = match get_json::<UserProfile, _>(&self.store, PROFILE_STORAGE_KEY).await {
            Ok(stored) => stored,
            Err(e) if e.code == ErrorCode::SerializationError => {
                warn!(error = %e, "Stored profile is unreadable");
                None
            }
            Err(e) => return Err(e),
        };

        match stored {
            Some(profile) if profile.email == email => {
                AppLogger::log_auth_event(&profile.id, "login", true);
                Ok(&*self.user.insert(profile))
            }
            _ => {
                AppLogger::log_auth_event("anonymous", "login", false);
                Err(AppError::invalid_credentials())
            }
        }
    }

    /// Delete the stored profile, then clear the session
    ///
    /// # Errors
    ///
    /// Returns a storage error if the profile cannot be removed; the session
    /// stays signed in
    pub async fn logout(&mut self) -> AppResult<()> {
        self.store.remove(PROFILE_STORAGE_KEY).await?;
        if let Some(profile) = self.user.take() {
            AppLogger::log_auth_event(&profile.id, "logout", true);
        }
        Ok(())
    }

    /// Shallow-merge `update` into the profile; no-op when anonymous
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the profile cannot be persisted
    pub async fn update_profile(&mut self, update: ProfileUpdate) -> AppResult<()> {
        let Some(mut profile) = self.user.clone() else {
            debug!("Ignoring profile update without a session");
            return Ok(());
        };
        profile.apply(update);
        self.commit(profile).await
    }

    /// Merge answers into the questionnaire, creating it if absent; no-op when anonymous
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the profile cannot be persisted
    pub async fn update_questionnaire(&mut self, update: Questionnaire) -> AppResult<()> {
        let Some(mut profile) = self.user.clone() else {
            debug!("Ignoring questionnaire update without a session");
            return Ok(());
        };
        profile.merge_questionnaire(update);
        self.commit(profile).await
    }

    async fn commit(&mut self, profile: UserProfile) -> AppResult<()> {
        self.persist(&profile).await?;
        info!(
            user.id = %profile.id,
            questionnaire = profile.has_completed_questionnaire(),
            "Profile updated"
        );
        self.user = Some(profile);
        Ok(())
    }

    async fn persist(&self, profile: &UserProfile) -> AppResult<()> {
        set_json(&self.store, PROFILE_STORAGE_KEY, profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_user_id_shape() {
        let id = generate_user_id(&mut rand::thread_rng());
        assert_eq!(id.len(), USER_ID_LENGTH);
        assert!(id.bytes().all(|b| USER_ID_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_user_id_is_deterministic_for_fixed_rng() {
        let first = generate_user_id(&mut StepRng::new(7, 13));
        let second = generate_user_id(&mut StepRng::new(7, 13));
        assert_eq!(first, second);
    }
}
