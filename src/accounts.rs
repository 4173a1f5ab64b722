// ABOUTME: Account registration, credential verification, and profile updates
// ABOUTME: Hashes passwords with Argon2id on the blocking pool and enforces unique emails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! User accounts
//!
//! Passwords are stored as Argon2id PHC strings. Hashing and verification run
//! on tokio's blocking pool so they never stall the async executor.

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::logging::AppLogger;
use crate::models::{ProfileUpdate, Target, UserProfile};
use crate::storage::{normalize_email, ProfileStore};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Registration request
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Display name
    pub name: String,
    /// Login email, unique across accounts
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
    /// Daily step goal
    pub target_steps: u32,
    /// Whether recommendations should be voiced
    pub tts_enabled: bool,
}

/// Account operations over a [`ProfileStore`]
#[derive(Clone)]
pub struct AccountService {
    profiles: Arc<dyn ProfileStore>,
}

impl AccountService {
    /// Create an account service over `profiles`
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` for an empty name, email or password
    /// - `ValueOutOfRange` for a zero step target
    /// - `ResourceAlreadyExists` ("email already registered") for a taken email
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        target_steps: u32,
        tts_enabled: bool,
    ) -> AppResult<UserProfile> {
        self.register_account(NewAccount {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            target_steps,
            tts_enabled,
        })
        .await
    }

    /// Register from a [`NewAccount`]
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register)
    pub async fn register_account(&self, account: NewAccount) -> AppResult<UserProfile> {
        let name = required("name", &account.name)?;
        let email = normalize_email(required("email", &account.email)?);
        if account.password.is_empty() {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "password is required",
            ));
        }
        validate_target(account.target_steps)?;

        if self.profiles.find_by_email(&email).await?.is_some() {
            return Err(AppError::already_exists("email already registered"));
        }

        let password_hash = hash_password(account.password).await?;
        let profile = UserProfile::new(
            name,
            email,
            password_hash,
            Target {
                target_steps: account.target_steps,
            },
            account.tts_enabled,
        );

        // The store re-checks the email atomically in case of a concurrent registration
        self.profiles.insert(profile.clone()).await?;
        AppLogger::log_account_event(&profile.id.to_string(), "register", true);
        Ok(profile)
    }

    /// Verify credentials and return the profile
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown email, `AuthInvalid` for a wrong password
    pub async fn login(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        let profile = self
            .profiles
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        if !verify_password(password.to_owned(), profile.password_hash.clone()).await? {
            warn!(user.id = %profile.id, "Invalid password");
            AppLogger::log_account_event(&profile.id.to_string(), "login", false);
            return Err(AppError::auth_invalid("Invalid email or password"));
        }

        AppLogger::log_account_event(&profile.id.to_string(), "login", true);
        Ok(profile)
    }

    /// Apply a partial profile update
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` for a zero step target, `InvalidInput` for a blank
    /// name, `ResourceNotFound` for an unknown user
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> AppResult<UserProfile> {
        if let Some(target) = update.target_steps {
            validate_target(target)?;
        }
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::invalid_input("name cannot be blank"));
        }
        if update.is_empty() {
            debug!(user.id = %user_id, "Empty profile update");
            return self
                .profiles
                .get(user_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User {user_id}")));
        }

        let profile = self.profiles.update(user_id, update).await?;
        AppLogger::log_account_event(&user_id.to_string(), "update_profile", true);
        Ok(profile)
    }

    /// Look up a profile by id
    ///
    /// # Errors
    ///
    /// Propagates storage errors
    pub async fn profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        self.profiles.get(user_id).await
    }

    /// Whether any account exists
    ///
    /// # Errors
    ///
    /// Propagates storage errors
    pub async fn has_any_user(&self) -> AppResult<bool> {
        Ok(self.profiles.count().await? > 0)
    }
}

fn required<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        ));
    }
    Ok(trimmed)
}

fn validate_target(target_steps: u32) -> AppResult<()> {
    if target_steps == 0 {
        return Err(AppError::out_of_range(
            "target_steps must be greater than zero",
        ));
    }
    Ok(())
}

/// Argon2id with reduced cost in debug builds so tests stay fast
fn hasher() -> AppResult<Argon2<'static>> {
    if cfg!(debug_assertions) {
        let params = Params::new(1024, 1, 1, None)
            .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {e}")))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    } else {
        Ok(Argon2::default())
    }
}

async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Argon2 password hashing failed: {e}")))
    })
    .await
    .map_err(|e| AppError::internal("Password hashing task failed").with_source(e))?
}

async fn verify_password(password: String, password_hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&password_hash)
            .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {e}")))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(|e| AppError::internal("Password verification task failed").with_source(e))?
}
