// ABOUTME: User profile, step target, and partial profile update types
// ABOUTME: The step target is the only per-user setting the recommendation rules consume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::targets::DEFAULT_TARGET_STEPS;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily step goal for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Steps per day
    pub target_steps: u32,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            target_steps: DEFAULT_TARGET_STEPS,
        }
    }
}

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Login email, unique across profiles
    pub email: String,
    /// Argon2 PHC string
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Daily step goal
    pub target: Target,
    /// Whether recommendations should be voiced
    pub tts_enabled: bool,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with a fresh ID
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        target: Target,
        tts_enabled: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            target,
            tts_enabled,
            created_at: Utc::now(),
        }
    }

    /// Apply the fields present in `update`
    pub fn apply(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(target_steps) = update.target_steps {
            self.target.target_steps = target_steps;
        }
        if let Some(tts_enabled) = update.tts_enabled {
            self.tts_enabled = tts_enabled;
        }
    }
}

/// Partial profile update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name
    pub name: Option<String>,
    /// New daily step goal
    pub target_steps: Option<u32>,
    /// New voice preference
    pub tts_enabled: Option<bool>,
}

impl ProfileUpdate {
    /// Whether the update changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.target_steps.is_none() && self.tts_enabled.is_none()
    }
}
