// ABOUTME: Storage ports for biometric history, the mood journal, and user profiles
// ABOUTME: Append-only history traits with an in-memory dashmap implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Storage abstraction layer
//!
//! Biometric samples and mood entries are append-only: the traits expose no
//! update or delete. Profiles are mutable through [`ProfileStore::update`].

/// In-memory reference implementation
pub mod memory;

pub use memory::InMemoryStore;

use crate::errors::AppResult;
use crate::models::{BiometricSample, MoodEntry, ProfileUpdate, UserProfile};
use async_trait::async_trait;
use uuid::Uuid;

/// Per-user biometric history
#[async_trait]
pub trait BiometricHistory: Send + Sync {
    /// Append a sample; duplicates for the same date are kept
    async fn append(&self, user_id: Uuid, sample: BiometricSample) -> AppResult<()>;

    /// All samples ordered by date, insertion order breaking ties
    async fn history(&self, user_id: Uuid) -> AppResult<Vec<BiometricSample>>;

    /// The most recently inserted sample, regardless of its date
    async fn latest(&self, user_id: Uuid) -> AppResult<Option<BiometricSample>>;

    /// Number of samples stored for the user
    async fn count(&self, user_id: Uuid) -> AppResult<usize>;
}

/// Per-user mood journal
#[async_trait]
pub trait MoodJournal: Send + Sync {
    /// Append an analyzed entry
    async fn append(&self, entry: MoodEntry) -> AppResult<()>;

    /// Entries in insertion order
    async fn entries(&self, user_id: Uuid) -> AppResult<Vec<MoodEntry>>;

    /// The most recently inserted entry
    async fn latest(&self, user_id: Uuid) -> AppResult<Option<MoodEntry>>;
}

/// User profiles keyed by id with a unique email index
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert a new profile
    ///
    /// # Errors
    ///
    /// `ResourceAlreadyExists` if the email is taken
    async fn insert(&self, profile: UserProfile) -> AppResult<()>;

    /// Look up a profile by id
    async fn get(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Look up a profile by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>>;

    /// Apply a partial update and return the new profile
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` if no profile has this id
    async fn update(&self, user_id: Uuid, update: &ProfileUpdate) -> AppResult<UserProfile>;

    /// Number of registered profiles
    async fn count(&self) -> AppResult<usize>;
}

/// Normalized key for the email index
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
