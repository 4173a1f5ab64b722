// ABOUTME: In-memory store backing every storage port with sharded concurrent maps
// ABOUTME: Used by the service layer, the CLI demo, and the integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{normalize_email, BiometricHistory, MoodJournal, ProfileStore};
use crate::errors::{AppError, AppResult};
use crate::models::{BiometricSample, MoodEntry, ProfileUpdate, UserProfile};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Thread-safe in-memory storage
///
/// Cloning is cheap and clones share the same data. `DashMap` shards its
/// locks, so appends for different users do not contend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    biometrics: Arc<DashMap<Uuid, Vec<BiometricSample>>>,
    moods: Arc<DashMap<Uuid, Vec<MoodEntry>>>,
    profiles: Arc<DashMap<Uuid, UserProfile>>,
    emails: Arc<DashMap<String, Uuid>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BiometricHistory for InMemoryStore {
    async fn append(&self, user_id: Uuid, sample: BiometricSample) -> AppResult<()> {
        self.biometrics.entry(user_id).or_default().push(sample);
        Ok(())
    }

    async fn history(&self, user_id: Uuid) -> AppResult<Vec<BiometricSample>> {
        let mut samples = self
            .biometrics
            .get(&user_id)
            .map(|s| s.value().clone())
            .unwrap_or_default();
        // Stable sort keeps insertion order within a date
        samples.sort_by_key(|s| s.date);
        Ok(samples)
    }

    async fn latest(&self, user_id: Uuid) -> AppResult<Option<BiometricSample>> {
        Ok(self
            .biometrics
            .get(&user_id)
            .and_then(|s| s.value().last().copied()))
    }

    async fn count(&self, user_id: Uuid) -> AppResult<usize> {
        Ok(self.biometrics.get(&user_id).map_or(0, |s| s.len()))
    }
}

#[async_trait]
impl MoodJournal for InMemoryStore {
    async fn append(&self, entry: MoodEntry) -> AppResult<()> {
        self.moods.entry(entry.user_id).or_default().push(entry);
        Ok(())
    }

    async fn entries(&self, user_id: Uuid) -> AppResult<Vec<MoodEntry>> {
        Ok(self
            .moods
            .get(&user_id)
            .map(|e| e.value().clone())
            .unwrap_or_default())
    }

    async fn latest(&self, user_id: Uuid) -> AppResult<Option<MoodEntry>> {
        Ok(self
            .moods
            .get(&user_id)
            .and_then(|e| e.value().last().cloned()))
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn insert(&self, profile: UserProfile) -> AppResult<()> {
        if self.profiles.contains_key(&profile.id) {
            return Err(AppError::already_exists(format!(
                "user {} already exists",
                profile.id
            )));
        }

        // Entry API reserves the email atomically against concurrent inserts
        match self.emails.entry(normalize_email(&profile.email)) {
            Entry::Occupied(_) => Err(AppError::already_exists("email already registered")),
            Entry::Vacant(slot) => {
                slot.insert(profile.id);
                self.profiles.insert(profile.id, profile);
                Ok(())
            }
        }
    }

    async fn get(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(&user_id).map(|p| p.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserProfile>> {
        let Some(user_id) = self.emails.get(&normalize_email(email)).map(|id| *id.value()) else {
            return Ok(None);
        };
        Ok(self.profiles.get(&user_id).map(|p| p.value().clone()))
    }

    async fn update(&self, user_id: Uuid, update: &ProfileUpdate) -> AppResult<UserProfile> {
        let mut profile = self
            .profiles
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found(format!("User {user_id}")))?;
        profile.apply(update);
        Ok(profile.value().clone())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.profiles.len())
    }
}
