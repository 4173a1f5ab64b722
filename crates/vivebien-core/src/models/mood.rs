// ABOUTME: Mood entry and sentiment label types for analyzed free-text submissions
// ABOUTME: Entries are immutable once created and carry the score that produced the label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::sentiment::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sentiment label derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Score above the positive threshold
    Positive,
    /// Score below the negative threshold
    Negative,
    /// Anything in between, including the empty text
    Neutral,
}

impl Sentiment {
    /// Classify a score: `> 0.05` positive, `< -0.05` negative, otherwise neutral
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Stable lowercase identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Spanish label shown to users
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Positive => "Positivo",
            Self::Negative => "Negativo",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored, analyzed mood submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique entry ID
    pub id: Uuid,
    /// Owner of the entry
    pub user_id: Uuid,
    /// Text as the user wrote it
    pub text: String,
    /// Label assigned at analysis time
    pub sentiment: Sentiment,
    /// Score that produced the label
    pub score: f64,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Create a new entry stamped with the current time
    #[must_use]
    pub fn new(user_id: Uuid, text: impl Into<String>, sentiment: Sentiment, score: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            text: text.into(),
            sentiment,
            score,
            created_at: Utc::now(),
        }
    }
}
