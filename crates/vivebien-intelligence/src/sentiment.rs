// ABOUTME: Lexicon-based sentiment scoring for free-text mood entries in Spanish
// ABOUTME: Counts tokens that start with positive or negative stems and normalizes by token count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Sentiment scoring
//!
//! The scorer lowercases the text, splits it into Unicode word tokens (so
//! `enérgica` stays one token), and counts tokens that *start with* any stem in
//! the positive or negative list:
//!
//! ```text
//! score = (positive_hits - negative_hits) / max(1, token_count)
//! ```
//!
//! Stems are literal prefixes, not linguistic stems. `mal` therefore also
//! matches `malestar`, and a single token may count toward both lists.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use vivebien_core::models::Sentiment;

use regex::Regex;

/// Default positive stems
pub const POSITIVE_STEMS: &[&str] = &[
    "bien",
    "contento",
    "contenta",
    "tranquilo",
    "tranquila",
    "feliz",
    "relajado",
    "relajada",
    "descansado",
    "sano",
    "sana",
    "enérgico",
    "enérgica",
    "alegre",
    "genial",
];

/// Default negative stems
pub const NEGATIVE_STEMS: &[&str] = &[
    "estres",
    "estresado",
    "estresada",
    "cansado",
    "cansada",
    "triste",
    "mal",
    "ansioso",
    "ansiosa",
    "preocupado",
    "preocupada",
    "nervioso",
    "nerviosa",
    "agotado",
    "agotada",
    "insomnio",
    "dificultad",
    "fatal",
];

/// Unicode word tokens; `None` only if the static pattern failed to compile
static WORD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+").ok());

static DEFAULT_ANALYZER: LazyLock<SentimentAnalyzer> = LazyLock::new(SentimentAnalyzer::default);

/// Positive and negative stem lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Prefixes that mark a token as positive
    pub positive: Vec<String>,
    /// Prefixes that mark a token as negative
    pub negative: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from stem slices
    #[must_use]
    pub fn new(positive: &[&str], negative: &[&str]) -> Self {
        Self {
            positive: positive.iter().map(|s| (*s).to_owned()).collect(),
            negative: negative.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    fn is_positive(&self, token: &str) -> bool {
        self.positive.iter().any(|stem| token.starts_with(stem.as_str()))
    }

    fn is_negative(&self, token: &str) -> bool {
        self.negative.iter().any(|stem| token.starts_with(stem.as_str()))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(POSITIVE_STEMS, NEGATIVE_STEMS)
    }
}

/// Full result of scoring one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    /// Classified label
    pub label: Sentiment,
    /// Normalized score in `[-1, 1]`
    pub score: f64,
    /// Number of word tokens in the text
    pub token_count: usize,
    /// Tokens matching a positive stem
    pub positive_hits: usize,
    /// Tokens matching a negative stem
    pub negative_hits: usize,
}

impl SentimentAnalysis {
    /// The `(label, score)` pair
    #[must_use]
    pub const fn as_pair(&self) -> (Sentiment, f64) {
        (self.label, self.score)
    }
}

/// Scores text against a [`Lexicon`]
#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
}

impl SentimentAnalyzer {
    /// Create an analyzer over a custom lexicon
    #[must_use]
    pub const fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The lexicon in use
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score `text`
    ///
    /// Empty or whitespace-only text has zero tokens and scores `0.0`
    /// (neutral); the divisor is clamped to at least one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // token counts are far below 2^52
    pub fn analyze(&self, text: &str) -> SentimentAnalysis {
        let lowered = text.to_lowercase();
        let tokens = tokenize(&lowered);

        let positive_hits = tokens.iter().filter(|t| self.lexicon.is_positive(t)).count();
        let negative_hits = tokens.iter().filter(|t| self.lexicon.is_negative(t)).count();
        let token_count = tokens.len();

        let score =
            (positive_hits as f64 - negative_hits as f64) / token_count.max(1) as f64;

        SentimentAnalysis {
            label: Sentiment::from_score(score),
            score,
            token_count,
            positive_hits,
            negative_hits,
        }
    }
}

/// Score `text` with the default Spanish lexicon
///
/// ```
/// use vivebien_core::models::Sentiment;
/// use vivebien_intelligence::score_sentiment;
///
/// assert_eq!(score_sentiment(""), (Sentiment::Neutral, 0.0));
/// ```
#[must_use]
pub fn score_sentiment(text: &str) -> (Sentiment, f64) {
    DEFAULT_ANALYZER.analyze(text).as_pair()
}

fn tokenize(text: &str) -> Vec<&str> {
    WORD_PATTERN.as_ref().map_or_else(
        || {
            text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
                .filter(|t| !t.is_empty())
                .collect()
        },
        |pattern| pattern.find_iter(text).map(|m| m.as_str()).collect(),
    )
}
