// ABOUTME: Wellness intelligence engine: lexicon sentiment scoring and advisory composition
// ABOUTME: Stateless pure functions consumed by the service layer and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # ViveBien Intelligence
//!
//! Two pure components:
//!
//! - [`sentiment`]: classifies free text as positive, negative, or neutral by
//!   prefix-matching tokens against a fixed Spanish stem lexicon.
//! - [`recommendation_engine`]: turns the latest biometrics plus the text's
//!   sentiment into a short sequence of canned advisory sentences.
//!
//! Both are reentrant and hold no shared mutable state, so they can be called
//! from any number of tasks without synchronization.
//!
//! ```
//! use vivebien_core::models::{BiometricReading, Sentiment};
//! use vivebien_intelligence::{compose_recommendation, score_sentiment};
//!
//! let (label, score) = score_sentiment("me siento muy feliz y tranquilo");
//! assert_eq!(label, Sentiment::Positive);
//! assert!(score > 0.05);
//!
//! let advice = compose_recommendation(
//!     "me siento genial",
//!     &BiometricReading::new(15_000, 8.5, 65),
//!     8000,
//! );
//! assert!(advice.starts_with("Tu sueño está en buen rango."));
//! ```

/// Rule thresholds and message templates
pub mod config;

/// Advisory composition from biometrics and sentiment
pub mod recommendation_engine;

/// Lexicon-based sentiment scoring
pub mod sentiment;

pub use config::RecommendationConfig;
pub use recommendation_engine::{
    compose_recommendation, compose_recommendation_default_target, AdvisoryKind, AdvisoryRule, ComposedRecommendation,
    RecommendationComposer,
};
pub use sentiment::{score_sentiment, Lexicon, SentimentAnalysis, SentimentAnalyzer};
