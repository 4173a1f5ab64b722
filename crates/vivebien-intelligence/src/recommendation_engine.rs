// ABOUTME: Rule-based advisory composer combining latest biometrics with text sentiment
// ABOUTME: Evaluates sleep, activity, heart-rate, and sentiment rules in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recommendation composer
//!
//! Rules run in a fixed order and each contributes at most one sentence:
//!
//! 1. Sleep: `< 6.5` h low, `>= 8` h good, anything between says nothing.
//! 2. Activity: below `0.6 * target_steps` low, otherwise good. Always fires.
//! 3. Heart rate: above 95 bpm adds a caution.
//! 4. Sentiment: negative adds support, positive adds encouragement.
//!
//! If nothing fired, a generic habits sentence is used. The sentences are
//! joined with single spaces in rule order.

use crate::config::{fill_target_steps, RecommendationConfig};
use crate::sentiment::{SentimentAnalysis, SentimentAnalyzer};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use vivebien_core::constants::targets::DEFAULT_TARGET_STEPS;
use vivebien_core::models::{BiometricReading, ResolvedBiometrics, Sentiment};

static DEFAULT_COMPOSER: LazyLock<RecommendationComposer> =
    LazyLock::new(RecommendationComposer::new);

/// One advisory sentence the composer can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// Slept less than recommended
    LowSleep,
    /// Sleep in a good range
    GoodSleep,
    /// Steps below the activity threshold
    LowActivity,
    /// Steps at or above the activity threshold
    GoodActivity,
    /// Heart rate above the caution threshold
    ElevatedHeartRate,
    /// Negative mood detected
    EmotionalSupport,
    /// Positive mood detected
    Encouragement,
    /// Nothing else applied
    GeneralHabits,
}

/// A rule evaluated by the composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryRule {
    /// Low or good sleep
    Sleep,
    /// Low or good activity relative to the step target
    Activity,
    /// Elevated heart rate caution
    HeartRate,
    /// Mood-based support or encouragement
    Sentiment,
}

impl AdvisoryRule {
    /// Rules in their documented evaluation order
    pub const DEFAULT_ORDER: [Self; 4] = [
        Self::Sleep,
        Self::Activity,
        Self::HeartRate,
        Self::Sentiment,
    ];
}

/// Composer output with the reasoning kept alongside the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedRecommendation {
    /// Sentences joined with single spaces
    pub text: String,
    /// Advisories in the order they were appended
    pub advisories: Vec<AdvisoryKind>,
    /// Sentiment of the user text
    pub sentiment: SentimentAnalysis,
    /// Biometrics after defaults were applied
    pub biometrics: ResolvedBiometrics,
    /// Step goal the activity rule compared against
    pub target_steps: u32,
}

/// Composes advisory text from biometrics and mood
#[derive(Debug, Clone)]
pub struct RecommendationComposer {
    analyzer: SentimentAnalyzer,
    config: RecommendationConfig,
    rules: Vec<AdvisoryRule>,
}

impl Default for RecommendationComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationComposer {
    /// Composer with the default lexicon, thresholds, messages, and rules
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RecommendationConfig::default())
    }

    /// Composer with custom thresholds and messages
    #[must_use]
    pub fn with_config(config: RecommendationConfig) -> Self {
        Self {
            analyzer: SentimentAnalyzer::default(),
            config,
            rules: AdvisoryRule::DEFAULT_ORDER.to_vec(),
        }
    }

    /// Replace the sentiment analyzer
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: SentimentAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Replace the rule list; rules run in the given order
    #[must_use]
    pub fn with_rules(mut self, rules: impl Into<Vec<AdvisoryRule>>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Sentiment analyzer used for the user text
    #[must_use]
    pub const fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Compose a recommendation for `user_text` and the latest biometrics
    #[must_use]
    pub fn compose(
        &self,
        user_text: &str,
        latest_biometrics: &BiometricReading,
        target_steps: u32,
    ) -> ComposedRecommendation {
        let sentiment = self.analyzer.analyze(user_text);
        let biometrics = latest_biometrics.resolve();

        let mut advisories: Vec<AdvisoryKind> = self
            .rules
            .iter()
            .filter_map(|rule| self.evaluate(*rule, &biometrics, target_steps, sentiment.label))
            .collect();
        if advisories.is_empty() {
            advisories.push(AdvisoryKind::GeneralHabits);
        }

        let text = advisories
            .iter()
            .map(|kind| self.render(*kind, target_steps))
            .collect::<Vec<_>>()
            .join(" ");

        ComposedRecommendation {
            text,
            advisories,
            sentiment,
            biometrics,
            target_steps,
        }
    }

    /// Sentence for a single advisory
    #[must_use]
    pub fn render(&self, kind: AdvisoryKind, target_steps: u32) -> String {
        let messages = &self.config.messages;
        match kind {
            AdvisoryKind::LowSleep => messages.low_sleep.clone(),
            AdvisoryKind::GoodSleep => messages.good_sleep.clone(),
            AdvisoryKind::LowActivity => fill_target_steps(&messages.low_activity, target_steps),
            AdvisoryKind::GoodActivity => messages.good_activity.clone(),
            AdvisoryKind::ElevatedHeartRate => messages.elevated_heart_rate.clone(),
            AdvisoryKind::EmotionalSupport => messages.emotional_support.clone(),
            AdvisoryKind::Encouragement => messages.encouragement.clone(),
            AdvisoryKind::GeneralHabits => messages.general_habits.clone(),
        }
    }

    fn evaluate(
        &self,
        rule: AdvisoryRule,
        biometrics: &ResolvedBiometrics,
        target_steps: u32,
        sentiment: Sentiment,
    ) -> Option<AdvisoryKind> {
        let thresholds = &self.config.thresholds;
        match rule {
            AdvisoryRule::Sleep => {
                if biometrics.sleep_hours < thresholds.low_sleep_hours {
                    Some(AdvisoryKind::LowSleep)
                } else if biometrics.sleep_hours >= thresholds.good_sleep_hours {
                    Some(AdvisoryKind::GoodSleep)
                } else {
                    None
                }
            }
            AdvisoryRule::Activity => {
                let floor = f64::from(target_steps) * thresholds.low_activity_ratio;
                if f64::from(biometrics.steps) < floor {
                    Some(AdvisoryKind::LowActivity)
                } else {
                    Some(AdvisoryKind::GoodActivity)
                }
            }
            AdvisoryRule::HeartRate => (biometrics.heart_rate > thresholds.elevated_heart_rate)
                .then_some(AdvisoryKind::ElevatedHeartRate),
            AdvisoryRule::Sentiment => match sentiment {
                Sentiment::Negative => Some(AdvisoryKind::EmotionalSupport),
                Sentiment::Positive => Some(AdvisoryKind::Encouragement),
                Sentiment::Neutral => None,
            },
        }
    }
}

/// Compose advisory text with the default configuration
///
/// `target_steps` is usually the user's profile goal; pass
/// [`DEFAULT_TARGET_STEPS`] (8000) when none is configured.
#[must_use]
pub fn compose_recommendation(
    user_text: &str,
    latest_biometrics: &BiometricReading,
    target_steps: u32,
) -> String {
    DEFAULT_COMPOSER
        .compose(user_text, latest_biometrics, target_steps)
        .text
}

/// [`compose_recommendation`] with the default 8000-step goal
#[must_use]
pub fn compose_recommendation_default_target(
    user_text: &str,
    latest_biometrics: &BiometricReading,
) -> String {
    compose_recommendation(user_text, latest_biometrics, DEFAULT_TARGET_STEPS)
}
