// ABOUTME: Tests for the rule-based recommendation composer
// ABOUTME: Verifies fragment order, threshold boundaries, defaults, and the habits fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used)]

use vivebien_core::models::BiometricReading;
use vivebien_intelligence::config::RecommendationMessages;
use vivebien_intelligence::{
    compose_recommendation, compose_recommendation_default_target, AdvisoryKind, AdvisoryRule,
    RecommendationComposer, RecommendationConfig,
};

fn messages() -> RecommendationMessages {
    RecommendationMessages::default()
}

fn advisories(text: &str, reading: &BiometricReading, target: u32) -> Vec<AdvisoryKind> {
    RecommendationComposer::new()
        .compose(text, reading, target)
        .advisories
}

#[test]
fn test_struggling_user_gets_all_cautions_in_order() {
    let reading = BiometricReading::new(2000, 5.0, 100);
    let text = compose_recommendation("me siento fatal", &reading, 8000);

    let low_sleep = text.find(&messages().low_sleep).unwrap();
    let low_activity = text.find("Tu nivel de actividad es bajo").unwrap();
    let heart_rate = text.find(&messages().elevated_heart_rate).unwrap();
    let support = text.find(&messages().emotional_support).unwrap();
    assert!(low_sleep < low_activity);
    assert!(low_activity < heart_rate);
    assert!(heart_rate < support);

    assert_eq!(
        advisories("me siento fatal", &reading, 8000),
        vec![
            AdvisoryKind::LowSleep,
            AdvisoryKind::LowActivity,
            AdvisoryKind::ElevatedHeartRate,
            AdvisoryKind::EmotionalSupport,
        ]
    );
}

#[test]
fn test_thriving_user_gets_praise_without_heart_rate_caution() {
    let reading = BiometricReading::new(15_000, 8.5, 65);
    let text = compose_recommendation("me siento genial", &reading, 8000);

    let expected = [
        messages().good_sleep,
        messages().good_activity,
        messages().encouragement,
    ]
    .join(" ");
    assert_eq!(text, expected);
    assert!(!text.contains(&messages().elevated_heart_rate));
}

#[test]
fn test_fragments_joined_with_single_spaces() {
    let reading = BiometricReading::new(15_000, 8.5, 65);
    let text = compose_recommendation("me siento genial", &reading, 8000);
    assert!(!text.contains("  "));
    assert!(!text.starts_with(' '));
    assert!(!text.ends_with(' '));
}

#[test]
fn test_sleep_boundary_six_and_a_half_gives_no_sleep_fragment() {
    let kinds = advisories("", &BiometricReading::new(10_000, 6.5, 70), 8000);
    assert_eq!(kinds, vec![AdvisoryKind::GoodActivity]);
}

#[test]
fn test_sleep_boundary_eight_is_good_sleep_only() {
    let kinds = advisories("", &BiometricReading::new(10_000, 8.0, 70), 8000);
    assert_eq!(kinds, vec![AdvisoryKind::GoodSleep, AdvisoryKind::GoodActivity]);
}

#[test]
fn test_sleep_just_below_low_threshold() {
    let kinds = advisories("", &BiometricReading::new(10_000, 6.49, 70), 8000);
    assert_eq!(kinds[0], AdvisoryKind::LowSleep);
}

#[test]
fn test_activity_boundary_uses_strict_less_than() {
    // 0.6 * 8000 = 4800
    let at_floor = advisories("", &BiometricReading::new(4800, 7.0, 70), 8000);
    assert_eq!(at_floor, vec![AdvisoryKind::GoodActivity]);

    let below_floor = advisories("", &BiometricReading::new(4799, 7.0, 70), 8000);
    assert_eq!(below_floor, vec![AdvisoryKind::LowActivity]);
}

#[test]
fn test_heart_rate_boundary() {
    let at_limit = advisories("", &BiometricReading::new(10_000, 7.0, 95), 8000);
    assert!(!at_limit.contains(&AdvisoryKind::ElevatedHeartRate));

    let above_limit = advisories("", &BiometricReading::new(10_000, 7.0, 96), 8000);
    assert_eq!(
        above_limit,
        vec![AdvisoryKind::GoodActivity, AdvisoryKind::ElevatedHeartRate]
    );
}

#[test]
fn test_low_activity_mentions_target() {
    let text = compose_recommendation("", &BiometricReading::new(1000, 7.0, 70), 12_000);
    assert!(text.contains("12000 pasos"));
    assert!(!text.contains("{target_steps}"));
}

#[test]
fn test_target_changes_activity_verdict() {
    let reading = BiometricReading::new(6000, 7.0, 70);
    assert_eq!(
        advisories("", &reading, 8000),
        vec![AdvisoryKind::GoodActivity]
    );
    assert_eq!(
        advisories("", &reading, 14_000),
        vec![AdvisoryKind::LowActivity]
    );
}

#[test]
fn test_missing_fields_use_defaults() {
    // sleep 7 (no fragment), steps 0 (low), heart rate 70 (no caution)
    let composed = RecommendationComposer::new().compose("", &BiometricReading::empty(), 8000);
    assert_eq!(composed.advisories, vec![AdvisoryKind::LowActivity]);
    assert_eq!(composed.biometrics.steps, 0);
    assert!((composed.biometrics.sleep_hours - 7.0).abs() < f64::EPSILON);
    assert_eq!(composed.biometrics.heart_rate, 70);
}

#[test]
fn test_partial_reading_only_fills_missing_fields() {
    let reading = BiometricReading {
        sleep_hours: Some(4.0),
        ..BiometricReading::empty()
    };
    let kinds = advisories("", &reading, 8000);
    assert_eq!(kinds, vec![AdvisoryKind::LowSleep, AdvisoryKind::LowActivity]);
}

#[test]
fn test_negative_sleep_is_accepted_as_is() {
    let kinds = advisories("", &BiometricReading::new(9000, -1.0, 70), 8000);
    assert_eq!(kinds[0], AdvisoryKind::LowSleep);
}

#[test]
fn test_neutral_text_adds_no_sentiment_fragment() {
    let kinds = advisories(
        "hoy fui al mercado",
        &BiometricReading::new(9000, 7.0, 70),
        8000,
    );
    assert_eq!(kinds, vec![AdvisoryKind::GoodActivity]);
}

#[test]
fn test_fallback_when_no_rule_fires() {
    let composer = RecommendationComposer::new().with_rules([AdvisoryRule::Sleep]);
    let composed = composer.compose("", &BiometricReading::new(0, 7.0, 70), 8000);
    assert_eq!(composed.advisories, vec![AdvisoryKind::GeneralHabits]);
    assert_eq!(composed.text, messages().general_habits);
}

#[test]
fn test_custom_thresholds_and_messages() {
    let mut config = RecommendationConfig::default();
    config.thresholds.elevated_heart_rate = 80;
    config.messages.elevated_heart_rate = "Pulso alto.".to_owned();
    let composer = RecommendationComposer::with_config(config);

    let composed = composer.compose("", &BiometricReading::new(9000, 7.0, 85), 8000);
    assert_eq!(composed.text, format!("{} Pulso alto.", messages().good_activity));
}

#[test]
fn test_default_target_is_eight_thousand() {
    let reading = BiometricReading::new(4799, 7.0, 70);
    assert_eq!(
        compose_recommendation_default_target("", &reading),
        compose_recommendation("", &reading, 8000)
    );
}

#[test]
fn test_idempotent() {
    let reading = BiometricReading::new(3000, 5.5, 99);
    let first = compose_recommendation("estoy agotada", &reading, 8000);
    let second = compose_recommendation("estoy agotada", &reading, 8000);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_composed_recommendation_carries_sentiment() {
    let composed = RecommendationComposer::new().compose(
        "estoy agotada y ansiosa",
        &BiometricReading::new(9000, 7.0, 70),
        8000,
    );
    assert!(composed.sentiment.score < -0.05);
    assert_eq!(composed.target_steps, 8000);
    let json = serde_json::to_value(&composed).unwrap();
    assert_eq!(json["advisories"][1], "emotional_support");
}
