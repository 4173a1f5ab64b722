// ABOUTME: Tests for the lexicon sentiment scorer used on mood entries
// ABOUTME: Covers thresholds, empty input, prefix over-matching, and accented tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use vivebien_core::models::Sentiment;
use vivebien_intelligence::{score_sentiment, Lexicon, SentimentAnalyzer};

#[test]
fn test_positive_text() {
    let (label, score) = score_sentiment("me siento muy feliz y tranquilo");
    assert_eq!(label, Sentiment::Positive);
    assert!(score > 0.05);
    assert!((score - 2.0 / 6.0).abs() < 1e-12);
}

#[test]
fn test_negative_text() {
    let (label, score) = score_sentiment("estoy agotada y ansiosa");
    assert_eq!(label, Sentiment::Negative);
    assert!(score < -0.05);
    assert!((score + 0.5).abs() < 1e-12);
}

#[test]
fn test_empty_text_is_neutral_zero() {
    assert_eq!(score_sentiment(""), (Sentiment::Neutral, 0.0));
}

#[test]
fn test_whitespace_only_is_neutral_zero() {
    assert_eq!(score_sentiment("   \n\t "), (Sentiment::Neutral, 0.0));
}

#[test]
fn test_no_matching_stems_is_neutral_zero() {
    assert_eq!(
        score_sentiment("hoy fui al mercado con mi hermano"),
        (Sentiment::Neutral, 0.0)
    );
}

#[test]
fn test_uppercase_and_accents_are_normalized() {
    let analysis = SentimentAnalyzer::default().analyze("ME SIENTO ENÉRGICA");
    assert_eq!(analysis.token_count, 3);
    assert_eq!(analysis.positive_hits, 1);
    assert_eq!(analysis.label, Sentiment::Positive);
}

#[test]
fn test_prefix_matching_over_matches_longer_words() {
    // "mal" is a negative stem, so "malestar" counts as negative
    let analysis = SentimentAnalyzer::default().analyze("malestar general");
    assert_eq!(analysis.negative_hits, 1);
    assert_eq!(analysis.positive_hits, 0);
    assert_eq!(analysis.label, Sentiment::Negative);
}

#[test]
fn test_mixed_text_cancels_out() {
    let (label, score) = score_sentiment("estoy bien pero cansado");
    assert_eq!(label, Sentiment::Neutral);
    assert_eq!(score, 0.0);
}

#[test]
fn test_score_exactly_at_threshold_is_neutral() {
    // 1 positive hit in 20 tokens scores exactly 0.05, which is not > 0.05
    let text = format!("feliz {}", ["uno"; 19].join(" "));
    let analysis = SentimentAnalyzer::default().analyze(&text);
    assert_eq!(analysis.token_count, 20);
    assert_eq!(analysis.score, 0.05);
    assert_eq!(analysis.label, Sentiment::Neutral);

    let text = format!("triste {}", ["uno"; 19].join(" "));
    let (label, score) = score_sentiment(&text);
    assert_eq!(score, -0.05);
    assert_eq!(label, Sentiment::Neutral);
}

#[test]
fn test_score_just_above_threshold_is_positive() {
    // 1 positive hit in 19 tokens is about 0.0526
    let text = format!("feliz {}", ["uno"; 18].join(" "));
    assert_eq!(score_sentiment(&text).0, Sentiment::Positive);
}

#[test]
fn test_idempotent() {
    let text = "Hoy me siento estresado pero contento";
    assert_eq!(score_sentiment(text), score_sentiment(text));
}

#[test]
fn test_custom_lexicon() {
    let analyzer = SentimentAnalyzer::with_lexicon(Lexicon::new(&["happy"], &["sad"]));
    let analysis = analyzer.analyze("happy happy sad");
    assert_eq!(analysis.positive_hits, 2);
    assert_eq!(analysis.negative_hits, 1);
    assert_eq!(analysis.label, Sentiment::Positive);
    assert_eq!(analyzer.lexicon().positive, vec!["happy".to_owned()]);
}

#[test]
fn test_analysis_serializes_lowercase_label() {
    let analysis = SentimentAnalyzer::default().analyze("estoy triste");
    let json = serde_json::to_value(analysis).unwrap();
    assert_eq!(json["label"], "negative");
    assert_eq!(json["negative_hits"], 1);
}
