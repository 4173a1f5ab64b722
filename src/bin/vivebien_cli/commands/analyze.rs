// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Sentiment and recommendation commands for vivebien-cli
// ABOUTME: Scores free text and composes advice from biometrics given on the command line

use anyhow::Result;
use serde_json::json;
use tracing::debug;
use vivebien::intelligence::{RecommendationComposer, SentimentAnalyzer};
use vivebien::models::BiometricReading;

/// Print the sentiment label and score for `text`
pub fn sentiment(text: &str, as_json: bool) -> Result<()> {
    let analysis = SentimentAnalyzer::default().analyze(text);
    debug!(
        tokens = analysis.token_count,
        positive = analysis.positive_hits,
        negative = analysis.negative_hits,
        "Scored text"
    );

    if as_json {
        println!("{}", serde_json::to_string(&analysis)?);
    } else {
        println!(
            "{} ({:.3})",
            analysis.label.display_label(),
            analysis.score
        );
    }
    Ok(())
}

/// Compose and print a recommendation
pub fn recommend(
    text: &str,
    reading: &BiometricReading,
    target_steps: u32,
    as_json: bool,
) -> Result<()> {
    let composed = RecommendationComposer::new().compose(text, reading, target_steps);

    if as_json {
        let body = json!({
            "text": composed.text,
            "advisories": composed.advisories,
            "sentiment": composed.sentiment,
            "biometrics": composed.biometrics,
            "target_steps": composed.target_steps,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", composed.text);
    }
    Ok(())
}
