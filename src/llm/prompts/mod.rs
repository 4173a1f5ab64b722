// ABOUTME: Aura companion system prompt loaded at compile time
// ABOUTME: Interpolates the user's biometrics, step goal, and mood into the persona prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # System Prompts
//!
//! The persona prompt lives in a markdown file next to this module so it can
//! be edited without touching code. Placeholders use `{name}` syntax.

use crate::constants::chat::UNAVAILABLE;
use crate::models::BiometricReading;

/// Aura wellness companion system prompt template
pub const AURA_SYSTEM_PROMPT: &str = include_str!("aura_system.md");

/// Render the Aura prompt for one user
///
/// Missing biometric fields render as "No disponible" instead of a default
/// value, so the model never sees invented numbers.
#[must_use]
pub fn render_aura_prompt(biometrics: &BiometricReading, target_steps: u32, mood: &str) -> String {
    AURA_SYSTEM_PROMPT
        .replace("{steps}", &display_or_unavailable(biometrics.steps))
        .replace(
            "{sleep_hours}",
            &biometrics
                .sleep_hours
                .map_or_else(|| UNAVAILABLE.to_owned(), |hours| format!("{hours:.1}")),
        )
        .replace("{heart_rate}", &display_or_unavailable(biometrics.heart_rate))
        .replace("{target_steps}", &target_steps.to_string())
        .replace("{mood}", mood)
}

fn display_or_unavailable<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_owned(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_every_placeholder() {
        for placeholder in ["{steps}", "{sleep_hours}", "{heart_rate}", "{target_steps}", "{mood}"] {
            assert!(AURA_SYSTEM_PROMPT.contains(placeholder), "{placeholder}");
        }
    }

    #[test]
    fn test_render_leaves_no_placeholders() {
        let prompt = render_aura_prompt(&BiometricReading::new(5000, 7.5, 72), 8000, "neutral");
        assert!(!prompt.contains('{'));
        assert!(prompt.contains("Pasos de hoy: 5000"));
        assert!(prompt.contains("Horas de sueño: 7.5"));
    }

    #[test]
    fn test_whole_sleep_hours_keep_one_decimal() {
        let prompt = render_aura_prompt(&BiometricReading::new(5000, 7.0, 72), 8000, "neutral");
        assert!(prompt.contains("Horas de sueño: 7.0\n"));
    }
}
