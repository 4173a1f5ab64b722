// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default targets, biometric fallbacks, sentiment thresholds, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. Values that users can override at runtime live in
//! `vivebien::config`; the numbers here are the documented defaults.

/// Per-user goal defaults
pub mod targets {
    /// Daily step goal assigned to new profiles
    pub const DEFAULT_TARGET_STEPS: u32 = 8000;
}

/// Fallback values applied when a biometric reading omits a field
pub mod biometric_defaults {
    /// Steps assumed when the reading has no step count
    pub const STEPS: u32 = 0;
    /// Sleep hours assumed when the reading has no sleep duration
    pub const SLEEP_HOURS: f64 = 7.0;
    /// Heart rate (bpm) assumed when the reading has no heart rate
    pub const HEART_RATE: u32 = 70;
}

/// Sentiment classification thresholds
pub mod sentiment {
    /// Scores strictly above this are positive
    pub const POSITIVE_THRESHOLD: f64 = 0.05;
    /// Scores strictly below this are negative
    pub const NEGATIVE_THRESHOLD: f64 = -0.05;
}

/// Recommendation rule thresholds
pub mod recommendation {
    /// Sleep below this many hours triggers the low-sleep advice
    pub const LOW_SLEEP_HOURS: f64 = 6.5;
    /// Sleep at or above this many hours triggers the good-sleep advice
    pub const GOOD_SLEEP_HOURS: f64 = 8.0;
    /// Fraction of the step target below which activity counts as low
    pub const LOW_ACTIVITY_RATIO: f64 = 0.6;
    /// Heart rate (bpm) above which the caution advice fires
    pub const ELEVATED_HEART_RATE: u32 = 95;
}

/// Companion chat defaults
pub mod chat {
    /// Default chat model identifier
    pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
    /// Default transcription model identifier
    pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3";
    /// Sampling temperature for companion replies
    pub const TEMPERATURE: f32 = 0.7;
    /// Maximum tokens generated per companion reply
    pub const MAX_TOKENS: u32 = 500;
    /// Nucleus sampling parameter for companion replies
    pub const TOP_P: f32 = 0.9;
    /// Number of previous turns forwarded to the model
    pub const HISTORY_WINDOW: usize = 10;
    /// Placeholder rendered for unknown biometric values in prompts
    pub const UNAVAILABLE: &str = "No disponible";
}

/// Voice adapter defaults
pub mod voice {
    /// Default synthesis voice (warm Spanish female voice)
    pub const DEFAULT_VOICE: &str = "es-ES-ElviraNeural";
    /// Default transcription language
    pub const DEFAULT_LANGUAGE: &str = "es";
}

/// Demo data generation defaults
pub mod demo {
    /// Days of synthetic history created per demo persona
    pub const HISTORY_DAYS: u32 = 14;
    /// Shared password for demo accounts
    pub const PASSWORD: &str = "password123";
}

/// Service identity
pub mod service_names {
    /// Service name used in structured logs
    pub const VIVEBIEN: &str = "vivebien";
}
