// ABOUTME: Configuration module for the wellness engine runtime settings
// ABOUTME: Re-exports the environment-driven WellnessConfig and its sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module
//!
//! - **Environment**: runtime configuration from `VIVEBIEN_*` variables and `.env`
//! - **Recommendation**: composer thresholds and message templates, re-exported
//!   from the intelligence crate

/// Environment-driven configuration
pub mod environment;

pub use environment::{
    ChatConfig, DefaultsConfig, DemoConfig, Environment, LogLevel, VoiceConfig, WellnessConfig,
};
pub use vivebien_intelligence::config::{
    RecommendationConfig, RecommendationMessages, RecommendationThresholds,
};
