// ABOUTME: Environment configuration for defaults, chat, voice, and demo seeding
// ABOUTME: Loads .env via dotenvy, parses VIVEBIEN_* variables, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `VIVEBIEN_ENV` | `development` |
//! | `LOG_LEVEL` | `info` |
//! | `VIVEBIEN_DEFAULT_TARGET_STEPS` | `8000` |
//! | `VIVEBIEN_DEFAULT_STEPS` | `0` |
//! | `VIVEBIEN_DEFAULT_SLEEP_HOURS` | `7.0` |
//! | `VIVEBIEN_DEFAULT_HEART_RATE` | `70` |
//! | `VIVEBIEN_CHAT_MODEL` | `llama-3.3-70b-versatile` |
//! | `VIVEBIEN_CHAT_TEMPERATURE` | `0.7` |
//! | `VIVEBIEN_CHAT_MAX_TOKENS` | `500` |
//! | `VIVEBIEN_CHAT_HISTORY_WINDOW` | `10` |
//! | `VIVEBIEN_TTS_VOICE` | `es-ES-ElviraNeural` |
//! | `VIVEBIEN_STT_MODEL` | `whisper-large-v3` |
//! | `VIVEBIEN_STT_LANGUAGE` | `es` |
//! | `VIVEBIEN_DEMO_DAYS` | `14` |
//! | `VIVEBIEN_DEMO_SEED` | `42` |

use crate::constants::{biometric_defaults, chat, demo, targets, voice};
use crate::models::ResolvedBiometrics;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Seed used by the demo data when none is configured
pub const DEFAULT_DEMO_SEED: u64 = 42;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string, falling back to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(s)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string, falling back to `Development`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
            Self::Testing => f.write_str("testing"),
        }
    }
}

/// Values used when a user or reading leaves something unset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Step goal for users without a profile
    pub target_steps: u32,
    /// Fallbacks for missing biometric fields
    pub biometrics: ResolvedBiometrics,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            target_steps: targets::DEFAULT_TARGET_STEPS,
            biometrics: ResolvedBiometrics {
                steps: biometric_defaults::STEPS,
                sleep_hours: biometric_defaults::SLEEP_HOURS,
                heart_rate: biometric_defaults::HEART_RATE,
            },
        }
    }
}

/// Companion chat request settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Model name handed to the LLM provider
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token cap
    pub max_tokens: u32,
    /// Nucleus sampling
    pub top_p: f32,
    /// Prior turns forwarded to the model
    pub history_window: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: chat::DEFAULT_MODEL.to_owned(),
            temperature: chat::TEMPERATURE,
            max_tokens: chat::MAX_TOKENS,
            top_p: chat::TOP_P,
            history_window: chat::HISTORY_WINDOW,
        }
    }
}

/// Speech port settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Voice used by the speech synthesizer
    pub voice: String,
    /// Model used by the speech transcriber
    pub transcription_model: String,
    /// Language hint for transcription
    pub language: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            voice: voice::DEFAULT_VOICE.to_owned(),
            transcription_model: chat::DEFAULT_TRANSCRIPTION_MODEL.to_owned(),
            language: voice::DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

/// Demo data seeding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Days of synthetic history per persona
    pub history_days: u32,
    /// Simulator seed
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            history_days: demo::HISTORY_DAYS,
            seed: DEFAULT_DEMO_SEED,
        }
    }
}

/// Runtime configuration for the wellness engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WellnessConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Fallback values
    pub defaults: DefaultsConfig,
    /// Companion chat settings
    pub chat: ChatConfig,
    /// Speech settings
    pub voice: VoiceConfig,
    /// Demo seeding
    pub demo: DemoConfig,
}

impl WellnessConfig {
    /// Load `.env` if present, then read configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value or the
    /// result fails [`validate`](Self::validate)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        Self::from_current_env()
    }

    /// Load variables from a specific `.env` file, then read the environment
    ///
    /// Variables already present in the process environment take precedence
    /// over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value is invalid
    pub fn from_env_file(path: &Path) -> Result<Self> {
        dotenvy::from_path(path)
            .with_context(|| format!("Failed to load env file {}", path.display()))?;
        Self::from_current_env()
    }

    /// Read configuration from the process environment only
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value or the
    /// result fails validation
    pub fn from_current_env() -> Result<Self> {
        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                "VIVEBIEN_ENV",
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or("LOG_LEVEL", "info")),

            defaults: DefaultsConfig {
                target_steps: env_var_or(
                    "VIVEBIEN_DEFAULT_TARGET_STEPS",
                    &targets::DEFAULT_TARGET_STEPS.to_string(),
                )
                .parse()
                .context("Invalid VIVEBIEN_DEFAULT_TARGET_STEPS value")?,
                biometrics: ResolvedBiometrics {
                    steps: env_var_or(
                        "VIVEBIEN_DEFAULT_STEPS",
                        &biometric_defaults::STEPS.to_string(),
                    )
                    .parse()
                    .context("Invalid VIVEBIEN_DEFAULT_STEPS value")?,
                    sleep_hours: env_var_or(
                        "VIVEBIEN_DEFAULT_SLEEP_HOURS",
                        &biometric_defaults::SLEEP_HOURS.to_string(),
                    )
                    .parse()
                    .context("Invalid VIVEBIEN_DEFAULT_SLEEP_HOURS value")?,
                    heart_rate: env_var_or(
                        "VIVEBIEN_DEFAULT_HEART_RATE",
                        &biometric_defaults::HEART_RATE.to_string(),
                    )
                    .parse()
                    .context("Invalid VIVEBIEN_DEFAULT_HEART_RATE value")?,
                },
            },

            chat: ChatConfig {
                model: env_var_or("VIVEBIEN_CHAT_MODEL", chat::DEFAULT_MODEL),
                temperature: env_var_or("VIVEBIEN_CHAT_TEMPERATURE", &chat::TEMPERATURE.to_string())
                    .parse()
                    .context("Invalid VIVEBIEN_CHAT_TEMPERATURE value")?,
                max_tokens: env_var_or("VIVEBIEN_CHAT_MAX_TOKENS", &chat::MAX_TOKENS.to_string())
                    .parse()
                    .context("Invalid VIVEBIEN_CHAT_MAX_TOKENS value")?,
                top_p: chat::TOP_P,
                history_window: env_var_or(
                    "VIVEBIEN_CHAT_HISTORY_WINDOW",
                    &chat::HISTORY_WINDOW.to_string(),
                )
                .parse()
                .context("Invalid VIVEBIEN_CHAT_HISTORY_WINDOW value")?,
            },

            voice: VoiceConfig {
                voice: env_var_or("VIVEBIEN_TTS_VOICE", voice::DEFAULT_VOICE),
                transcription_model: env_var_or(
                    "VIVEBIEN_STT_MODEL",
                    chat::DEFAULT_TRANSCRIPTION_MODEL,
                ),
                language: env_var_or("VIVEBIEN_STT_LANGUAGE", voice::DEFAULT_LANGUAGE),
            },

            demo: DemoConfig {
                history_days: env_var_or("VIVEBIEN_DEMO_DAYS", &demo::HISTORY_DAYS.to_string())
                    .parse()
                    .context("Invalid VIVEBIEN_DEMO_DAYS value")?,
                seed: env_var_or("VIVEBIEN_DEMO_SEED", &DEFAULT_DEMO_SEED.to_string())
                    .parse()
                    .context("Invalid VIVEBIEN_DEMO_SEED value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero step target, an empty model or voice name,
    /// or a temperature outside `[0, 2]`
    pub fn validate(&self) -> Result<()> {
        if self.defaults.target_steps == 0 {
            return Err(anyhow::anyhow!(
                "VIVEBIEN_DEFAULT_TARGET_STEPS must be greater than zero"
            ));
        }

        if self.chat.model.trim().is_empty() {
            return Err(anyhow::anyhow!("VIVEBIEN_CHAT_MODEL cannot be empty"));
        }

        if self.voice.transcription_model.trim().is_empty() {
            return Err(anyhow::anyhow!("VIVEBIEN_STT_MODEL cannot be empty"));
        }

        if self.voice.voice.trim().is_empty() {
            return Err(anyhow::anyhow!("VIVEBIEN_TTS_VOICE cannot be empty"));
        }

        if !(0.0..=2.0).contains(&self.chat.temperature) {
            return Err(anyhow::anyhow!(
                "VIVEBIEN_CHAT_TEMPERATURE must be between 0.0 and 2.0"
            ));
        }

        if self.demo.history_days == 0 {
            warn!("VIVEBIEN_DEMO_DAYS is 0; demo personas will have no history");
        }

        Ok(())
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "ViveBien Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Default Target Steps: {}\n\
             - Default Biometrics: {} steps, {} h sleep, {} bpm\n\
             - Chat Model: {} (temperature {}, max tokens {}, history {})\n\
             - Voice: {}\n\
             - Transcription: {} ({})\n\
             - Demo: {} days, seed {}",
            self.environment,
            self.log_level,
            self.defaults.target_steps,
            self.defaults.biometrics.steps,
            self.defaults.biometrics.sleep_hours,
            self.defaults.biometrics.heart_rate,
            self.chat.model,
            self.chat.temperature,
            self.chat.max_tokens,
            self.chat.history_window,
            self.voice.voice,
            self.voice.transcription_model,
            self.voice.language,
            self.demo.history_days,
            self.demo.seed,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
