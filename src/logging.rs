// ABOUTME: Logging configuration and structured logging helpers for the wellness engine
// ABOUTME: Sets up tracing-subscriber output formats and records mood, recommendation, and adapter events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Structured logging setup
//!
//! [`LoggingConfig::from_env`] reads `RUST_LOG`, `LOG_FORMAT` (`json`, `pretty`
//! or `compact`) and the optional `LOG_INCLUDE_LOCATION` / `LOG_INCLUDE_THREAD`
//! switches. [`LoggingConfig::with_fallback_level`] applies the configured
//! `LOG_LEVEL` when `RUST_LOG` is unset. [`AppLogger`] keeps field names consistent across the service so
//! log pipelines can filter on `user.id`, `mood.sentiment` and friends.

use crate::config::LogLevel;
use crate::constants::service_names;
use crate::models::Sentiment;
use anyhow::{Context, Result};
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment label (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for production log shipping
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; unknown values fall back to pretty
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: service_names::VIVEBIEN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = env::var("LOG_FORMAT").map_or(LogFormat::Pretty, |v| LogFormat::parse(&v));
        let environment = env::var("VIVEBIEN_ENV")
            .or_else(|_| env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "development".into());

        // Production always carries location and thread fields
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::VIVEBIEN.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Apply the configured `LOG_LEVEL` unless `RUST_LOG` already set the level
    #[must_use]
    pub fn with_fallback_level(self, level: LogLevel) -> Self {
        if env::var_os("RUST_LOG").is_some() {
            self
        } else {
            self.with_level(level.to_string())
        }
    }

    /// Build the env filter for this configuration
    ///
    /// `RUST_LOG` wins when it is set; otherwise the configured level applies.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(&self.level),
            |directive| EnvFilter::new(directive),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();
                registry
                    .with(layer)
                    .try_init()
                    .context("Failed to install JSON log subscriber")?;
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr);
                registry
                    .with(layer)
                    .try_init()
                    .context("Failed to install log subscriber")?;
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr);
                registry
                    .with(layer)
                    .try_init()
                    .context("Failed to install compact log subscriber")?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "thread": self.include_thread
            }
        });
        tracing::debug!("Logging initialized: {}", summary);
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log an analyzed mood entry; the text itself is never logged
    pub fn log_mood_logged(user_id: &str, sentiment: Sentiment, score: f64) {
        info!(
            user.id = %user_id,
            mood.sentiment = %sentiment,
            mood.score = score,
            "Mood entry recorded"
        );
    }

    /// Log a recorded biometric sample
    pub fn log_biometrics_recorded(user_id: &str, date: &str, history_len: usize) {
        info!(
            user.id = %user_id,
            biometrics.date = %date,
            biometrics.history_len = history_len,
            "Biometric sample recorded"
        );
    }

    /// Log a recommendation handed back to a user
    pub fn log_recommendation_issued(
        user_id: &str,
        target_steps: u32,
        advisory_count: usize,
        voiced: bool,
    ) {
        info!(
            user.id = %user_id,
            recommendation.target_steps = target_steps,
            recommendation.advisories = advisory_count,
            recommendation.voiced = voiced,
            "Recommendation issued"
        );
    }

    /// Log account events (registration, login, profile update)
    pub fn log_account_event(user_id: &str, event: &str, success: bool) {
        info!(
            user.id = %user_id,
            account.event = %event,
            account.success = success,
            "Account event"
        );
    }

    /// Log a failed call into an external adapter (LLM, TTS, STT)
    pub fn log_adapter_failure(adapter: &str, operation: &str, reason: &str) {
        warn!(
            adapter.name = %adapter,
            adapter.operation = %operation,
            adapter.reason = %reason,
            "External adapter call failed"
        );
    }
}
