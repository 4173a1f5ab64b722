// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates parsing helpers, defaults, env overrides, validation, and .env loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::io::Write;
use vivebien::config::{Environment, LogLevel, WellnessConfig};

const OVERRIDABLE: &[&str] = &[
    "VIVEBIEN_ENV",
    "LOG_LEVEL",
    "VIVEBIEN_DEFAULT_TARGET_STEPS",
    "VIVEBIEN_DEFAULT_STEPS",
    "VIVEBIEN_DEFAULT_SLEEP_HOURS",
    "VIVEBIEN_DEFAULT_HEART_RATE",
    "VIVEBIEN_CHAT_MODEL",
    "VIVEBIEN_CHAT_TEMPERATURE",
    "VIVEBIEN_CHAT_MAX_TOKENS",
    "VIVEBIEN_CHAT_HISTORY_WINDOW",
    "VIVEBIEN_TTS_VOICE",
    "VIVEBIEN_STT_MODEL",
    "VIVEBIEN_STT_LANGUAGE",
    "VIVEBIEN_DEMO_DAYS",
    "VIVEBIEN_DEMO_SEED",
];

fn clear_env() {
    for key in OVERRIDABLE {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::Warn.to_tracing_level(), tracing::Level::WARN);
    assert_eq!(LogLevel::Debug.to_string(), "debug");
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert!(!Environment::Testing.is_production());
}

#[test]
fn test_default_config_values() {
    let config = WellnessConfig::default();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.defaults.target_steps, 8000);
    assert_eq!(config.defaults.biometrics.steps, 0);
    assert_eq!(config.defaults.biometrics.sleep_hours, 7.0);
    assert_eq!(config.defaults.biometrics.heart_rate, 70);
    assert_eq!(config.chat.model, "llama-3.3-70b-versatile");
    assert_eq!(config.chat.history_window, 10);
    assert_eq!(config.voice.voice, "es-ES-ElviraNeural");
    assert_eq!(config.voice.language, "es");
    assert_eq!(config.demo.history_days, 14);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = WellnessConfig::default();
    config.defaults.target_steps = 0;
    assert!(config.validate().is_err());

    let mut config = WellnessConfig::default();
    config.chat.model = "  ".to_owned();
    assert!(config.validate().is_err());

    let mut config = WellnessConfig::default();
    config.voice.voice = String::new();
    assert!(config.validate().is_err());

    let mut config = WellnessConfig::default();
    config.chat.temperature = 2.5;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("VIVEBIEN_CHAT_TEMPERATURE"));

    let mut config = WellnessConfig::default();
    config.demo.history_days = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_summary_lists_key_settings() {
    let summary = WellnessConfig::default().summary();
    assert!(summary.starts_with("ViveBien Configuration:"));
    assert!(summary.contains("Default Target Steps: 8000"));
    assert!(summary.contains("llama-3.3-70b-versatile"));
}

#[test]
#[serial]
fn test_from_current_env_without_overrides_matches_default() {
    clear_env();
    let config = WellnessConfig::from_current_env().unwrap();
    assert_eq!(config.defaults.target_steps, 8000);
    assert_eq!(config.chat.max_tokens, 500);
    assert_eq!(config.demo.seed, 42);
}

#[test]
#[serial]
fn test_env_overrides_are_parsed() {
    clear_env();
    env::set_var("VIVEBIEN_ENV", "production");
    env::set_var("VIVEBIEN_DEFAULT_TARGET_STEPS", "12000");
    env::set_var("VIVEBIEN_DEFAULT_SLEEP_HOURS", "7.5");
    env::set_var("VIVEBIEN_CHAT_MODEL", "llama-3.1-8b-instant");
    env::set_var("VIVEBIEN_CHAT_HISTORY_WINDOW", "4");
    env::set_var("VIVEBIEN_TTS_VOICE", "es-MX-DaliaNeural");
    env::set_var("VIVEBIEN_DEMO_SEED", "7");

    let config = WellnessConfig::from_current_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    assert_eq!(config.defaults.target_steps, 12_000);
    assert_eq!(config.defaults.biometrics.sleep_hours, 7.5);
    assert_eq!(config.chat.model, "llama-3.1-8b-instant");
    assert_eq!(config.chat.history_window, 4);
    assert_eq!(config.voice.voice, "es-MX-DaliaNeural");
    assert_eq!(config.demo.seed, 7);
}

#[test]
#[serial]
fn test_invalid_env_values_are_rejected() {
    clear_env();
    env::set_var("VIVEBIEN_CHAT_MAX_TOKENS", "muchos");
    let err = WellnessConfig::from_current_env().unwrap_err();
    clear_env();
    assert!(format!("{err:#}").contains("Invalid VIVEBIEN_CHAT_MAX_TOKENS value"));

    env::set_var("VIVEBIEN_DEFAULT_TARGET_STEPS", "0");
    let result = WellnessConfig::from_current_env();
    clear_env();
    assert!(result.is_err());

    env::set_var("VIVEBIEN_DEFAULT_HEART_RATE", "-5");
    let result = WellnessConfig::from_current_env();
    clear_env();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_from_env_file_loads_values() {
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "VIVEBIEN_DEFAULT_TARGET_STEPS=9500").unwrap();
    writeln!(file, "VIVEBIEN_STT_LANGUAGE=es-MX").unwrap();
    file.flush().unwrap();

    let config = WellnessConfig::from_env_file(file.path()).unwrap();
    clear_env();

    assert_eq!(config.defaults.target_steps, 9500);
    assert_eq!(config.voice.language, "es-MX");
}

#[test]
#[serial]
fn test_process_env_wins_over_env_file() {
    clear_env();
    env::set_var("VIVEBIEN_DEFAULT_TARGET_STEPS", "11000");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "VIVEBIEN_DEFAULT_TARGET_STEPS=9500").unwrap();
    file.flush().unwrap();

    let config = WellnessConfig::from_env_file(file.path()).unwrap();
    clear_env();

    assert_eq!(config.defaults.target_steps, 11_000);
}

#[test]
fn test_missing_env_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = WellnessConfig::from_env_file(&dir.path().join("absent.env"));
    assert!(result.is_err());
}
