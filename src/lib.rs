// ABOUTME: Main library entry point for the ViveBien wellness engine
// ABOUTME: Wires storage, accounts, companion chat, voice ports, and simulation around the intelligence core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # ViveBien
//!
//! A wellness-tracking backend: users record biometrics and free-text mood
//! entries, receive rule-based recommendations, and can chat with the "Aura"
//! companion persona.
//!
//! ## Features
//!
//! - **Sentiment scoring**: Spanish lexicon scorer with a numeric score
//! - **Recommendations**: sleep, activity, heart-rate and mood advisories
//! - **Storage ports**: append-only biometric and mood history, profiles
//! - **Companion chat**: Aura persona prompt and an LLM provider port
//! - **Voice ports**: speech synthesis and transcription with explicit outcomes
//! - **Simulation**: deterministic synthetic biometrics and demo personas
//!
//! ## Architecture
//!
//! - **`vivebien-core`**: errors, constants, and data models
//! - **`vivebien-intelligence`**: sentiment scorer and recommendation composer
//! - **this crate**: configuration, logging, storage, accounts, ports, services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vivebien::config::WellnessConfig;
//! use vivebien::services::WellnessService;
//! use vivebien::storage::InMemoryStore;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = WellnessConfig::from_env()?;
//!     let service = WellnessService::from_store(InMemoryStore::new(), config);
//!
//!     let recommendation = service.recommend(Uuid::new_v4(), "me siento cansada").await?;
//!     println!("{}", recommendation.text);
//!     Ok(())
//! }
//! ```

/// Account registration, login, and profile updates
pub mod accounts;

/// Environment configuration
pub mod config;

/// Companion chat types, LLM provider port, and the Aura prompt
pub mod llm;

/// Structured logging setup and helpers
pub mod logging;

/// Domain services
pub mod services;

/// Synthetic biometrics and demo personas
pub mod simulation;

/// Storage ports and the in-memory store
pub mod storage;

/// Speech synthesis and transcription ports
pub mod voice;

/// Unified error handling system with standard error codes
pub use vivebien_core::errors;

/// Application constants organized by domain
pub use vivebien_core::constants;

/// Core data models
pub use vivebien_core::models;

/// Sentiment scorer and recommendation composer
pub use vivebien_intelligence as intelligence;

pub use vivebien_intelligence::{compose_recommendation, score_sentiment};
