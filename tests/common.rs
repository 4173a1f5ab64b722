// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, store/service setup, and mock LLM and speech adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `vivebien`

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, Once};
use vivebien::accounts::AccountService;
use vivebien::config::WellnessConfig;
use vivebien::errors::{AppError, AppResult};
use vivebien::llm::{ChatRequest, ChatResponse, LlmProvider};
use vivebien::services::WellnessService;
use vivebien::storage::InMemoryStore;
use vivebien::voice::{SpeechSynthesizer, SpeechTranscriber, SynthesizedAudio, Transcript};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Fresh store plus an account service over it
pub fn create_test_accounts() -> (InMemoryStore, AccountService) {
    init_test_logging();
    let store = InMemoryStore::new();
    let accounts = AccountService::new(Arc::new(store.clone()));
    (store, accounts)
}

/// Fresh store plus a wellness service with default configuration
pub fn create_test_service() -> (InMemoryStore, WellnessService) {
    init_test_logging();
    let store = InMemoryStore::new();
    let service = WellnessService::from_store(store.clone(), WellnessConfig::default());
    (store, service)
}

// ============================================================================
// Mock LLM providers
// ============================================================================

/// Returns a fixed reply and remembers the last request
#[derive(Default)]
pub struct MockLlmProvider {
    pub reply: String,
    pub last_request: Mutex<Option<ChatRequest>>,
}

impl MockLlmProvider {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_owned(),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(ChatResponse {
            content: self.reply.clone(),
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.default_model().to_owned()),
            usage: None,
            finish_reason: Some("stop".to_owned()),
        })
    }
}

/// Always fails like an unreachable vendor
pub struct FailingLlmProvider;

#[async_trait]
impl LlmProvider for FailingLlmProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn default_model(&self) -> &str {
        "none"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service("failing", "connection refused"))
    }
}

// ============================================================================
// Mock speech adapters
// ============================================================================

/// Produces a few bytes of fake audio and counts calls
#[derive(Default)]
pub struct MockSynthesizer {
    pub calls: Mutex<Vec<(String, String)>>,
}

impl MockSynthesizer {
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    fn name(&self) -> &'static str {
        "mock-tts"
    }

    async fn synthesize(&self, text: &str, voice: &str) -> AppResult<SynthesizedAudio> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_owned(), voice.to_owned()));
        Ok(SynthesizedAudio::mp3(vec![0x49, 0x44, 0x33], voice))
    }
}

/// Synthesizer whose vendor is down
pub struct FailingSynthesizer;

#[async_trait]
impl SpeechSynthesizer for FailingSynthesizer {
    fn name(&self) -> &'static str {
        "failing-tts"
    }

    async fn synthesize(&self, _text: &str, _voice: &str) -> AppResult<SynthesizedAudio> {
        Err(AppError::service_unavailable("edge-tts"))
    }
}

/// Returns a fixed transcript with padding, as vendors often do
pub struct MockTranscriber {
    pub text: String,
    pub models: Mutex<Vec<String>>,
}

impl MockTranscriber {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            models: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SpeechTranscriber for MockTranscriber {
    fn name(&self) -> &'static str {
        "mock-stt"
    }

    async fn transcribe(
        &self,
        _audio: &[u8],
        model: &str,
        language: &str,
    ) -> AppResult<Transcript> {
        self.models.lock().unwrap().push(model.to_owned());
        Ok(Transcript::new(&format!("  {}\n", self.text), language))
    }
}
