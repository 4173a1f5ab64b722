// ABOUTME: Companion chat contract with message types and the LLM provider port
// ABOUTME: Builds Aura persona requests from biometrics, mood, and recent conversation history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Companion chat contract
//!
//! This module defines the request/response types and the [`LlmProvider`]
//! port used by the wellness companion. No vendor client ships here; hosts
//! plug their own provider in behind the trait.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vivebien::llm::{build_companion_request, ChatMessage, LlmProvider};
//! use vivebien::models::BiometricReading;
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let history = vec![ChatMessage::assistant("¡Hola! ¿Cómo te encuentras hoy?")];
//!     let request = build_companion_request(
//!         "Hoy me siento un poco cansado",
//!         &BiometricReading::new(5000, 7.0, 72),
//!         8000,
//!         "neutral",
//!         &history,
//!     );
//!     let response = provider.complete(&request).await;
//! }
//! ```

pub mod prompts;

pub use prompts::{render_aura_prompt, AURA_SYSTEM_PROMPT};

use crate::config::ChatConfig;
use crate::errors::AppError;
use crate::models::BiometricReading;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Role a stored history turn takes in a new request
    ///
    /// Only user turns stay user turns; everything else is replayed as the
    /// assistant so a stray system message cannot override the persona.
    #[must_use]
    pub const fn for_history(self) -> Self {
        match self {
            Self::User => Self::User,
            Self::System | Self::Assistant => Self::Assistant,
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a chat completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Nucleus sampling probability mass
    pub top_p: Option<f32>,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
            top_p: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set nucleus sampling
    #[must_use]
    pub const fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// The system message, if the request starts with one
    #[must_use]
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.role == MessageRole::System)
            .map(|m| m.content.as_str())
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider port for chat completion
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "groq")
    fn name(&self) -> &'static str;

    /// Default model to use if not specified in request
    fn default_model(&self) -> &str;

    /// Perform a chat completion
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}

// ============================================================================
// Companion request builder
// ============================================================================

/// Build an Aura request with the default chat settings
#[must_use]
pub fn build_companion_request(
    user_message: &str,
    biometrics: &BiometricReading,
    target_steps: u32,
    mood: &str,
    history: &[ChatMessage],
) -> ChatRequest {
    build_companion_request_with(
        &ChatConfig::default(),
        user_message,
        biometrics,
        target_steps,
        mood,
        history,
    )
}

/// Build an Aura request with explicit chat settings
///
/// Messages are the rendered system prompt, the last
/// `config.history_window` turns of `history`, then `user_message`.
#[must_use]
pub fn build_companion_request_with(
    config: &ChatConfig,
    user_message: &str,
    biometrics: &BiometricReading,
    target_steps: u32,
    mood: &str,
    history: &[ChatMessage],
) -> ChatRequest {
    let recent = &history[history.len().saturating_sub(config.history_window)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ChatMessage::system(render_aura_prompt(
        biometrics,
        target_steps,
        mood,
    )));
    messages.extend(
        recent
            .iter()
            .map(|turn| ChatMessage::new(turn.role.for_history(), turn.content.clone())),
    );
    messages.push(ChatMessage::user(user_message));

    ChatRequest::new(messages)
        .with_model(config.model.clone())
        .with_temperature(config.temperature)
        .with_max_tokens(config.max_tokens)
        .with_top_p(config.top_p)
}
