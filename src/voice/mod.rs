// ABOUTME: Speech synthesis and transcription ports for voiced recommendations and spoken mood entries
// ABOUTME: Adapter failures surface as explicit VoiceOutcome values instead of being swallowed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Voice ports
//!
//! Text-to-speech and speech-to-text are external services. This module only
//! defines the seams: [`SpeechSynthesizer`] and [`SpeechTranscriber`]. A
//! failed synthesis never aborts a recommendation; callers get a
//! [`VoiceOutcome::Failed`] with the reason and the text still goes out.

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Encoded audio produced by a synthesizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesizedAudio {
    /// Encoded audio bytes
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`, e.g. `audio/mpeg`
    pub mime_type: String,
    /// Voice that spoke the text
    pub voice: String,
}

impl SynthesizedAudio {
    /// MP3 audio from a named voice
    #[must_use]
    pub fn mp3(bytes: Vec<u8>, voice: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: "audio/mpeg".to_owned(),
            voice: voice.into(),
        }
    }

    /// Size of the encoded audio
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the synthesizer returned no audio
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Text recognized from an audio clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Recognized text with surrounding whitespace removed
    pub text: String,
    /// Language the transcriber was asked for
    pub language: String,
}

impl Transcript {
    /// Build a transcript, trimming the recognized text
    #[must_use]
    pub fn new(text: &str, language: impl Into<String>) -> Self {
        Self {
            text: text.trim().to_owned(),
            language: language.into(),
        }
    }
}

/// Result of trying to voice a piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VoiceOutcome {
    /// The user turned voice output off
    Disabled,
    /// No synthesizer is configured
    Unavailable,
    /// Audio was produced
    Synthesized(SynthesizedAudio),
    /// The synthesizer reported an error
    Failed {
        /// Error description from the adapter
        reason: String,
    },
}

impl VoiceOutcome {
    /// Whether audio was produced
    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        matches!(self, Self::Synthesized(_))
    }

    /// The audio, if any
    #[must_use]
    pub const fn audio(&self) -> Option<&SynthesizedAudio> {
        match self {
            Self::Synthesized(audio) => Some(audio),
            _ => None,
        }
    }
}

/// Text-to-speech port
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Adapter identifier used in logs
    fn name(&self) -> &'static str;

    /// Speak `text` with `voice`
    async fn synthesize(&self, text: &str, voice: &str) -> AppResult<SynthesizedAudio>;
}

/// Speech-to-text port
#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    /// Adapter identifier used in logs
    fn name(&self) -> &'static str;

    /// Transcribe encoded `audio` spoken in `language` with the named `model`
    async fn transcribe(
        &self,
        audio: &[u8],
        model: &str,
        language: &str,
    ) -> AppResult<Transcript>;
}

/// Voice `text`, turning adapter errors into [`VoiceOutcome::Failed`]
pub async fn speak(
    synthesizer: Option<&dyn SpeechSynthesizer>,
    text: &str,
    voice: &str,
) -> VoiceOutcome {
    let Some(synthesizer) = synthesizer else {
        return VoiceOutcome::Unavailable;
    };

    match synthesizer.synthesize(text, voice).await {
        Ok(audio) if audio.is_empty() => {
            let reason = "synthesizer returned no audio".to_owned();
            AppLogger::log_adapter_failure(synthesizer.name(), "synthesize", &reason);
            VoiceOutcome::Failed { reason }
        }
        Ok(audio) => VoiceOutcome::Synthesized(audio),
        Err(e) => {
            let reason = e.to_string();
            AppLogger::log_adapter_failure(synthesizer.name(), "synthesize", &reason);
            VoiceOutcome::Failed { reason }
        }
    }
}

/// Transcribe `audio`, rejecting empty clips and empty results
///
/// # Errors
///
/// Returns `ExternalServiceUnavailable` when no transcriber is configured,
/// `InvalidInput` for empty audio or an empty transcript, and passes adapter
/// errors through after logging them
pub async fn transcribe(
    transcriber: Option<&dyn SpeechTranscriber>,
    audio: &[u8],
    model: &str,
    language: &str,
) -> AppResult<Transcript> {
    let transcriber = transcriber.ok_or_else(|| AppError::service_unavailable("speech transcriber"))?;

    if audio.is_empty() {
        return Err(AppError::invalid_input("audio clip is empty"));
    }

    let transcript = transcriber
        .transcribe(audio, model, language)
        .await
        .inspect_err(|e| {
            AppLogger::log_adapter_failure(transcriber.name(), "transcribe", &e.to_string());
        })?;

    if transcript.text.is_empty() {
        return Err(AppError::invalid_input("no speech recognized in audio"));
    }
    Ok(transcript)
}
