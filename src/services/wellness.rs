// ABOUTME: Wellness service tying mood analysis, biometric history, and recommendations together
// ABOUTME: Voices advice through the speech port and answers companion chat via the LLM port or rule-based advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::WellnessConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{
    AdvisoryKind, ComposedRecommendation, RecommendationComposer, SentimentAnalysis,
};
use crate::llm::{build_companion_request_with, ChatMessage, ChatResponse, LlmProvider};
use crate::logging::AppLogger;
use crate::models::{BiometricReading, BiometricSample, MoodEntry, UserProfile};
use crate::storage::{BiometricHistory, MoodJournal, ProfileStore};
use crate::voice::{self, SpeechSynthesizer, SpeechTranscriber, Transcript, VoiceOutcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Advice handed back after a mood submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Advisory text
    pub text: String,
    /// Sentiment of the submitted text
    pub sentiment: SentimentAnalysis,
    /// Advisories in the order they were composed
    pub advisories: Vec<AdvisoryKind>,
    /// Step goal the advice was computed against
    pub target_steps: u32,
    /// Journal entry stored for the submission
    pub mood_entry: MoodEntry,
    /// Whether and how the text was voiced
    pub voice: VoiceOutcome,
}

/// Model name reported on replies composed without an LLM provider
pub const RULE_BASED_MODEL: &str = "vivebien-rules";

/// Request-scoped wellness operations
#[derive(Clone)]
pub struct WellnessService {
    biometrics: Arc<dyn BiometricHistory>,
    moods: Arc<dyn MoodJournal>,
    profiles: Arc<dyn ProfileStore>,
    composer: Arc<RecommendationComposer>,
    llm: Option<Arc<dyn LlmProvider>>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    transcriber: Option<Arc<dyn SpeechTranscriber>>,
    config: WellnessConfig,
}

impl WellnessService {
    /// Create a service over explicit ports
    #[must_use]
    pub fn new(
        biometrics: Arc<dyn BiometricHistory>,
        moods: Arc<dyn MoodJournal>,
        profiles: Arc<dyn ProfileStore>,
        config: WellnessConfig,
    ) -> Self {
        Self {
            biometrics,
            moods,
            profiles,
            composer: Arc::new(RecommendationComposer::new()),
            llm: None,
            synthesizer: None,
            transcriber: None,
            config,
        }
    }

    /// Create a service whose ports are all backed by one store
    #[must_use]
    pub fn from_store<S>(store: S, config: WellnessConfig) -> Self
    where
        S: BiometricHistory + MoodJournal + ProfileStore + 'static,
    {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store, config)
    }

    /// Use a custom recommendation composer
    #[must_use]
    pub fn with_composer(mut self, composer: RecommendationComposer) -> Self {
        self.composer = Arc::new(composer);
        self
    }

    /// Attach an LLM provider for companion chat
    #[must_use]
    pub fn with_llm(mut self, llm: Arc<dyn LlmProvider>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// Attach a speech synthesizer for voiced recommendations
    #[must_use]
    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    /// Attach a speech transcriber for spoken mood entries
    #[must_use]
    pub fn with_transcriber(mut self, transcriber: Arc<dyn SpeechTranscriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &WellnessConfig {
        &self.config
    }

    /// Append a biometric sample to the user's history
    ///
    /// # Errors
    ///
    /// Propagates storage errors
    #[instrument(skip(self, sample), fields(user.id = %user_id))]
    pub async fn record_biometrics(&self, user_id: Uuid, sample: BiometricSample) -> AppResult<()> {
        self.biometrics.append(user_id, sample).await?;
        let count = self.biometrics.count(user_id).await?;
        AppLogger::log_biometrics_recorded(&user_id.to_string(), &sample.date.to_string(), count);
        Ok(())
    }

    /// Score `text` and store it in the user's journal
    ///
    /// # Errors
    ///
    /// `InvalidInput` for blank text; storage errors are propagated
    #[instrument(skip(self, text), fields(user.id = %user_id))]
    pub async fn log_mood(&self, user_id: Uuid, text: &str) -> AppResult<MoodEntry> {
        let (entry, _) = self.analyze_and_store(user_id, text).await?;
        Ok(entry)
    }

    /// Latest biometrics as a reading; empty when the user has no history
    ///
    /// # Errors
    ///
    /// Propagates storage errors
    pub async fn latest_biometrics(&self, user_id: Uuid) -> AppResult<BiometricReading> {
        Ok(self
            .biometrics
            .latest(user_id)
            .await?
            .map_or_else(BiometricReading::empty, |s| s.to_reading()))
    }

    /// The user's step goal, or the configured default without a profile
    ///
    /// # Errors
    ///
    /// Propagates storage errors
    pub async fn target_steps(&self, user_id: Uuid) -> AppResult<u32> {
        Ok(self
            .profiles
            .get(user_id)
            .await?
            .map_or(self.config.defaults.target_steps, |p| p.target.target_steps))
    }

    /// Log `text` as a mood entry and compose advice for it
    ///
    /// The text is voiced only when the profile has voice output enabled and
    /// a synthesizer is attached. A synthesizer failure is reported in
    /// [`Recommendation::voice`] and never fails the call.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for blank text; storage errors are propagated
    #[instrument(skip(self, text), fields(user.id = %user_id))]
    pub async fn recommend(&self, user_id: Uuid, text: &str) -> AppResult<Recommendation> {
        let (mood_entry, sentiment) = self.analyze_and_store(user_id, text).await?;

        let profile = self.profiles.get(user_id).await?;
        let tts_enabled = profile.as_ref().is_some_and(|p| p.tts_enabled);
        let composed = self.compose_for(user_id, profile.as_ref(), text).await?;
        let target_steps = composed.target_steps;

        let voice = if tts_enabled {
            voice::speak(
                self.synthesizer.as_deref(),
                &composed.text,
                &self.config.voice.voice,
            )
            .await
        } else {
            VoiceOutcome::Disabled
        };

        AppLogger::log_recommendation_issued(
            &user_id.to_string(),
            target_steps,
            composed.advisories.len(),
            voice.is_synthesized(),
        );

        Ok(Recommendation {
            text: composed.text,
            sentiment,
            advisories: composed.advisories,
            target_steps,
            mood_entry,
            voice,
        })
    }

    /// Answer a chat message
    ///
    /// Every message is scored and stored in the journal first, so the prompt's
    /// mood is the label of this message. The prompt also carries the latest
    /// biometrics and the step goal. Without an LLM provider the reply is the
    /// rule-based recommendation for the message, reported as
    /// [`RULE_BASED_MODEL`].
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank message; storage and provider errors are
    /// propagated, provider errors after they are logged
    #[instrument(skip(self, message, history), fields(user.id = %user_id))]
    pub async fn chat(
        &self,
        user_id: Uuid,
        message: &str,
        history: &[ChatMessage],
    ) -> AppResult<ChatResponse> {
        if message.trim().is_empty() {
            return Err(AppError::invalid_input("message cannot be empty"));
        }
        let (_, sentiment) = self.analyze_and_store(user_id, message).await?;

        let Some(llm) = self.llm.as_ref() else {
            let profile = self.profiles.get(user_id).await?;
            let composed = self.compose_for(user_id, profile.as_ref(), message).await?;
            debug!(
                advisories = composed.advisories.len(),
                "Answering chat with rule-based advice"
            );
            return Ok(ChatResponse {
                content: composed.text,
                model: RULE_BASED_MODEL.to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            });
        };

        let biometrics = self.latest_biometrics(user_id).await?;
        let target_steps = self.target_steps(user_id).await?;

        let request = build_companion_request_with(
            &self.config.chat,
            message,
            &biometrics,
            target_steps,
            sentiment.label.as_str(),
            history,
        );
        debug!(messages = request.messages.len(), provider = llm.name(), "Sending companion request");

        llm.complete(&request).await.inspect_err(|e| {
            AppLogger::log_adapter_failure(llm.name(), "complete", &e.to_string());
        })
    }

    /// Transcribe a spoken mood entry with the configured model and language
    ///
    /// # Errors
    ///
    /// See [`voice::transcribe`]
    pub async fn transcribe(&self, audio: &[u8]) -> AppResult<Transcript> {
        voice::transcribe(
            self.transcriber.as_deref(),
            audio,
            &self.config.voice.transcription_model,
            &self.config.voice.language,
        )
        .await
    }

    /// Compose advice against the profile's goal and default-filled biometrics
    async fn compose_for(
        &self,
        user_id: Uuid,
        profile: Option<&UserProfile>,
        text: &str,
    ) -> AppResult<ComposedRecommendation> {
        let target_steps =
            profile.map_or(self.config.defaults.target_steps, |p| p.target.target_steps);
        let latest = self
            .latest_biometrics(user_id)
            .await?
            .fill_missing(&self.config.defaults.biometrics);
        Ok(self.composer.compose(text, &latest, target_steps))
    }

    async fn analyze_and_store(
        &self,
        user_id: Uuid,
        text: &str,
    ) -> AppResult<(MoodEntry, SentimentAnalysis)> {
        if text.trim().is_empty() {
            return Err(AppError::invalid_input("mood text cannot be empty"));
        }

        let analysis = self.composer.analyzer().analyze(text);
        let entry = MoodEntry::new(user_id, text, analysis.label, analysis.score);
        self.moods.append(entry.clone()).await?;
        AppLogger::log_mood_logged(&user_id.to_string(), analysis.label, analysis.score);
        Ok((entry, analysis))
    }
}
