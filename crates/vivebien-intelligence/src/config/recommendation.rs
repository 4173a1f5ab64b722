// ABOUTME: Recommendation composer configuration for advisory thresholds and templates
// ABOUTME: Defaults reproduce the documented sleep, activity, heart-rate, and sentiment rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recommendation Composer Configuration
//!
//! Thresholds decide which rules fire; messages are the canned sentences each
//! rule contributes. The low-activity template may contain the placeholder
//! `{target_steps}`, which is replaced with the user's step goal.

use serde::{Deserialize, Serialize};
use vivebien_core::constants::recommendation::{
    ELEVATED_HEART_RATE, GOOD_SLEEP_HOURS, LOW_ACTIVITY_RATIO, LOW_SLEEP_HOURS,
};

/// Placeholder substituted in [`RecommendationMessages::low_activity`]
pub const TARGET_STEPS_PLACEHOLDER: &str = "{target_steps}";

/// Recommendation Composer Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Threshold values for triggering advisories
    pub thresholds: RecommendationThresholds,
    /// Sentences emitted by each advisory
    pub messages: RecommendationMessages,
}

/// Thresholds for the biometric rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Sleep strictly below this is low
    pub low_sleep_hours: f64,
    /// Sleep at or above this is good
    pub good_sleep_hours: f64,
    /// Steps strictly below `ratio * target_steps` are low
    pub low_activity_ratio: f64,
    /// Heart rate strictly above this triggers a caution
    pub elevated_heart_rate: u32,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            low_sleep_hours: LOW_SLEEP_HOURS,
            good_sleep_hours: GOOD_SLEEP_HOURS,
            low_activity_ratio: LOW_ACTIVITY_RATIO,
            elevated_heart_rate: ELEVATED_HEART_RATE,
        }
    }
}

/// Canned advisory sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Sleep below the low threshold
    pub low_sleep: String,
    /// Sleep at or above the good threshold
    pub good_sleep: String,
    /// Steps below the activity ratio; may contain `{target_steps}`
    pub low_activity: String,
    /// Steps at or above the activity ratio
    pub good_activity: String,
    /// Heart rate above the caution threshold
    pub elevated_heart_rate: String,
    /// Negative sentiment
    pub emotional_support: String,
    /// Positive sentiment
    pub encouragement: String,
    /// No other advisory fired
    pub general_habits: String,
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            low_sleep: "Has dormido menos de lo recomendado. Evita pantallas 1 hora antes de \
                        dormir y prueba una rutina de respiración de 10 minutos."
                .to_owned(),
            good_sleep: "Tu sueño está en buen rango. Mantén la rutina actual y cuida la \
                         exposición a luz natural por la mañana."
                .to_owned(),
            low_activity: "Tu nivel de actividad es bajo para tu meta de {target_steps} pasos. \
                           Intenta dar un paseo de 20 minutos o dividir tu objetivo en bloques \
                           de 5-10 minutos."
                .to_owned(),
            good_activity: "Excelente nivel de pasos. Puedes mantenerlo y añadir pequeños \
                            estiramientos después de sesiones largas sentado."
                .to_owned(),
            elevated_heart_rate: "Tu frecuencia cardiaca está alta. Si te sientes mal, descansa \
                                  y considera hacer respiraciones lentas y profundas. Consulta \
                                  a un profesional si persiste."
                .to_owned(),
            emotional_support: "Veo señales de malestar emocional. Prueba escribir en un diario \
                                5 minutos o hablar con alguien de confianza."
                .to_owned(),
            encouragement: "¡Genial! Mantén las pequeñas rutinas que te funcionan.".to_owned(),
            general_habits: "Mantén hábitos regulares: hidratación, pausas activas y rutinas \
                             de sueño."
                .to_owned(),
        }
    }
}

/// Replace the step-goal placeholder in `template`
pub(crate) fn fill_target_steps(template: &str, target_steps: u32) -> String {
    template.replace(TARGET_STEPS_PLACEHOLDER, &target_steps.to_string())
}
