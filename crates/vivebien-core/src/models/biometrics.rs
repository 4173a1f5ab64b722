// ABOUTME: Biometric sample and reading types for daily steps, sleep, and heart rate
// ABOUTME: Partial readings resolve to documented fallback values at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::biometric_defaults;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of biometric data for a user
///
/// Samples are append-only. Several samples may share a date; stores keep
/// them all as ordered history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricSample {
    /// Calendar day the sample describes
    pub date: NaiveDate,
    /// Step count for the day
    pub steps: u32,
    /// Hours slept the night before
    pub sleep_hours: f64,
    /// Average heart rate in beats per minute
    pub heart_rate: u32,
}

impl BiometricSample {
    /// Create a new sample
    #[must_use]
    pub const fn new(date: NaiveDate, steps: u32, sleep_hours: f64, heart_rate: u32) -> Self {
        Self {
            date,
            steps,
            sleep_hours,
            heart_rate,
        }
    }

    /// Convert into a fully populated reading
    #[must_use]
    pub const fn to_reading(&self) -> BiometricReading {
        BiometricReading {
            steps: Some(self.steps),
            sleep_hours: Some(self.sleep_hours),
            heart_rate: Some(self.heart_rate),
        }
    }
}

/// Latest biometrics as handed to the recommendation composer
///
/// Any field may be missing, for example when a user has only entered sleep
/// for today. Missing values fall back to [`biometric_defaults`]. Values are
/// not range-checked: a negative sleep duration is passed through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BiometricReading {
    /// Step count, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Sleep hours, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Heart rate in bpm, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
}

impl BiometricReading {
    /// A reading with every field present
    #[must_use]
    pub const fn new(steps: u32, sleep_hours: f64, heart_rate: u32) -> Self {
        Self {
            steps: Some(steps),
            sleep_hours: Some(sleep_hours),
            heart_rate: Some(heart_rate),
        }
    }

    /// A reading with no fields, used when a user has no history yet
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            steps: None,
            sleep_hours: None,
            heart_rate: None,
        }
    }

    /// Whether no field is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_none() && self.sleep_hours.is_none() && self.heart_rate.is_none()
    }

    /// Fill missing fields with the documented defaults
    #[must_use]
    pub fn resolve(&self) -> ResolvedBiometrics {
        ResolvedBiometrics {
            steps: self.steps.unwrap_or(biometric_defaults::STEPS),
            sleep_hours: self.sleep_hours.unwrap_or(biometric_defaults::SLEEP_HOURS),
            heart_rate: self.heart_rate.unwrap_or(biometric_defaults::HEART_RATE),
        }
    }

    /// Fill missing fields from caller-supplied fallbacks
    #[must_use]
    pub fn fill_missing(&self, fallback: &ResolvedBiometrics) -> Self {
        Self {
            steps: self.steps.or(Some(fallback.steps)),
            sleep_hours: self.sleep_hours.or(Some(fallback.sleep_hours)),
            heart_rate: self.heart_rate.or(Some(fallback.heart_rate)),
        }
    }
}

impl Default for ResolvedBiometrics {
    fn default() -> Self {
        BiometricReading::empty().resolve()
    }
}

impl From<BiometricSample> for BiometricReading {
    fn from(sample: BiometricSample) -> Self {
        sample.to_reading()
    }
}

/// A reading with every field filled in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBiometrics {
    /// Step count
    pub steps: u32,
    /// Sleep hours
    pub sleep_hours: f64,
    /// Heart rate in bpm
    pub heart_rate: u32,
}
