// ABOUTME: Core data models for the ViveBien wellness platform
// ABOUTME: Re-exports biometric, mood, and user profile structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! - `BiometricSample`: one stored day of steps, sleep, and heart rate
//! - `BiometricReading`: a possibly-partial reading with documented defaults
//! - `Sentiment` / `MoodEntry`: classified free-text mood submissions
//! - `UserProfile`: account data including the mutable step target

mod biometrics;
mod mood;
mod user;

pub use biometrics::{BiometricReading, BiometricSample, ResolvedBiometrics};
pub use mood::{MoodEntry, Sentiment};
pub use user::{ProfileUpdate, Target, UserProfile};
