// ABOUTME: Core types and constants for the ViveBien wellness engine
// ABOUTME: Foundation crate with error handling, data models, and default thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # ViveBien Core
//!
//! Foundation crate providing shared types and constants for the ViveBien
//! wellness platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Default targets, biometric fallbacks, and sentiment thresholds
//! - **models**: Biometric samples, mood entries, sentiment labels, and user profiles

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`BiometricSample`, `MoodEntry`, `UserProfile`, ...)
pub mod models;
