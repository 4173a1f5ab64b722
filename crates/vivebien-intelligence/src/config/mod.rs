// ABOUTME: Configuration types for the intelligence engine
// ABOUTME: Re-exports recommendation thresholds and message templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

mod recommendation;

pub(crate) use recommendation::fill_target_steps;
pub use recommendation::{
    RecommendationConfig, RecommendationMessages, RecommendationThresholds,
    TARGET_STEPS_PLACEHOLDER,
};
