// ABOUTME: Domain service layer orchestrating storage, intelligence, and adapter ports
// ABOUTME: Every operation is scoped by an explicit user id rather than session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Domain service layer
//!
//! Services hold `Arc`s to the storage and adapter ports so one instance can
//! be shared across tasks and transports.

/// Mood logging, recommendations, and companion chat
pub mod wellness;

pub use wellness::{Recommendation, WellnessService, RULE_BASED_MODEL};
