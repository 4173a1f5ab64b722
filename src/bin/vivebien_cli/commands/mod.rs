// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Re-exports command modules for vivebien-cli
// ABOUTME: Provides the analysis and simulation subcommands

pub mod analyze;
pub mod simulate;
