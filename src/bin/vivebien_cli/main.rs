// ABOUTME: ViveBien CLI - command-line driver for the wellness engine
// ABOUTME: Scores text, composes recommendations, simulates biometrics, and runs the persona demo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Score a mood entry
//! vivebien-cli sentiment "me siento muy feliz y tranquilo"
//!
//! # Compose advice from explicit biometrics
//! vivebien-cli recommend --text "me siento fatal" --steps 2000 --sleep 5 --heart-rate 100
//!
//! # Two weeks of synthetic data for the stressed persona
//! vivebien-cli simulate --days 14 --seed 7 --persona stressed
//!
//! # Seed the demo personas and print their recommendations
//! vivebien-cli demo --seed 42
//! ```

mod commands;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::debug;
use vivebien::config::WellnessConfig;
use vivebien::logging::LoggingConfig;
use vivebien::models::BiometricReading;
use vivebien::simulation::{DemoPersona, SimulationBaseline};

#[derive(Parser)]
#[command(
    name = "vivebien-cli",
    about = "ViveBien wellness engine CLI",
    long_about = "Score mood text, compose wellness recommendations, and generate synthetic biometric data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Print the sentiment label and score of a text
    Sentiment {
        /// Text to score
        text: String,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compose a recommendation from text and biometrics
    Recommend {
        /// How the user feels
        #[arg(long)]
        text: String,

        /// Steps today (defaults when omitted)
        #[arg(long)]
        steps: Option<u32>,

        /// Hours slept (defaults when omitted)
        #[arg(long)]
        sleep: Option<f64>,

        /// Heart rate in bpm (defaults when omitted)
        #[arg(long)]
        heart_rate: Option<u32>,

        /// Daily step goal (configured default when omitted)
        #[arg(long)]
        target: Option<u32>,

        /// Print advisories and resolved inputs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a synthetic biometric history as JSON lines
    Simulate {
        /// Number of days
        #[arg(long, default_value = "14")]
        days: u32,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Draw from a demo persona's ranges instead of the baseline
        #[arg(long)]
        persona: Option<DemoPersona>,

        /// Baseline daily steps
        #[arg(long, default_value = "8000")]
        base_steps: u32,

        /// Baseline sleep hours
        #[arg(long, default_value = "7.0")]
        base_sleep: f64,

        /// Baseline heart rate
        #[arg(long, default_value = "70")]
        base_heart_rate: u32,

        /// Last day of the history (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },

    /// Seed the demo personas into memory and print their recommendations
    Demo {
        /// Random seed (configured default when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = WellnessConfig::from_env().context("Failed to load configuration")?;

    let mut logging = LoggingConfig::from_env().with_fallback_level(config.log_level);
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;
    debug!("{}", config.summary());

    let today = Local::now().date_naive();

    match cli.command {
        Command::Sentiment { text, json } => commands::analyze::sentiment(&text, json)?,
        Command::Recommend {
            text,
            steps,
            sleep,
            heart_rate,
            target,
            json,
        } => {
            let reading = BiometricReading {
                steps,
                sleep_hours: sleep,
                heart_rate,
            }
            .fill_missing(&config.defaults.biometrics);
            let target_steps = target.unwrap_or(config.defaults.target_steps);
            if target_steps == 0 {
                anyhow::bail!("--target must be greater than zero");
            }
            commands::analyze::recommend(&text, &reading, target_steps, json)?;
        }
        Command::Simulate {
            days,
            seed,
            persona,
            base_steps,
            base_sleep,
            base_heart_rate,
            end_date,
        } => {
            let baseline = SimulationBaseline {
                steps: base_steps,
                sleep_hours: base_sleep,
                heart_rate: base_heart_rate,
            };
            commands::simulate::simulate(
                days,
                seed,
                persona,
                &baseline,
                end_date.unwrap_or(today),
            )?;
        }
        Command::Demo { seed } => {
            let seed = seed.unwrap_or(config.demo.seed);
            commands::simulate::demo(config, seed, today).await?;
        }
    }

    Ok(())
}
