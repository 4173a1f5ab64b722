// ABOUTME: Deterministic synthetic biometrics and demo personas for seeding an empty store
// ABOUTME: Seeded ChaCha8 generator produces reproducible daily samples and 14-day histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Biometric simulation
//!
//! [`BiometricSimulator`] jitters a baseline per day. [`DemoPersona`] samples
//! from fixed per-persona ranges instead, so the three demo users look
//! clearly different (balanced, stressed, active). The same seed always
//! yields the same samples.

use crate::accounts::AccountService;
use crate::constants::demo;
use crate::errors::{AppError, AppResult};
use crate::models::{BiometricSample, MoodEntry, Sentiment};
use crate::storage::{BiometricHistory, MoodJournal};
use chrono::{Days, NaiveDate};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::info;

/// Minimum simulated sleep in hours
pub const MIN_SLEEP_HOURS: f64 = 3.0;

/// Relative step jitter around the baseline
const STEP_JITTER: f64 = 0.2;
/// Absolute sleep jitter in hours
const SLEEP_JITTER_HOURS: f64 = 1.0;
/// Absolute heart-rate jitter in bpm
const HEART_RATE_JITTER: i64 = 5;

/// Typical day a simulator jitters around
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationBaseline {
    /// Typical daily steps
    pub steps: u32,
    /// Typical sleep hours
    pub sleep_hours: f64,
    /// Typical heart rate
    pub heart_rate: u32,
}

impl Default for SimulationBaseline {
    fn default() -> Self {
        Self {
            steps: 8000,
            sleep_hours: 7.0,
            heart_rate: 70,
        }
    }
}

/// Seeded generator of synthetic daily samples
#[derive(Debug, Clone)]
pub struct BiometricSimulator {
    seed: u64,
    rng: ChaCha8Rng,
}

impl BiometricSimulator {
    /// Create a simulator with a deterministic seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed this simulator was created with
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// One day around `baseline`
    ///
    /// Steps vary by up to 20 % and never go below zero. Sleep varies by up
    /// to an hour, is clamped to at least 3.0 and rounded to one decimal.
    /// Heart rate varies by up to 5 bpm and stays positive.
    pub fn simulate_day(&mut self, date: NaiveDate, baseline: &SimulationBaseline) -> BiometricSample {
        let step_factor = 1.0 + self.rng.gen_range(-STEP_JITTER..=STEP_JITTER);
        let steps = (f64::from(baseline.steps) * step_factor).max(0.0).round() as u32;

        let sleep = baseline.sleep_hours
            + self.rng.gen_range(-SLEEP_JITTER_HOURS..=SLEEP_JITTER_HOURS);
        let sleep_hours = round_tenth(sleep.max(MIN_SLEEP_HOURS));

        let heart_rate = (i64::from(baseline.heart_rate)
            + self.rng.gen_range(-HEART_RATE_JITTER..=HEART_RATE_JITTER))
        .max(1) as u32;

        BiometricSample::new(date, steps, sleep_hours, heart_rate)
    }

    /// `days` consecutive samples ending at `end_date`, oldest first
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` when the first day would fall before the earliest
    /// representable date
    pub fn generate_history(
        &mut self,
        days: u32,
        baseline: &SimulationBaseline,
        end_date: NaiveDate,
    ) -> AppResult<Vec<BiometricSample>> {
        Ok(history_dates(days, end_date)?
            .map(|date| self.simulate_day(date, baseline))
            .collect())
    }

    /// `days` consecutive persona samples ending at `end_date`, oldest first
    ///
    /// # Errors
    ///
    /// Same as [`generate_history`](Self::generate_history)
    pub fn persona_history(
        &mut self,
        persona: DemoPersona,
        days: u32,
        end_date: NaiveDate,
    ) -> AppResult<Vec<BiometricSample>> {
        Ok(history_dates(days, end_date)?
            .map(|date| persona.sample_day(&mut self.rng, date))
            .collect())
    }
}

/// Demo users with distinct biometric patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoPersona {
    /// Sofía: good sleep, steady activity
    Balanced,
    /// Marcos: short sleep, low activity, high heart rate
    Stressed,
    /// Lucía: long walks and good sleep
    Active,
}

/// Sampling ranges for one persona
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaRanges {
    /// Daily steps
    pub steps: RangeInclusive<u32>,
    /// Sleep hours
    pub sleep_hours: RangeInclusive<f64>,
    /// Heart rate in bpm
    pub heart_rate: RangeInclusive<u32>,
}

impl DemoPersona {
    /// Every persona in seeding order
    pub const ALL: [Self; 3] = [Self::Balanced, Self::Stressed, Self::Active];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Balanced => "Sofía",
            Self::Stressed => "Marcos",
            Self::Active => "Lucía",
        }
    }

    /// Login email
    #[must_use]
    pub const fn email(self) -> &'static str {
        match self {
            Self::Balanced => "sofia@example.com",
            Self::Stressed => "marcos@example.com",
            Self::Active => "lucia@example.com",
        }
    }

    /// Daily step goal
    #[must_use]
    pub const fn target_steps(self) -> u32 {
        match self {
            Self::Balanced => 10_000,
            Self::Stressed => 7_000,
            Self::Active => 14_000,
        }
    }

    /// Ranges the persona's samples are drawn from
    #[must_use]
    pub fn ranges(self) -> PersonaRanges {
        match self {
            Self::Balanced => PersonaRanges {
                steps: 8_000..=11_000,
                sleep_hours: 7.0..=8.0,
                heart_rate: 60..=75,
            },
            Self::Stressed => PersonaRanges {
                steps: 2_000..=4_500,
                sleep_hours: 4.0..=6.0,
                heart_rate: 80..=98,
            },
            Self::Active => PersonaRanges {
                steps: 12_000..=16_000,
                sleep_hours: 7.0..=9.0,
                heart_rate: 55..=72,
            },
        }
    }

    /// Canned journal entry as `(text, sentiment, score)`
    #[must_use]
    pub fn mood(self) -> (&'static str, Sentiment, f64) {
        match self {
            Self::Balanced => ("Hoy me siento bien, he dormido mejor", Sentiment::Positive, 0.3),
            Self::Stressed => (
                "Me siento muy estresado por los exámenes",
                Sentiment::Negative,
                -0.4,
            ),
            Self::Active => (
                "Entrené bien hoy y me siento activa",
                Sentiment::Positive,
                0.4,
            ),
        }
    }

    /// Draw one day from the persona's ranges
    pub fn sample_day<R: Rng>(self, rng: &mut R, date: NaiveDate) -> BiometricSample {
        let ranges = self.ranges();
        let steps = rng.gen_range(ranges.steps);
        let sleep_hours = round_tenth(rng.gen_range(ranges.sleep_hours));
        let heart_rate = rng.gen_range(ranges.heart_rate);
        BiometricSample::new(date, steps, sleep_hours, heart_rate)
    }
}

impl fmt::Display for DemoPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => f.write_str("balanced"),
            Self::Stressed => f.write_str("stressed"),
            Self::Active => f.write_str("active"),
        }
    }
}

impl FromStr for DemoPersona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(Self::Balanced),
            "stressed" => Ok(Self::Stressed),
            "active" => Ok(Self::Active),
            other => Err(format!(
                "unknown persona '{other}' (expected balanced, stressed or active)"
            )),
        }
    }
}

/// Seed the demo personas into an empty store
///
/// Returns `Ok(false)` without touching anything when any account already
/// exists. Otherwise registers Sofía, Marcos and Lucía with `days` of
/// history ending at `today` and one journal entry each.
///
/// # Errors
///
/// Propagates registration and storage errors, and `ValueOutOfRange` when
/// `days` reaches past the supported date range
pub async fn seed_demo_data(
    accounts: &AccountService,
    biometrics: &dyn BiometricHistory,
    moods: &dyn MoodJournal,
    simulator: &mut BiometricSimulator,
    days: u32,
    today: NaiveDate,
) -> AppResult<bool> {
    if accounts.has_any_user().await? {
        info!("Store already has users, skipping demo seed");
        return Ok(false);
    }

    for persona in DemoPersona::ALL {
        let profile = accounts
            .register(
                persona.name(),
                persona.email(),
                demo::PASSWORD,
                persona.target_steps(),
                true,
            )
            .await?;

        for sample in simulator.persona_history(persona, days, today)? {
            biometrics.append(profile.id, sample).await?;
        }

        let (text, sentiment, score) = persona.mood();
        moods
            .append(MoodEntry::new(profile.id, text, sentiment, score))
            .await?;
    }

    info!(
        personas = DemoPersona::ALL.len(),
        days, "Demo data seeded"
    );
    Ok(true)
}

/// Dates from `days - 1` days before `end_date` up to `end_date`
fn history_dates(
    days: u32,
    end_date: NaiveDate,
) -> AppResult<impl Iterator<Item = NaiveDate>> {
    let span = u64::from(days.saturating_sub(1));
    let start = end_date.checked_sub_days(Days::new(span)).ok_or_else(|| {
        AppError::out_of_range(format!(
            "{days} days of history before {end_date} exceed the supported date range"
        ))
    })?;
    Ok(start.iter_days().take(days as usize))
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
