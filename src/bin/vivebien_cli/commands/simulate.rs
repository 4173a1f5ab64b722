// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Synthetic history and demo commands for vivebien-cli
// ABOUTME: Prints simulated samples as JSON lines and runs the seeded demo personas

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;
use vivebien::accounts::AccountService;
use vivebien::config::WellnessConfig;
use vivebien::services::WellnessService;
use vivebien::simulation::{seed_demo_data, BiometricSimulator, DemoPersona, SimulationBaseline};
use vivebien::storage::{InMemoryStore, ProfileStore};

/// Print `days` of synthetic history as JSON lines, oldest first
pub fn simulate(
    days: u32,
    seed: u64,
    persona: Option<DemoPersona>,
    baseline: &SimulationBaseline,
    end_date: NaiveDate,
) -> Result<()> {
    let mut simulator = BiometricSimulator::new(seed);
    let samples = match persona {
        Some(persona) => simulator.persona_history(persona, days, end_date),
        None => simulator.generate_history(days, baseline, end_date),
    }
    .context("Failed to simulate history")?;

    for sample in &samples {
        println!("{}", serde_json::to_string(sample)?);
    }
    Ok(())
}

/// Seed an in-memory store with the personas and print their advice
pub async fn demo(config: WellnessConfig, seed: u64, today: NaiveDate) -> Result<()> {
    let store = InMemoryStore::new();
    let accounts = AccountService::new(Arc::new(store.clone()));
    let mut simulator = BiometricSimulator::new(seed);

    let seeded = seed_demo_data(
        &accounts,
        &store,
        &store,
        &mut simulator,
        config.demo.history_days,
        today,
    )
    .await
    .context("Failed to seed demo data")?;
    info!(seeded, "Demo store ready");

    let service = WellnessService::from_store(store.clone(), config);

    for persona in DemoPersona::ALL {
        let profile = ProfileStore::find_by_email(&store, persona.email())
            .await?
            .with_context(|| format!("Demo user {} missing after seeding", persona.email()))?;
        let latest = service.latest_biometrics(profile.id).await?.resolve();
        let (mood_text, _, _) = persona.mood();
        let recommendation = service.recommend(profile.id, mood_text).await?;

        println!("{} ({persona}, meta {} pasos)", profile.name, profile.target.target_steps);
        println!(
            "  Último registro: {} pasos, {} h de sueño, {} bpm",
            latest.steps, latest.sleep_hours, latest.heart_rate
        );
        println!(
            "  Estado: \"{mood_text}\" -> {}",
            recommendation.sentiment.label.display_label()
        );
        println!("  Recomendación: {}", recommendation.text);
        println!();
    }
    Ok(())
}
