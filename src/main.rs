// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Tracker session host
//!
//! Restores the stored workout history, lists it, and once the current
//! position is known shows every workout on the map. Rendering goes to
//! structured logs.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::Config,
    services::{locate, FixedPositionProvider, TracingRenderer, WorkoutController},
    storage::FileStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(data_dir = %config.data_dir.display(), "Starting Workout Tracker");

    let storage = FileStore::new(&config.data_dir).with_quota(config.storage_quota_bytes);
    let renderer = TracingRenderer::new(config.map_zoom);

    // Restore history and list it
    let mut controller = WorkoutController::start(storage, renderer);

    // Load the map around the current position
    let provider = FixedPositionProvider::new(config.home_position);
    match locate(&provider, config.position_timeout).await {
        Ok(position) => controller.map_ready_at(position),
        Err(e) => tracing::warn!(error = %e, "Could not get your position"),
    }

    tracing::info!(count = controller.workouts().len(), "Session ready");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
