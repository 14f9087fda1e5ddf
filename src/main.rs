// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Homepage Running API Server
//!
//! Serves the activity list, running page and build metadata to the static
//! homepage.

use homepage_running::{config::Config, logging, services::SnapshotStore, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::from_env();
    tracing::info!(port = config.port, "Starting Homepage Running API");

    let store = SnapshotStore::new(&config.snapshot_path);
    let activities = match store.load() {
        Ok(activities) => activities,
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %store.path().display(),
                "Activity snapshot unavailable, serving an empty list"
            );
            Vec::new()
        }
    };
    tracing::info!(count = activities.len(), "Activity snapshot loaded");

    let state = Arc::new(AppState::new(config.clone(), activities));
    let app = homepage_running::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
