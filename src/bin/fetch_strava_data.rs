// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Build-time fetch of Strava activities into the site's JSON snapshot.
//!
//! Exits non-zero on authentication or fetch failures. Missing credentials
//! are not a failure.

use homepage_running::{config::Config, logging, services::ingest};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    let config = Config::from_env();

    match ingest::run(&config).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Ingestion finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching Strava data");
            ExitCode::FAILURE
        }
    }
}
