// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Snapshot build: authenticate, page through activities, sanitize, persist.
//!
//! Without credentials the run never touches the network: an existing
//! snapshot is kept, otherwise an empty one is written, so the site build
//! does not fail just because secrets are unavailable.

use crate::config::Config;
use crate::error::Result;
use crate::services::{SnapshotStore, StravaClient};

/// What an ingestion run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Credentials absent; the existing snapshot was left untouched.
    KeptExisting,
    /// Credentials absent and no snapshot existed; an empty one was written.
    WroteEmpty,
    /// Activities fetched and written.
    Written { count: usize },
}

/// Run one ingestion with the given configuration.
pub async fn run(config: &Config) -> Result<IngestOutcome> {
    let store = SnapshotStore::new(&config.snapshot_path);

    let credentials = match config.strava_credentials() {
        Ok(credentials) => credentials,
        Err(_) => {
            tracing::warn!("Strava credentials not found, skipping fetch");
            return if store.ensure_exists()? {
                tracing::info!(
                    path = %store.path().display(),
                    "Existing data file found, keeping it"
                );
                Ok(IngestOutcome::KeptExisting)
            } else {
                tracing::info!(path = %store.path().display(), "Wrote empty activity list");
                Ok(IngestOutcome::WroteEmpty)
            };
        }
    };

    let client = StravaClient::new(&config.strava_api_url, &config.strava_token_url);
    let access_token = client.get_access_token(&credentials).await?;
    let activities = client.fetch_activities(&access_token).await?;

    store.write(&activities)?;
    tracing::info!(
        count = activities.len(),
        path = %store.path().display(),
        "Successfully wrote activities"
    );

    Ok(IngestOutcome::Written {
        count: activities.len(),
    })
}
