// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Homepage running: Strava activity history for a static homepage.
//!
//! This crate builds the privacy-filtered activity snapshot bundled into the
//! site and serves the normalized, formatted views the running pages display.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use models::SanitizedActivity;
use services::ActivityFeedClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    /// Snapshot loaded at startup; never mutated.
    pub activities: Vec<SanitizedActivity>,
    pub feed: ActivityFeedClient,
}

impl AppState {
    pub fn new(config: Config, activities: Vec<SanitizedActivity>) -> Self {
        let feed = ActivityFeedClient::new(&config.activity_feed_url);
        Self {
            config,
            activities,
            feed,
        }
    }
}
