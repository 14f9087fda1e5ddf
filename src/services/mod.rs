// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod build_info;
pub mod feed;
pub mod ingest;
pub mod snapshot;
pub mod strava;

pub use build_info::BuildInfo;
pub use feed::ActivityFeedClient;
pub use ingest::IngestOutcome;
pub use snapshot::{SnapshotError, SnapshotStore};
pub use strava::{ActivityPage, StravaClient};
