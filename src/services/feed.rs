// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Runtime activity endpoint backing the running page.

use crate::error::AppError;
use crate::models::{Activity, RawActivityRecord};
use std::cmp::Reverse;

/// Message shown for any non-success response.
pub const FEED_ERROR_MESSAGE: &str = "Failed to fetch activities";

/// Client for the external activity endpoint.
#[derive(Clone)]
pub struct ActivityFeedClient {
    http: reqwest::Client,
    url: String,
}

impl ActivityFeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Fetch once and normalize, most recent first. No retry.
    pub async fn fetch_activities(&self) -> Result<Vec<Activity>, AppError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::Feed(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Activity feed returned an error");
            return Err(AppError::Feed(FEED_ERROR_MESSAGE.to_string()));
        }

        let records: Vec<RawActivityRecord> = response
            .json()
            .await
            .map_err(|e| AppError::Feed(e.to_string()))?;

        let mut activities: Vec<Activity> = records.iter().map(Activity::from).collect();
        activities.sort_by_key(|a| Reverse(a.start_date));
        Ok(activities)
    }
}
