// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for the snapshot build.
//!
//! Handles:
//! - Refresh-token exchange for a short-lived access token
//! - Sequential paginated listing of the athlete's activities
//! - Rate limit detection (stop early, keep what we have)

use crate::config::StravaCredentials;
use crate::error::AppError;
use crate::models::{RawActivityRecord, SanitizedActivity};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Page size for activity listing (Strava's maximum).
pub const ACTIVITIES_PER_PAGE: u32 = 200;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
}

impl StravaClient {
    /// Create a client against the given API base and token endpoint.
    pub fn new(base_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_url: token_url.into(),
        }
    }

    /// Exchange the refresh token for an access token.
    pub async fn get_access_token(
        &self,
        credentials: &StravaCredentials,
    ) -> Result<String, AppError> {
        let body = TokenRefreshRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            refresh_token: &credentials.refresh_token,
            grant_type: "refresh_token",
        };

        let response = self
            .http
            .post(&self.token_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("Token refresh request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, body = %body, "Strava token refresh failed");
            return Err(AppError::Auth { status, body });
        }

        let token: TokenRefreshResponse = response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("Failed to parse token response: {}", e)))?;

        Ok(token.access_token)
    }

    /// Fetch one page of the authenticated athlete's activities.
    pub async fn list_activities(
        &self,
        access_token: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ActivityPage, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("page", page.to_string()), ("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(ActivityPage::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::FetchPage {
                page,
                status: status.as_u16(),
                body,
            });
        }

        let activities: Vec<RawActivityRecord> = response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error on page {}: {}", page, e)))?;

        Ok(ActivityPage::Activities(activities))
    }

    /// Fetch every activity, page by page, sanitizing as we go.
    ///
    /// Stops at the first empty page. A 429 stops early and returns what was
    /// accumulated so far. Any other failure aborts the whole fetch.
    pub async fn fetch_activities(
        &self,
        access_token: &str,
    ) -> Result<Vec<SanitizedActivity>, AppError> {
        let mut page = 1;
        let mut all_activities = Vec::new();

        tracing::info!("Fetching activities from Strava");

        loop {
            match self
                .list_activities(access_token, page, ACTIVITIES_PER_PAGE)
                .await?
            {
                ActivityPage::RateLimited => {
                    tracing::warn!(
                        page,
                        fetched = all_activities.len(),
                        "Strava rate limit hit (429), saving what we have so far"
                    );
                    break;
                }
                ActivityPage::Activities(activities) if activities.is_empty() => break,
                ActivityPage::Activities(activities) => {
                    tracing::info!(page, count = activities.len(), "Fetched page");
                    all_activities.extend(activities.iter().map(SanitizedActivity::from));
                    page += 1;
                }
            }
        }

        Ok(all_activities)
    }
}

/// Outcome of a single page request.
#[derive(Debug)]
pub enum ActivityPage {
    Activities(Vec<RawActivityRecord>),
    RateLimited,
}

#[derive(Serialize)]
struct TokenRefreshRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    grant_type: &'a str,
}

/// Token refresh response from Strava. Only the access token is used.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
}
