// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Configuration loaded from environment variables.
//!
//! Read once at invocation and passed explicitly to the ingestion run and the
//! API state. Nothing else touches the process environment.

use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_STRAVA_API_URL: &str = "https://www.strava.com/api/v3";
pub const DEFAULT_STRAVA_TOKEN_URL: &str = "https://www.strava.com/oauth/token";
pub const DEFAULT_SNAPSHOT_PATH: &str = "src/data/strava-activities.json";
pub const DEFAULT_ACTIVITY_FEED_URL: &str =
    "https://stravasync.jonathanburnhams.com/api/users/7828229/activities";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Secrets (ingestion only, may be absent) ---
    pub strava_client_id: Option<String>,
    pub strava_client_secret: Option<String>,
    pub strava_refresh_token: Option<String>,

    // --- Endpoints ---
    /// Strava API base URL
    pub strava_api_url: String,
    /// Strava OAuth token endpoint
    pub strava_token_url: String,
    /// Runtime activity endpoint for the running page
    pub activity_feed_url: String,

    // --- Site ---
    /// Snapshot file written by ingestion, read by the list view
    pub snapshot_path: PathBuf,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// ISO-8601 build timestamp, if one was injected
    pub build_timestamp: Option<String>,
}

/// The three secrets needed for a token exchange, all present and non-empty.
#[derive(Debug, Clone)]
pub struct StravaCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl StravaCredentials {
    /// Build credentials from optional parts. Empty strings count as absent.
    pub fn from_parts(
        client_id: Option<&str>,
        client_secret: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<Self, AppError> {
        match (
            non_empty(client_id),
            non_empty(client_secret),
            non_empty(refresh_token),
        ) {
            (Some(id), Some(secret), Some(token)) => Ok(Self {
                client_id: id.to_string(),
                client_secret: secret.to_string(),
                refresh_token: token.to_string(),
            }),
            _ => Err(AppError::MissingCredentials),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            strava_client_id: Some("test_client_id".to_string()),
            strava_client_secret: Some("test_secret".to_string()),
            strava_refresh_token: Some("test_refresh_token".to_string()),
            strava_api_url: DEFAULT_STRAVA_API_URL.to_string(),
            strava_token_url: DEFAULT_STRAVA_TOKEN_URL.to_string(),
            activity_feed_url: DEFAULT_ACTIVITY_FEED_URL.to_string(),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            build_timestamp: None,
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            strava_client_id: secret_var("STRAVA_CLIENT_ID"),
            strava_client_secret: secret_var("STRAVA_CLIENT_SECRET"),
            strava_refresh_token: secret_var("STRAVA_REFRESH_TOKEN"),
            strava_api_url: env::var("STRAVA_API_URL")
                .unwrap_or_else(|_| DEFAULT_STRAVA_API_URL.to_string()),
            strava_token_url: env::var("STRAVA_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_STRAVA_TOKEN_URL.to_string()),
            activity_feed_url: env::var("ACTIVITY_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_ACTIVITY_FEED_URL.to_string()),
            snapshot_path: env::var("SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH)),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            build_timestamp: env::var("BUILD_TIMESTAMP")
                .ok()
                .or_else(|| option_env!("BUILD_TIMESTAMP").map(str::to_string)),
        }
    }

    /// Credentials for a token exchange, or `MissingCredentials` if any is absent.
    pub fn strava_credentials(&self) -> Result<StravaCredentials, AppError> {
        StravaCredentials::from_parts(
            self.strava_client_id.as_deref(),
            self.strava_client_secret.as_deref(),
            self.strava_refresh_token.as_deref(),
        )
    }
}

fn secret_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
