// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type. Propagates to the process boundary for ingestion;
/// the API folds it into per-row or per-view state instead of failing requests.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing Strava credentials in environment variables.")]
    MissingCredentials,

    #[error("Failed to refresh token: {status} {body}")]
    Auth { status: u16, body: String },

    #[error("Failed to fetch activities page {page}: {status} {body}")]
    FetchPage { page: u32, status: u16, body: String },

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("{0}")]
    Feed(String),

    #[error("Invalid date")]
    InvalidDate,

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Result type alias for handlers and services
pub type Result<T> = std::result::Result<T, AppError>;
