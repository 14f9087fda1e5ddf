// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.

use crate::error::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A point in time that may be invalid.
///
/// Built from untrusted strings; an unparseable or missing source yields an
/// invalid timestamp rather than an error, and formatting it fails with
/// [`AppError::InvalidDate`]. Invalid timestamps order before every valid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    pub const INVALID: Timestamp = Timestamp(None);

    /// Parse an ISO-8601 timestamp.
    ///
    /// Accepts RFC3339, or a date-time / date without offset which is read as
    /// UTC. Strava's `start_date_local` carries wall-clock time with a `Z`
    /// suffix, so UTC formatting reproduces the local calendar date.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::INVALID;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Self(Some(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Self(Some(naive.and_utc()));
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Self(date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc()));
        }

        Self::INVALID
    }

    /// Parse an optional source string; `None` yields an invalid timestamp.
    pub fn parse_opt(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or(Self::INVALID)
    }

    /// The underlying instant, or `InvalidDate`.
    pub fn instant(&self) -> Result<DateTime<Utc>, AppError> {
        self.0.ok_or(AppError::InvalidDate)
    }
}

/// Format as an en-GB calendar date: `DD/MM/YYYY`.
pub fn format_date(timestamp: Timestamp) -> Result<String, AppError> {
    Ok(timestamp.instant()?.format("%d/%m/%Y").to_string())
}

/// Format as an en-GB date with 24-hour time: `DD/MM/YYYY, HH:MM`.
pub fn format_date_time(timestamp: Timestamp) -> Result<String, AppError> {
    Ok(timestamp.instant()?.format("%d/%m/%Y, %H:%M").to_string())
}
