// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! "Last built" metadata for the site.

use crate::time_utils::{format_date_time, Timestamp};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Reported when no build timestamp was injected.
pub const DEFAULT_BUILD_TIMESTAMP: &str = "1970-01-01T00:00:00.000Z";

/// Display text when the timestamp cannot be parsed.
pub const FALLBACK_TEXT: &str = "Build timestamp unavailable";

/// Build timestamp as exposed to the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BuildInfo {
    pub build_timestamp: String,
    pub display: String,
}

impl BuildInfo {
    pub fn new(injected: Option<&str>) -> Self {
        let build_timestamp = resolve_build_timestamp(injected).to_string();
        let display = format_build_timestamp(&build_timestamp);
        Self {
            build_timestamp,
            display,
        }
    }
}

/// The injected timestamp if it is a non-empty string, else the epoch default.
pub fn resolve_build_timestamp(injected: Option<&str>) -> &str {
    match injected {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_BUILD_TIMESTAMP,
    }
}

/// Human-readable build time, or [`FALLBACK_TEXT`] for empty/invalid input.
pub fn format_build_timestamp(raw: &str) -> String {
    format_date_time(Timestamp::parse(raw)).unwrap_or_else(|_| FALLBACK_TEXT.to_string())
}
