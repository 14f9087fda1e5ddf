// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! List-view filtering and ordering over the activity snapshot.

use crate::models::activity::SanitizedActivity;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Which activities the list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityFilter {
    All,
    /// Only `type == "Run"`
    #[default]
    Run,
    /// Runs flagged with the race workout type
    Race,
}

impl ActivityFilter {
    pub fn matches(self, activity: &SanitizedActivity) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Run => activity.is_run(),
            ActivityFilter::Race => activity.is_race(),
        }
    }
}

/// Filter, then order most recent first. The source slice is left untouched.
///
/// Activities with an unparseable start date sort last.
pub fn derive_view(
    activities: &[SanitizedActivity],
    filter: ActivityFilter,
) -> Vec<&SanitizedActivity> {
    let mut view: Vec<&SanitizedActivity> = activities
        .iter()
        .filter(|a| filter.matches(a))
        .collect();
    view.sort_by_key(|a| Reverse(a.start_date()));
    view
}
