// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display unit systems.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Meters in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;
/// Miles per meter, as used for distance display.
pub const MILES_PER_METER: f64 = 0.000621371;
/// Feet per meter, as used for elevation display.
pub const FEET_PER_METER: f64 = 3.28084;

/// Unit system selected for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Length of one pace unit (a kilometer or a mile) in meters.
    pub fn pace_unit_meters(self) -> f64 {
        match self {
            UnitSystem::Metric => 1000.0,
            UnitSystem::Imperial => METERS_PER_MILE,
        }
    }

    /// Suffix for pace strings.
    pub fn pace_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "/km",
            UnitSystem::Imperial => "/mi",
        }
    }
}
