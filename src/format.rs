// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display strings for activity metrics.
//!
//! Output must stay byte-identical to what the site has always shown, so pace
//! truncates both minutes and seconds instead of rounding.

use crate::models::units::{UnitSystem, FEET_PER_METER, MILES_PER_METER};

/// Distance with two decimals: `"10.00 km"` or `"6.21 mi"`.
pub fn format_distance(meters: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{:.2} km", meters / 1000.0),
        UnitSystem::Imperial => format!("{:.2} mi", meters * MILES_PER_METER),
    }
}

/// Elevation rounded to a whole number: `"100 m"` or `"328 ft"`.
pub fn format_elevation(meters: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::Metric => format!("{} m", meters.round() as i64),
        UnitSystem::Imperial => format!("{} ft", (meters * FEET_PER_METER).round() as i64),
    }
}

/// `H:MM:SS` from one hour upwards, `M:SS` below.
pub fn format_moving_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Time per kilometer or mile, e.g. `"6:01 /km"`.
///
/// A zero speed renders as `0:00`.
pub fn format_pace(average_speed: f64, units: UnitSystem) -> String {
    if average_speed == 0.0 {
        return format!("0:00 {}", units.pace_suffix());
    }

    let seconds_per_unit = units.pace_unit_meters() / average_speed;
    let minutes = (seconds_per_unit / 60.0).floor() as u64;
    let seconds = (seconds_per_unit % 60.0).floor() as u64;
    format!("{}:{:02} {}", minutes, seconds, units.pace_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(format_distance(10000.0, UnitSystem::Metric), "10.00 km");
        assert_eq!(format_distance(10000.0, UnitSystem::Imperial), "6.21 mi");
        assert_eq!(format_distance(5000.0, UnitSystem::Metric), "5.00 km");
        assert_eq!(format_distance(0.0, UnitSystem::Metric), "0.00 km");
    }

    #[test]
    fn test_elevation() {
        assert_eq!(format_elevation(100.0, UnitSystem::Imperial), "328 ft");
        assert_eq!(format_elevation(100.0, UnitSystem::Metric), "100 m");
        assert_eq!(format_elevation(12.6, UnitSystem::Metric), "13 m");
        assert_eq!(format_elevation(0.0, UnitSystem::Imperial), "0 ft");
    }

    #[test]
    fn test_moving_time() {
        assert_eq!(format_moving_time(3600), "1:00:00");
        assert_eq!(format_moving_time(90), "1:30");
        assert_eq!(format_moving_time(3725), "1:02:05");
        assert_eq!(format_moving_time(5), "0:05");
        assert_eq!(format_moving_time(0), "0:00");
    }

    #[test]
    fn test_pace() {
        assert_eq!(format_pace(2.77, UnitSystem::Metric), "6:01 /km");
        assert_eq!(format_pace(2.77, UnitSystem::Imperial), "9:40 /mi");
    }

    #[test]
    fn test_pace_zero_speed() {
        assert_eq!(format_pace(0.0, UnitSystem::Metric), "0:00 /km");
        assert_eq!(format_pace(0.0, UnitSystem::Imperial), "0:00 /mi");
    }

    #[test]
    fn test_pace_truncates_seconds() {
        // 1000 / 3.0 = 333.33s -> 5:33, never rounded up
        assert_eq!(format_pace(3.0, UnitSystem::Metric), "5:33 /km");
    }
}
