// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity models: raw API records, the sanitized snapshot record and
//! the normalized activity used for display.

use crate::error::AppError;
use crate::format;
use crate::models::units::UnitSystem;
use crate::time_utils::{self, Timestamp};
use geo::{BoundingRect, LineString};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Strava `workout_type` value marking a run as a race.
pub const RACE_WORKOUT_TYPE: i64 = 1;

/// Activity as returned by Strava or the runtime activity endpoint.
///
/// Untrusted input: every field may be missing. Fields we do not model
/// (`map`, `start_latlng`, `end_latlng`, ...) are dropped on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawActivityRecord {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub workout_type: Option<i64>,
    pub start_date: Option<String>,
    pub start_date_local: Option<String>,
    pub distance: Option<f64>,
    /// Seconds. Some sources send whole numbers as floats.
    pub moving_time: Option<f64>,
    pub elapsed_time: Option<f64>,
    pub total_elevation_gain: Option<f64>,
    pub average_speed: Option<f64>,
    /// Richer nested copy of the activity, when the source provides one.
    pub data_json: Option<ActivityDetail>,
}

/// Nested detail object carried by the runtime activity endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityDetail {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub start_date_local: Option<String>,
    pub distance: Option<f64>,
    pub moving_time: Option<f64>,
    pub elapsed_time: Option<f64>,
    pub total_elevation_gain: Option<f64>,
    pub average_speed: Option<f64>,
    pub map: Option<ActivityMap>,
}

/// Map data within the detail object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityMap {
    pub summary_polyline: Option<String>,
}

/// Activity record persisted to the static snapshot.
///
/// Carries no positional data: there is no field that could hold a map,
/// polyline or coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SanitizedActivity {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub workout_type: Option<i64>,
    pub start_date_local: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub moving_time: u64,
    /// Elevation gain in meters
    pub total_elevation_gain: f64,
    /// Average speed in m/s
    pub average_speed: f64,
}

impl From<&RawActivityRecord> for SanitizedActivity {
    fn from(raw: &RawActivityRecord) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            name: raw.name.clone().unwrap_or_default(),
            activity_type: raw.activity_type.clone().unwrap_or_default(),
            workout_type: raw.workout_type,
            start_date_local: raw.start_date_local.clone().unwrap_or_default(),
            distance: raw.distance.unwrap_or_default(),
            moving_time: whole_seconds(raw.moving_time),
            total_elevation_gain: raw.total_elevation_gain.unwrap_or_default(),
            average_speed: raw.average_speed.unwrap_or_default(),
        }
    }
}

impl SanitizedActivity {
    pub fn is_run(&self) -> bool {
        self.activity_type == "Run"
    }

    pub fn is_race(&self) -> bool {
        self.is_run() && self.workout_type == Some(RACE_WORKOUT_TYPE)
    }

    pub fn start_date(&self) -> Timestamp {
        Timestamp::parse(&self.start_date_local)
    }
}

/// Where a normalized field comes from.
///
/// Detail fields win. Identity fields (`id`, `name`, `type`, start date) fall
/// back when the detail value is missing *or* falsy (zero, empty); numeric
/// metrics fall back only when the detail value is missing, so an explicit
/// zero in the detail is kept. The asymmetry is long-standing observable
/// behavior and is kept as is.
#[derive(Debug, Clone, Copy)]
enum FieldSource<'a> {
    Detailed {
        detail: &'a ActivityDetail,
        record: &'a RawActivityRecord,
    },
    Summary(&'a RawActivityRecord),
}

impl<'a> FieldSource<'a> {
    fn of(record: &'a RawActivityRecord) -> Self {
        match &record.data_json {
            Some(detail) => FieldSource::Detailed { detail, record },
            None => FieldSource::Summary(record),
        }
    }

    fn record(self) -> &'a RawActivityRecord {
        match self {
            FieldSource::Detailed { record, .. } | FieldSource::Summary(record) => record,
        }
    }

    fn detail(self) -> Option<&'a ActivityDetail> {
        match self {
            FieldSource::Detailed { detail, .. } => Some(detail),
            FieldSource::Summary(_) => None,
        }
    }

    fn id(self) -> u64 {
        self.detail()
            .and_then(|d| d.id)
            .filter(|id| *id != 0)
            .or(self.record().id)
            .unwrap_or_default()
    }

    fn name(self) -> String {
        truthy_str(self.detail().and_then(|d| d.name.as_deref()))
            .or(self.record().name.as_deref())
            .unwrap_or_default()
            .to_string()
    }

    fn activity_type(self) -> String {
        truthy_str(self.detail().and_then(|d| d.activity_type.as_deref()))
            .or(self.record().activity_type.as_deref())
            .unwrap_or_default()
            .to_string()
    }

    fn start_date(self) -> Timestamp {
        let raw = truthy_str(self.detail().and_then(|d| d.start_date_local.as_deref()))
            .or(self.record().start_date.as_deref());
        Timestamp::parse_opt(raw)
    }

    fn distance(self) -> f64 {
        self.detail()
            .and_then(|d| d.distance)
            .or(self.record().distance)
            .unwrap_or_default()
    }

    fn moving_time(self) -> u64 {
        whole_seconds(
            self.detail()
                .and_then(|d| d.moving_time)
                .or(self.record().moving_time),
        )
    }

    fn elapsed_time(self) -> u64 {
        whole_seconds(
            self.detail()
                .and_then(|d| d.elapsed_time)
                .or(self.record().elapsed_time),
        )
    }

    fn elevation_gain(self) -> f64 {
        self.detail()
            .and_then(|d| d.total_elevation_gain)
            .or(self.record().total_elevation_gain)
            .unwrap_or_default()
    }

    fn average_speed(self) -> f64 {
        self.detail()
            .and_then(|d| d.average_speed)
            .or(self.record().average_speed)
            .unwrap_or(0.0)
    }

    fn route(self) -> Vec<(f64, f64)> {
        let encoded = self
            .detail()
            .and_then(|d| d.map.as_ref())
            .and_then(|m| truthy_str(m.summary_polyline.as_deref()));

        match encoded {
            Some(encoded) => decode_route(encoded),
            None => Vec::new(),
        }
    }
}

fn truthy_str(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Truncate a duration to whole seconds; negative or non-finite values become 0.
fn whole_seconds(value: Option<f64>) -> u64 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.trunc() as u64)
        .unwrap_or_default()
}

/// Decode a Strava summary polyline (precision 5) into `(lat, lng)` pairs.
///
/// Malformed input yields an empty route.
pub fn decode_route(encoded: &str) -> Vec<(f64, f64)> {
    match polyline::decode_polyline(encoded, 5) {
        Ok(line) => line.0.iter().map(|c| (c.y, c.x)).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode polyline, dropping route");
            Vec::new()
        }
    }
}

/// Bounding box of one or more routes, as south-west and north-east
/// `(lat, lng)` corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RouteBounds {
    pub south_west: (f64, f64),
    pub north_east: (f64, f64),
}

impl RouteBounds {
    /// Box around every `(lat, lng)` point; `None` when there are none.
    pub fn around<'a>(points: impl IntoIterator<Item = &'a (f64, f64)>) -> Option<Self> {
        let line: LineString<f64> = points.into_iter().map(|&(lat, lng)| (lng, lat)).collect();
        line.bounding_rect().map(|rect| RouteBounds {
            south_west: (rect.min().y, rect.min().x),
            north_east: (rect.max().y, rect.max().x),
        })
    }

    /// Box around every route in `activities`, for the all-activities map.
    pub fn all_routes(activities: &[Activity]) -> Option<Self> {
        Self::around(activities.iter().flat_map(|a| a.route.iter()))
    }
}

/// Normalized activity for display. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: u64,
    pub name: String,
    pub activity_type: String,
    pub start_date: Timestamp,
    /// meters
    pub distance: f64,
    /// seconds
    pub moving_time: u64,
    /// seconds
    pub elapsed_time: u64,
    /// meters
    pub elevation_gain: f64,
    /// m/s, zero when unknown
    pub average_speed: f64,
    /// `(lat, lng)` pairs in route order
    pub route: Vec<(f64, f64)>,
}

impl From<&RawActivityRecord> for Activity {
    fn from(record: &RawActivityRecord) -> Self {
        let source = FieldSource::of(record);
        Self {
            id: source.id(),
            name: source.name(),
            activity_type: source.activity_type(),
            start_date: source.start_date(),
            distance: source.distance(),
            moving_time: source.moving_time(),
            elapsed_time: source.elapsed_time(),
            elevation_gain: source.elevation_gain(),
            average_speed: source.average_speed(),
            route: source.route(),
        }
    }
}

impl From<&SanitizedActivity> for Activity {
    fn from(record: &SanitizedActivity) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            activity_type: record.activity_type.clone(),
            start_date: record.start_date(),
            distance: record.distance,
            moving_time: record.moving_time,
            // not persisted in the snapshot
            elapsed_time: record.moving_time,
            elevation_gain: record.total_elevation_gain,
            average_speed: record.average_speed,
            route: Vec::new(),
        }
    }
}

impl Activity {
    pub fn formatted_distance(&self, units: UnitSystem) -> String {
        format::format_distance(self.distance, units)
    }

    pub fn formatted_elevation(&self, units: UnitSystem) -> String {
        format::format_elevation(self.elevation_gain, units)
    }

    pub fn formatted_moving_time(&self) -> String {
        format::format_moving_time(self.moving_time)
    }

    pub fn formatted_pace(&self, units: UnitSystem) -> String {
        format::format_pace(self.average_speed, units)
    }

    /// `DD/MM/YYYY`, or `InvalidDate` when the start date could not be parsed.
    pub fn formatted_date(&self) -> Result<String, AppError> {
        time_utils::format_date(self.start_date)
    }

    /// Bounds to fit a map to this route; `None` when there is no route.
    pub fn route_bounds(&self) -> Option<RouteBounds> {
        RouteBounds::around(&self.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Google's reference polyline
    const SAMPLE_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn detailed_record() -> RawActivityRecord {
        serde_json::from_value(json!({
            "id": 123,
            "name": "Morning Run",
            "type": "Run",
            "start_date": "2023-01-01T08:00:00Z",
            "distance": 10000,
            "moving_time": 3600,
            "elapsed_time": 3600,
            "total_elevation_gain": 100,
            "average_speed": 2.77,
            "data_json": {
                "id": 123,
                "name": "Morning Run",
                "type": "Run",
                "start_date_local": "2023-01-01T08:00:00Z",
                "distance": 10000,
                "moving_time": 3600,
                "elapsed_time": 3600,
                "total_elevation_gain": 100,
                "average_speed": 2.77,
                "map": { "summary_polyline": SAMPLE_POLYLINE }
            }
        }))
        .unwrap()
    }

    fn assert_close(a: (f64, f64), b: (f64, f64)) {
        assert!((a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_parse_basic_fields() {
        let activity = Activity::from(&detailed_record());
        assert_eq!(activity.id, 123);
        assert_eq!(activity.name, "Morning Run");
        assert_eq!(activity.activity_type, "Run");
        assert_eq!(activity.distance, 10000.0);
        assert_eq!(activity.moving_time, 3600);
        assert_eq!(activity.elevation_gain, 100.0);
        assert_eq!(activity.formatted_distance(UnitSystem::Metric), "10.00 km");
        assert_eq!(activity.formatted_moving_time(), "1:00:00");
        assert_eq!(activity.formatted_pace(UnitSystem::Metric), "6:01 /km");
        assert_eq!(activity.formatted_date().unwrap(), "01/01/2023");
    }

    #[test]
    fn test_route_decoded_from_detail() {
        let activity = Activity::from(&detailed_record());
        assert_eq!(activity.route.len(), 3);
        assert_close(activity.route[0], (38.5, -120.2));
        assert_close(activity.route[1], (40.7, -120.95));
        assert_close(activity.route[2], (43.252, -126.453));
    }

    #[test]
    fn test_route_bounds() {
        let activity = Activity::from(&detailed_record());
        let bounds = activity.route_bounds().expect("route has points");
        assert_close(bounds.south_west, (38.5, -126.453));
        assert_close(bounds.north_east, (43.252, -120.2));
    }

    #[test]
    fn test_missing_detail_falls_back_to_top_level() {
        let record: RawActivityRecord = serde_json::from_value(json!({
            "id": 456,
            "name": "Simple Run",
            "type": "Run",
            "start_date": "2023-02-01T10:00:00Z",
            "distance": 5000,
            "moving_time": 1800,
            "elapsed_time": 1900,
            "total_elevation_gain": 50,
            "average_speed": 2.5,
            "map": { "summary_polyline": SAMPLE_POLYLINE }
        }))
        .unwrap();

        let activity = Activity::from(&record);
        assert_eq!(activity.id, 456);
        assert_eq!(activity.name, "Simple Run");
        assert_eq!(activity.activity_type, "Run");
        assert_eq!(activity.formatted_date().unwrap(), "01/02/2023");
        assert_eq!(activity.distance, 5000.0);
        assert_eq!(activity.moving_time, 1800);
        assert_eq!(activity.elapsed_time, 1900);
        assert_eq!(activity.elevation_gain, 50.0);
        assert_eq!(activity.average_speed, 2.5);
        // Only the detail object's map is ever decoded
        assert!(activity.route.is_empty());
        assert!(activity.route_bounds().is_none());
        assert_eq!(activity.formatted_distance(UnitSystem::Metric), "5.00 km");
    }

    #[test]
    fn test_average_speed_defaults_to_zero() {
        let record: RawActivityRecord =
            serde_json::from_value(json!({ "id": 1, "name": "Walk", "type": "Walk" })).unwrap();
        let activity = Activity::from(&record);
        assert_eq!(activity.average_speed, 0.0);
        assert_eq!(activity.formatted_pace(UnitSystem::Imperial), "0:00 /mi");
    }

    #[test]
    fn test_zero_detail_metric_is_kept() {
        let record: RawActivityRecord = serde_json::from_value(json!({
            "id": 7,
            "distance": 5000,
            "average_speed": 3.0,
            "data_json": { "distance": 0, "average_speed": 0 }
        }))
        .unwrap();
        let activity = Activity::from(&record);
        assert_eq!(activity.distance, 0.0);
        assert_eq!(activity.average_speed, 0.0);
    }

    #[test]
    fn test_falsy_detail_identity_falls_through() {
        let record: RawActivityRecord = serde_json::from_value(json!({
            "id": 99,
            "name": "Top Level",
            "type": "Ride",
            "start_date": "2022-03-04T05:06:07Z",
            "data_json": { "id": 0, "name": "", "type": null, "start_date_local": "" }
        }))
        .unwrap();
        let activity = Activity::from(&record);
        assert_eq!(activity.id, 99);
        assert_eq!(activity.name, "Top Level");
        assert_eq!(activity.activity_type, "Ride");
        assert_eq!(activity.formatted_date().unwrap(), "04/03/2022");
    }

    #[test]
    fn test_unparseable_date_raises() {
        let record: RawActivityRecord =
            serde_json::from_value(json!({ "id": 1, "start_date": "yesterday" })).unwrap();
        let activity = Activity::from(&record);
        assert!(matches!(activity.formatted_date(), Err(AppError::InvalidDate)));
    }

    #[test]
    fn test_malformed_polyline_gives_empty_route() {
        assert!(decode_route("invalid!!!").is_empty());
    }

    #[test]
    fn test_sanitize_drops_location_fields() {
        let record: RawActivityRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Lunch Run",
            "type": "Run",
            "workout_type": 1,
            "start_date_local": "2024-05-01T12:00:00Z",
            "distance": 8000.5,
            "moving_time": 2400,
            "total_elevation_gain": 42.0,
            "average_speed": 3.33,
            "map": { "id": "a1", "summary_polyline": SAMPLE_POLYLINE },
            "start_latlng": [37.4, -122.1],
            "end_latlng": [37.5, -122.2]
        }))
        .unwrap();

        let sanitized = SanitizedActivity::from(&record);
        let value = serde_json::to_value(&sanitized).unwrap();
        let object = value.as_object().unwrap();

        assert!(!object.contains_key("map"));
        assert!(!object.contains_key("start_latlng"));
        assert!(!object.contains_key("end_latlng"));
        assert_eq!(object["type"], "Run");
        assert_eq!(object["workout_type"], 1);
        assert_eq!(object["distance"], 8000.5);
        assert!(sanitized.is_race());
    }

    #[test]
    fn test_float_durations_are_accepted() {
        let records: Vec<RawActivityRecord> = serde_json::from_value(json!([
            { "id": 1, "moving_time": 3000.0, "elapsed_time": 3100.7 },
            { "id": 2 }
        ]))
        .unwrap();

        let activity = Activity::from(&records[0]);
        assert_eq!(activity.moving_time, 3000);
        assert_eq!(activity.elapsed_time, 3100);
        assert_eq!(SanitizedActivity::from(&records[0]).moving_time, 3000);
        assert_eq!(Activity::from(&records[1]).moving_time, 0);
    }

    #[test]
    fn test_all_routes_bounds_spans_every_route() {
        let mut east = Activity::from(&detailed_record());
        east.route = vec![(51.50, -0.10), (51.52, -0.08)];
        let mut west = east.clone();
        west.route = vec![(51.48, -0.20)];
        let no_route = Activity::from(&RawActivityRecord::default());

        let bounds = RouteBounds::all_routes(&[east, no_route, west]).expect("has points");
        assert_close(bounds.south_west, (51.48, -0.20));
        assert_close(bounds.north_east, (51.52, -0.08));
    }

    #[test]
    fn test_all_routes_bounds_empty() {
        let no_route = Activity::from(&RawActivityRecord::default());
        assert!(RouteBounds::all_routes(&[no_route]).is_none());
        assert!(RouteBounds::all_routes(&[]).is_none());
    }
}
