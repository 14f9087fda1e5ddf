// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use homepage_running::config::Config;
use homepage_running::models::SanitizedActivity;
use homepage_running::routes::create_router;
use homepage_running::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

/// A Strava summary activity including the location fields we must drop.
#[allow(dead_code)]
pub fn strava_summary(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "Run",
        "sport_type": "Run",
        "workout_type": null,
        "start_date": "2024-05-01T19:00:00Z",
        "start_date_local": "2024-05-01T12:00:00Z",
        "distance": 10000.0,
        "moving_time": 3000,
        "elapsed_time": 3100,
        "total_elevation_gain": 55.2,
        "average_speed": 3.333,
        "start_latlng": [37.42, -122.08],
        "end_latlng": [37.43, -122.09],
        "map": {
            "id": format!("a{}", id),
            "summary_polyline": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
            "resource_state": 2
        }
    })
}

/// A snapshot record.
#[allow(dead_code)]
pub fn snapshot_activity(
    id: u64,
    activity_type: &str,
    workout_type: Option<i64>,
    start_date_local: &str,
) -> SanitizedActivity {
    SanitizedActivity {
        id,
        name: format!("Activity {}", id),
        activity_type: activity_type.to_string(),
        workout_type,
        start_date_local: start_date_local.to_string(),
        distance: 10000.0,
        moving_time: 3600,
        total_elevation_gain: 100.0,
        average_speed: 2.77,
    }
}

/// Config pointing the provider and feed at a mock server.
#[allow(dead_code)]
pub fn mock_config(server_uri: &str) -> Config {
    Config {
        strava_api_url: format!("{}/api/v3", server_uri),
        strava_token_url: format!("{}/oauth/token", server_uri),
        activity_feed_url: format!("{}/api/users/1/activities", server_uri),
        ..Config::test_default()
    }
}

/// Create a test app over the given snapshot.
#[allow(dead_code)]
pub fn create_test_app(config: Config, activities: Vec<SanitizedActivity>) -> axum::Router {
    create_router(Arc::new(AppState::new(config, activities)))
}
