// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes backing the running pages.

use crate::error::Result;
use crate::models::{derive_view, Activity, ActivityFilter, RouteBounds, UnitSystem};
use crate::services::BuildInfo;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(get_activities))
        .route("/api/running", get(get_running))
        .route("/api/build-info", get(get_build_info))
}

// ─── Activity List (snapshot) ────────────────────────────────

#[derive(Deserialize)]
struct ActivitiesQuery {
    #[serde(default)]
    filter: ActivityFilter,
    #[serde(default)]
    units: UnitSystem,
}

/// One row of the activity table.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRow {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    /// `None` when the start date could not be parsed; see `invalid_date`.
    pub date: Option<String>,
    pub invalid_date: bool,
    pub distance: String,
    pub moving_time: String,
    pub pace: String,
    pub elevation: String,
    pub race: bool,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub filter: ActivityFilter,
    pub units: UnitSystem,
    pub activities: Vec<ActivityRow>,
}

/// Formatted date for one row. An invalid date stays confined to its row.
fn row_date(activity: &Activity) -> Option<String> {
    activity
        .formatted_date()
        .map_err(|e| tracing::warn!(id = activity.id, error = %e, "Skipping start date"))
        .ok()
}

/// Filtered, most-recent-first view over the snapshot.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Json<ActivitiesResponse> {
    let activities = derive_view(&state.activities, params.filter)
        .into_iter()
        .map(|record| {
            let activity = Activity::from(record);
            let date = row_date(&activity);
            ActivityRow {
                id: activity.id,
                invalid_date: date.is_none(),
                date,
                distance: activity.formatted_distance(params.units),
                moving_time: activity.formatted_moving_time(),
                pace: activity.formatted_pace(params.units),
                elevation: activity.formatted_elevation(params.units),
                race: record.is_race(),
                name: activity.name,
            }
        })
        .collect();

    Json(ActivitiesResponse {
        filter: params.filter,
        units: params.units,
        activities,
    })
}

// ─── Running Page (runtime feed) ─────────────────────────────

#[derive(Deserialize)]
struct UnitsQuery {
    #[serde(default)]
    units: UnitSystem,
}

/// A fully formatted activity for the running page, with its route.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RunningActivity {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub date: Option<String>,
    pub invalid_date: bool,
    pub distance: String,
    pub moving_time: String,
    pub pace: String,
    pub elevation: String,
    pub route: Vec<(f64, f64)>,
    pub bounds: Option<RouteBounds>,
}

impl RunningActivity {
    fn build(activity: Activity, units: UnitSystem) -> Self {
        let date = row_date(&activity);
        Self {
            id: activity.id,
            invalid_date: date.is_none(),
            date,
            distance: activity.formatted_distance(units),
            moving_time: activity.formatted_moving_time(),
            pace: activity.formatted_pace(units),
            elevation: activity.formatted_elevation(units),
            bounds: activity.route_bounds(),
            name: activity.name,
            activity_type: activity.activity_type,
            route: activity.route,
        }
    }
}

/// Running page state. Failures become an inline message, never a 5xx.
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RunningView {
    Loaded {
        activities: Vec<RunningActivity>,
        /// Fits the all-activities map; `None` when no activity has a route.
        bounds: Option<RouteBounds>,
    },
    Error { message: String },
}

async fn get_running(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UnitsQuery>,
) -> Json<RunningView> {
    let view = match load_running(&state, params.units).await {
        Ok((activities, bounds)) => RunningView::Loaded { activities, bounds },
        Err(e) => {
            tracing::warn!(error = %e, "Running page failed to load");
            RunningView::Error {
                message: e.to_string(),
            }
        }
    };

    Json(view)
}

async fn load_running(
    state: &AppState,
    units: UnitSystem,
) -> Result<(Vec<RunningActivity>, Option<RouteBounds>)> {
    let activities = state.feed.fetch_activities().await?;
    let bounds = RouteBounds::all_routes(&activities);
    let activities = activities
        .into_iter()
        .map(|activity| RunningActivity::build(activity, units))
        .collect();

    Ok((activities, bounds))
}

// ─── Build Info ──────────────────────────────────────────────

async fn get_build_info(State(state): State<Arc<AppState>>) -> Json<BuildInfo> {
    Json(BuildInfo::new(state.config.build_timestamp.as_deref()))
}
