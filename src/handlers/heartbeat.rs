//! Heartbeat endpoint handler.
//!
//! Returns server status information, including uptime and a summary of the
//! loaded dataset.

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use crate::state::AppState;

/// Random server ID, generated once per process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(|| SystemTime::now());

/// Heartbeat response structure
#[derive(Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Dataset information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Serialize)]
pub struct DatasetInfo {
    /// Where the records were loaded from
    pub source: String,
    pub station_count: usize,
    pub measurement_count: usize,
    /// End of the "last 12 months" window
    pub latest_date: Option<String>,
    /// Station reported by /api/v1.0/tobs
    pub most_active_station: Option<String>,
}

/// Record the server start time; call once at startup
pub fn mark_start_time() {
    once_cell::sync::Lazy::force(&START_TIME);
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Json<HeartbeatResponse> {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let dataset = DatasetInfo {
        source: state.source.clone(),
        station_count: state.store.stations().len(),
        measurement_count: state.store.measurements().len(),
        latest_date: state.latest_date.map(|date| date.to_string()),
        most_active_station: state.active_station.clone(),
    };

    Json(HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset,
        status: "healthy".to_string(),
    })
}
