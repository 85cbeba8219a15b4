//! Stations endpoint handler.
//!
//! Returns every measurement joined with its station's metadata, ordered by
//! station name.

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

use crate::logging::{generate_request_id, log_timed_query};
use crate::queries::{station_measurements, StationMeasurement};
use crate::state::AppState;

/// Handle GET /api/v1.0/stations requests
pub async fn stations_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<StationMeasurement>> {
    let request_id = generate_request_id();

    let rows = log_timed_query("/api/v1.0/stations", &request_id, || {
        station_measurements(&state.store)
    });

    debug!(
        request_id = %request_id,
        rows = rows.len(),
        "Station rows joined"
    );

    Json(rows)
}
