//! Temperature observation endpoint handler.

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

use crate::logging::{generate_request_id, log_timed_query};
use crate::queries::{station_temperatures, StationTemperatures};
use crate::state::AppState;

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Json<StationTemperatures> {
    let request_id = generate_request_id();

    let temperatures = log_timed_query("/api/v1.0/tobs", &request_id, || {
        station_temperatures(
            &state.store,
            state.active_station.as_deref(),
            state.latest_date,
        )
    });

    debug!(
        request_id = %request_id,
        station = ?state.active_station,
        rows = temperatures.readings.len(),
        "Temperature observations collected"
    );

    Json(temperatures)
}
