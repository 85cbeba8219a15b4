//! Temperature statistics endpoint handlers.
//!
//! Dates arrive as raw path segments and are compared as strings, so a
//! malformed date yields null statistics rather than an error response.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::logging::{generate_request_id, log_timed_query};
use crate::queries::{temperature_stats_between, temperature_stats_from, TemperatureStats};
use crate::state::AppState;

/// Handle GET /api/v1.0/:start requests
pub async fn stats_from_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Json<TemperatureStats> {
    let request_id = generate_request_id();

    Json(log_timed_query("/api/v1.0/:start", &request_id, || {
        temperature_stats_from(&state.store, &start)
    }))
}

/// Handle GET /api/v1.0/:start/:end requests
pub async fn stats_between_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Json<TemperatureStats> {
    let request_id = generate_request_id();

    Json(log_timed_query("/api/v1.0/:start/:end", &request_id, || {
        temperature_stats_between(&state.store, &start, &end)
    }))
}
