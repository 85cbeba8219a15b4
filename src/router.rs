//! Route table for the surfsup API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers::{
    heartbeat_handler, home_handler, not_found_handler, precipitation_handler, stations_handler,
    stats_between_handler, stats_from_handler, tobs_handler,
};
use crate::logging::create_http_trace_layer;
use crate::state::AppState;

/// Build the application router over a loaded state
///
/// The fixed `/api/v1.0/...` routes take priority over the `:start` catch-all.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/heartbeat", get(heartbeat_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(stats_from_handler))
        .route("/api/v1.0/:start/:end", get(stats_between_handler))
        .fallback(not_found_handler)
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
