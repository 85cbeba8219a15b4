//! Precipitation endpoint handler.
//!
//! Returns every precipitation reading of the last 12 months of the dataset.

use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

use crate::logging::{generate_request_id, log_timed_query};
use crate::queries::{recent_precipitation, PrecipitationReading};
use crate::state::AppState;

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<PrecipitationReading>> {
    let request_id = generate_request_id();

    let readings = log_timed_query("/api/v1.0/precipitation", &request_id, || {
        recent_precipitation(&state.store, state.latest_date)
    });

    debug!(
        request_id = %request_id,
        rows = readings.len(),
        "Precipitation readings collected"
    );

    Json(readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::{Measurement, RecordStore};

    #[tokio::test]
    async fn test_precipitation_handler() {
        let measurement = |date: &str, prcp: Option<f64>| Measurement {
            station: "USC00519397".to_string(),
            date: date.to_string(),
            prcp,
            tobs: 75.0,
        };
        let store = RecordStore::new(
            vec![],
            vec![
                measurement("2016-08-22", Some(0.1)),
                measurement("2016-08-23", None),
                measurement("2017-08-23", Some(0.0)),
            ],
        );
        let state = AppState::new_shared(Config::default(), store, "memory").unwrap();

        let Json(readings) = precipitation_handler(State(state)).await;
        let json = serde_json::to_value(&readings).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"date": "2016-08-23", "prcp": null},
                {"date": "2017-08-23", "prcp": 0.0}
            ])
        );
    }
}
