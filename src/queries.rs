//! Query layer.
//!
//! One pure function per API endpoint. Every function borrows the
//! [`RecordStore`] and never mutates it, so any number of them may run at
//! once against the same store.
//!
//! Dates are compared as plain `YYYY-MM-DD` strings. Caller-supplied dates
//! are never parsed: a malformed date simply matches nothing (or everything),
//! it does not produce an error.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::DATE_FORMAT;
use crate::store::{Measurement, RecordStore, Station};

/// Length of the "last 12 months" window, in days
pub const RECENT_WINDOW_DAYS: i64 = 365;

/// A single precipitation reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One row of the station/measurement join
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMeasurement {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

impl StationMeasurement {
    fn join(station: &Station, measurement: &Measurement) -> Self {
        Self {
            station: station.station.clone(),
            name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            elevation: station.elevation,
            date: measurement.date.clone(),
            prcp: measurement.prcp,
            tobs: measurement.tobs,
        }
    }
}

/// A single temperature observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

/// Temperature observations of one station, keyed the way the API has always returned them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationTemperatures {
    /// Human readable label naming the station
    #[serde(rename = "1")]
    pub label: String,
    #[serde(rename = "2")]
    pub readings: Vec<TemperatureReading>,
}

/// Min/max/average temperature; all `None` when nothing matched
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TemperatureStats {
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub avg_temp: Option<f64>,
}

/// First date of the 12-month window ending at `latest`, as a comparable string
pub fn cutoff_date(latest: NaiveDate) -> String {
    (latest - Duration::days(RECENT_WINDOW_DAYS))
        .format(DATE_FORMAT)
        .to_string()
}

/// Date and precipitation of every measurement in the last 12 months
///
/// `latest` is the reference date the window ends at; without one (empty
/// dataset) the result is empty. Missing precipitation stays `None`.
pub fn recent_precipitation(
    store: &RecordStore,
    latest: Option<NaiveDate>,
) -> Vec<PrecipitationReading> {
    let Some(latest) = latest else {
        return Vec::new();
    };
    let cutoff = cutoff_date(latest);

    store
        .measurements()
        .iter()
        .filter(|m| m.date.as_str() >= cutoff.as_str())
        .map(|m| PrecipitationReading {
            date: m.date.clone(),
            prcp: m.prcp,
        })
        .collect()
}

/// Every measurement joined with its station, ordered by station name
///
/// Measurements whose station code has no station are left out. The sort is
/// stable, so rows of equally named stations keep storage order.
pub fn station_measurements(store: &RecordStore) -> Vec<StationMeasurement> {
    let mut by_station: HashMap<&str, Vec<&Measurement>> = HashMap::new();
    for measurement in store.measurements() {
        by_station
            .entry(measurement.station.as_str())
            .or_default()
            .push(measurement);
    }

    let mut stations: Vec<&Station> = store.stations().iter().collect();
    stations.sort_by(|a, b| a.name.cmp(&b.name));

    stations
        .into_iter()
        .flat_map(|station| {
            by_station
                .get(station.station.as_str())
                .into_iter()
                .flatten()
                .map(move |measurement| StationMeasurement::join(station, measurement))
        })
        .collect()
}

/// Last 12 months of temperature observations for `station`
pub fn station_temperatures(
    store: &RecordStore,
    station: Option<&str>,
    latest: Option<NaiveDate>,
) -> StationTemperatures {
    let label = format!(
        "Data for the most active station ({})",
        station.unwrap_or("none")
    );

    let readings = match (station, latest) {
        (Some(station), Some(latest)) => {
            let cutoff = cutoff_date(latest);
            store
                .measurements()
                .iter()
                .filter(|m| m.date.as_str() >= cutoff.as_str() && m.station == station)
                .map(|m| TemperatureReading {
                    date: m.date.clone(),
                    tobs: m.tobs,
                })
                .collect()
        }
        _ => Vec::new(),
    };

    StationTemperatures { label, readings }
}

/// Temperature statistics for every measurement dated `start` or later
pub fn temperature_stats_from(store: &RecordStore, start: &str) -> TemperatureStats {
    aggregate_temperatures(
        store
            .measurements()
            .iter()
            .filter(|m| m.date.as_str() >= start),
    )
}

/// Temperature statistics for measurements dated between `start` and `end`, inclusive
pub fn temperature_stats_between(store: &RecordStore, start: &str, end: &str) -> TemperatureStats {
    aggregate_temperatures(
        store
            .measurements()
            .iter()
            .filter(|m| m.date.as_str() >= start && m.date.as_str() <= end),
    )
}

fn aggregate_temperatures<'a>(
    measurements: impl Iterator<Item = &'a Measurement>,
) -> TemperatureStats {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for measurement in measurements {
        count += 1;
        sum += measurement.tobs;
        min = min.min(measurement.tobs);
        max = max.max(measurement.tobs);
    }

    if count == 0 {
        return TemperatureStats::default();
    }

    TemperatureStats {
        min_temp: Some(min),
        max_temp: Some(max),
        avg_temp: Some(sum / count as f64),
    }
}
