//! The in-memory record store.
//!
//! Holds the two record kinds of the dataset exactly as loaded. The store is
//! never mutated after construction, so it is shared between request tasks
//! through an `Arc` without any locking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::DATE_FORMAT;
use crate::error::{Result, SurfsUpError};

/// A weather-observation site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station code, unique within the dataset
    pub station: String,
    /// Display name
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// One daily observation at a station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Code of the station this observation belongs to
    pub station: String,
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation, missing on some days
    pub prcp: Option<f64>,
    /// Temperature observation
    pub tobs: f64,
}

/// Read-only collection of all stations and measurements
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
}

impl RecordStore {
    /// Create a store from already loaded records, keeping their order
    pub fn new(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        Self {
            stations,
            measurements,
        }
    }

    /// All stations in storage order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All measurements in storage order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// The lexicographically greatest measurement date, as stored
    pub fn latest_date_str(&self) -> Option<&str> {
        self.measurements.iter().map(|m| m.date.as_str()).max()
    }

    /// The latest measurement date, parsed
    ///
    /// Returns `Ok(None)` for a store without measurements.
    pub fn latest_date(&self) -> Result<Option<NaiveDate>> {
        self.latest_date_str()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| SurfsUpError::Dataset {
                    message: format!("Latest measurement date '{}' is not YYYY-MM-DD: {}", raw, e),
                })
            })
            .transpose()
    }

    /// Number of measurements recorded per station code
    pub fn measurement_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for measurement in &self.measurements {
            *counts.entry(measurement.station.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Station codes ordered by measurement count, busiest first
    ///
    /// Equal counts are ordered by station code so the result is deterministic.
    pub fn stations_by_activity(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.measurement_counts().into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// The station code with the most measurements
    pub fn most_active_station(&self) -> Option<&str> {
        self.stations_by_activity().first().map(|(code, _)| *code)
    }

    /// Check that the store is usable for serving queries
    pub fn validate(&self) -> Result<()> {
        if let Some(station) = self.stations.iter().find(|s| s.station.trim().is_empty()) {
            return Err(SurfsUpError::Dataset {
                message: format!("Station '{}' has an empty station code", station.name),
            });
        }

        if let Some(measurement) = self
            .measurements
            .iter()
            .find(|m| m.station.trim().is_empty())
        {
            return Err(SurfsUpError::Dataset {
                message: format!("Measurement on {} has an empty station code", measurement.date),
            });
        }

        self.latest_date()?;

        Ok(())
    }
}
