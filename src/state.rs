//! Application state management for surfsup.
//!
//! This module defines the shared state that is passed to all handlers,
//! containing the loaded record store and the reference values derived
//! from it once at startup.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::store::RecordStore;

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Loaded records
    pub store: RecordStore,
    /// Human readable description of where the records came from
    pub source: String,
    /// Date the "last 12 months" window ends at
    pub latest_date: Option<NaiveDate>,
    /// Station whose temperatures `/api/v1.0/tobs` reports
    pub active_station: Option<String>,
}

impl AppState {
    /// Create a new AppState, resolving the reference date and active station
    ///
    /// Configured overrides win; otherwise both are derived from the records.
    pub fn new(config: Config, store: RecordStore, source: impl Into<String>) -> Result<Self> {
        let latest_date = match config.reference_date()? {
            Some(date) => Some(date),
            None => store.latest_date()?,
        };

        let active_station = config
            .data
            .active_station
            .clone()
            .or_else(|| store.most_active_station().map(str::to_string));

        Ok(Self {
            config,
            store,
            source: source.into(),
            latest_date,
            active_station,
        })
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(
        config: Config,
        store: RecordStore,
        source: impl Into<String>,
    ) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::new(config, store, source)?))
    }

    /// Validate that the application state is consistent and ready for use
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        self.store.validate()
    }
}
