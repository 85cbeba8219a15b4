//! # surfsup
//!
//! A small, read-only JSON API over the Hawaii weather-station climate
//! dataset.
//!
//! The dataset (stations plus daily precipitation and temperature
//! measurements) is loaded into memory once at startup, from either the
//! published SQLite snapshot or its CSV exports, and then served through a
//! handful of query endpoints.
//!
//! ## Architecture
//!
//! - **Record store**: immutable in-memory stations and measurements
//! - **Query layer**: pure functions, one per endpoint
//! - **API layer**: axum routes over a shared [`AppState`]

pub mod config;
pub mod data_loader;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod queries;
pub mod router;
pub mod state;
pub mod store;

pub use config::Config;
pub use data_loader::{load_dataset, DatasetSource};
pub use error::{Result, SurfsUpError};
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_data_load_stats, log_error,
    log_operation_end, log_operation_start, log_timed_query,
};
pub use router::create_router;
pub use state::AppState;
pub use store::{Measurement, RecordStore, Station};
