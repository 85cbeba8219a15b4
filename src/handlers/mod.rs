//! HTTP request handlers for the surfsup API.
//!
//! This module contains all the endpoint handlers for the web server.

pub mod heartbeat;
pub mod home;
pub mod not_found;
pub mod precipitation;
pub mod stations;
pub mod stats;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use home::home_handler;
pub use not_found::not_found_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use stats::{stats_between_handler, stats_from_handler};
pub use tobs::tobs_handler;
