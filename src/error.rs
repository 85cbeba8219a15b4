//! Error types for the surfsup application.
//!
//! Every fallible operation in the crate returns [`SurfsUpError`]. Queries
//! themselves never fail once the dataset is loaded, so almost all of these
//! variants surface during startup.

use thiserror::Error;

/// The main error type for surfsup operations.
#[derive(Error, Debug)]
pub enum SurfsUpError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// SQLite access errors
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Dataset contents are unusable
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Convenience type alias for Results with SurfsUpError
pub type Result<T> = std::result::Result<T, SurfsUpError>;
