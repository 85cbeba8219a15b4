//! Configuration management for surfsup.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SurfsUpError};

/// Date format used by every date in the dataset
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Command-line arguments for surfsup
#[derive(Parser, Debug)]
#[command(name = "surfsup")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the dataset: a SQLite file, or a directory holding the CSV exports
    pub dataset: Option<PathBuf>,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "SURFSUP_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SURFSUP_PORT")]
    pub port: Option<u16>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "SURFSUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SURFSUP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Pin the dataset's latest date (YYYY-MM-DD) instead of deriving it
    #[arg(long, env = "SURFSUP_REFERENCE_DATE")]
    pub reference_date: Option<String>,

    /// Pin the most active station code instead of deriving it
    #[arg(long, env = "SURFSUP_ACTIVE_STATION")]
    pub active_station: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the dataset
    #[serde(default)]
    pub file_path: Option<PathBuf>,

    /// Station CSV file name, relative to a dataset directory
    #[serde(default = "default_stations_file")]
    pub stations_file: String,

    /// Measurement CSV file name, relative to a dataset directory
    #[serde(default = "default_measurements_file")]
    pub measurements_file: String,

    /// Latest date override; derived from the measurements when unset
    #[serde(default)]
    pub reference_date: Option<String>,

    /// Most active station override; derived from the measurements when unset
    #[serde(default)]
    pub active_station: Option<String>,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        Self::from_args(Args::parse())
    }

    /// Build a configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments and environment
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }
        if args.reference_date.is_some() {
            config.data.reference_date = args.reference_date;
        }
        if args.active_station.is_some() {
            config.data.active_station = args.active_station;
        }
        if args.dataset.is_some() {
            config.data.file_path = args.dataset;
        }

        let dataset_path = config.data.file_path.clone().ok_or_else(|| SurfsUpError::Config {
            message: "No dataset given on the command line or in the config file".to_string(),
        })?;

        Ok((config, dataset_path))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server = other.server;
        self.data = other.data;
        self.log_level = other.log_level;
    }

    /// Parse the pinned reference date, if any
    pub fn reference_date(&self) -> Result<Option<NaiveDate>> {
        self.data
            .reference_date
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| SurfsUpError::Config {
                    message: format!("Invalid reference date '{}': {}", raw, e),
                })
            })
            .transpose()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(SurfsUpError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(SurfsUpError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(SurfsUpError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if self.data.stations_file.is_empty() || self.data.measurements_file.is_empty() {
            return Err(SurfsUpError::Config {
                message: "CSV file names cannot be empty".to_string(),
            });
        }

        if let Some(station) = &self.data.active_station {
            if station.trim().is_empty() {
                return Err(SurfsUpError::Config {
                    message: "Active station cannot be empty".to_string(),
                });
            }
        }

        self.reference_date()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            stations_file: default_stations_file(),
            measurements_file: default_measurements_file(),
            reference_date: None,
            active_station: None,
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_stations_file() -> String {
    "hawaii_stations.csv".to_string()
}

fn default_measurements_file() -> String {
    "hawaii_measurements.csv".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
