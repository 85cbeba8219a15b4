//! Dataset loading functionality.
//!
//! The dataset comes in one of two shapes:
//!
//! - a SQLite database with `station` and `measurement` tables, as shipped
//!   with the published `hawaii.sqlite` snapshot
//! - a directory holding the same two tables exported as CSV files
//!
//! Either way the records are read once into a [`RecordStore`] and never
//! touched again.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::Row;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::{Config, DataConfig};
use crate::error::{Result, SurfsUpError};
use crate::logging::{log_data_load_stats, log_operation_end, log_operation_start};
use crate::state::AppState;
use crate::store::{Measurement, RecordStore, Station};

const STATION_QUERY: &str = "SELECT station, name, \
     CAST(latitude AS REAL) AS latitude, \
     CAST(longitude AS REAL) AS longitude, \
     CAST(elevation AS REAL) AS elevation \
     FROM station";

const MEASUREMENT_QUERY: &str = "SELECT station, date, \
     CAST(prcp AS REAL) AS prcp, \
     CAST(tobs AS REAL) AS tobs \
     FROM measurement";

/// Where the records are read from
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    /// A SQLite database file
    Sqlite(PathBuf),
    /// A pair of CSV files
    Csv {
        stations: PathBuf,
        measurements: PathBuf,
    },
}

impl DatasetSource {
    /// Pick the source kind for a dataset path
    ///
    /// Directories are read as CSV exports, anything else as SQLite.
    pub fn detect(path: &Path, data: &DataConfig) -> Result<Self> {
        if !path.exists() {
            return Err(SurfsUpError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Dataset not found: {}", path.display()),
            )));
        }

        if path.is_dir() {
            Ok(Self::Csv {
                stations: path.join(&data.stations_file),
                measurements: path.join(&data.measurements_file),
            })
        } else {
            Ok(Self::Sqlite(path.to_path_buf()))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite(path) => write!(f, "sqlite:{}", path.display()),
            Self::Csv {
                stations,
                measurements,
            } => write!(f, "csv:{},{}", stations.display(), measurements.display()),
        }
    }
}

/// Load a dataset into memory and create the application state
pub async fn load_dataset(path: &Path, config: Config) -> Result<AppState> {
    let source = DatasetSource::detect(path, &config.data)?;
    let store = load_records(&source).await?;

    let app_state = AppState::new(config, store, source.to_string())?;
    app_state.validate()?;

    Ok(app_state)
}

/// Read all records from a source
pub async fn load_records(source: &DatasetSource) -> Result<RecordStore> {
    let start_time = Instant::now();
    let description = source.to_string();
    log_operation_start("data_load", Some(&description));

    let result = match source {
        DatasetSource::Sqlite(path) => load_sqlite(path).await,
        DatasetSource::Csv {
            stations,
            measurements,
        } => load_csv(stations, measurements),
    };
    log_operation_end("data_load", start_time, result.is_ok());

    let store = result?;
    let latest = store.latest_date_str().unwrap_or("none");
    log_data_load_stats(
        &description,
        store.stations().len(),
        store.measurements().len(),
        latest,
        store.most_active_station().unwrap_or("none"),
    );

    Ok(store)
}

/// Read both tables from a SQLite database
async fn load_sqlite(path: &Path) -> Result<RecordStore> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    info!("Opened SQLite dataset: {}", path.display());

    let stations = sqlx::query(STATION_QUERY)
        .fetch_all(&pool)
        .await?
        .iter()
        .map(|row| -> std::result::Result<Station, sqlx::Error> {
            Ok(Station {
                station: row.try_get("station")?,
                name: row.try_get("name")?,
                latitude: row.try_get("latitude")?,
                longitude: row.try_get("longitude")?,
                elevation: row.try_get("elevation")?,
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!("Read {} stations", stations.len());

    let measurements = sqlx::query(MEASUREMENT_QUERY)
        .fetch_all(&pool)
        .await?
        .iter()
        .map(|row| -> std::result::Result<Measurement, sqlx::Error> {
            Ok(Measurement {
                station: row.try_get("station")?,
                date: row.try_get("date")?,
                prcp: row.try_get("prcp")?,
                tobs: row.try_get("tobs")?,
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!("Read {} measurements", measurements.len());

    pool.close().await;

    Ok(RecordStore::new(stations, measurements))
}

/// Read the station and measurement CSV exports
fn load_csv(stations_path: &Path, measurements_path: &Path) -> Result<RecordStore> {
    let stations = read_csv::<Station>(stations_path)?;
    debug!("Read {} stations from {}", stations.len(), stations_path.display());

    let measurements = read_csv::<Measurement>(measurements_path)?;
    debug!(
        "Read {} measurements from {}",
        measurements.len(),
        measurements_path.display()
    );

    Ok(RecordStore::new(stations, measurements))
}

fn read_csv<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}
