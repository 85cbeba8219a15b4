//! Test data generation utilities.
//!
//! Writes small datasets with known contents, in both supported layouts,
//! for exercising the surfsup server end to end.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

/// (code, name, latitude, longitude, elevation)
pub type StationRow = (&'static str, &'static str, f64, f64, f64);

/// (station, date, prcp, tobs)
pub type MeasurementRow = (&'static str, &'static str, Option<f64>, f64);

pub const STATIONS: &[StationRow] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

pub const MEASUREMENTS: &[MeasurementRow] = &[
    ("USC00519281", "2016-08-22", Some(0.40), 78.0),
    ("USC00519281", "2017-01-01", Some(0.00), 70.0),
    ("USC00519397", "2016-08-23", None, 81.0),
    ("USC00513117", "2017-03-15", Some(0.12), 72.0),
    ("USC00519281", "2017-06-01", Some(0.05), 80.0),
    ("USC00519281", "2017-08-23", Some(0.00), 75.0),
];

/// Number of measurements on or after 2016-08-23, the 12-month cutoff
pub const RECENT_MEASUREMENTS: usize = 5;

/// Three observations at a single station, with easily checked statistics
pub const SCENARIO_MEASUREMENTS: &[MeasurementRow] = &[
    ("USC00519281", "2017-01-01", None, 70.0),
    ("USC00519281", "2017-06-01", None, 80.0),
    ("USC00519281", "2017-08-23", None, 75.0),
];

/// Write the default fixture as the CSV export pair into `dir`
pub fn create_csv_dataset(dir: &Path) -> std::io::Result<()> {
    write_csv_dataset(dir, STATIONS, MEASUREMENTS)
}

/// Write the given rows as the CSV export pair into `dir`
pub fn write_csv_dataset(
    dir: &Path,
    station_rows: &[StationRow],
    measurement_rows: &[MeasurementRow],
) -> std::io::Result<()> {
    let mut stations = String::from("station,name,latitude,longitude,elevation\n");
    for (code, name, latitude, longitude, elevation) in station_rows {
        stations.push_str(&format!(
            "{},\"{}\",{},{},{}\n",
            code, name, latitude, longitude, elevation
        ));
    }
    std::fs::write(dir.join("hawaii_stations.csv"), stations)?;

    let mut measurements = String::from("station,date,prcp,tobs\n");
    for (code, date, prcp, tobs) in measurement_rows {
        let prcp = prcp.map(|p| p.to_string()).unwrap_or_default();
        measurements.push_str(&format!("{},{},{},{}\n", code, date, prcp, tobs));
    }
    std::fs::write(dir.join("hawaii_measurements.csv"), measurements)
}

/// Write the fixture as a SQLite database at `path`, laid out like hawaii.sqlite
pub async fn create_sqlite_dataset(path: &Path) -> Result<(), sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(
        "CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, \
         latitude FLOAT, longitude FLOAT, elevation FLOAT)",
    )
    .execute(&pool)
    .await?;
    sqlx::query(
        "CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, \
         prcp FLOAT, tobs FLOAT)",
    )
    .execute(&pool)
    .await?;

    for (code, name, latitude, longitude, elevation) in STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(*code)
        .bind(*name)
        .bind(*latitude)
        .bind(*longitude)
        .bind(*elevation)
        .execute(&pool)
        .await?;
    }

    for (code, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*code)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&pool)
            .await?;
    }

    pool.close().await;
    Ok(())
}
