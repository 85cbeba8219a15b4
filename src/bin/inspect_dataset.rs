use anyhow::{Context, Result};
use std::path::PathBuf;

use surfsup::config::DataConfig;
use surfsup::data_loader::{load_records, DatasetSource};
use surfsup::queries::cutoff_date;

#[tokio::main]
async fn main() -> Result<()> {
    // Path to the dataset
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Resources/hawaii.sqlite"));

    println!("Inspecting dataset: {}", path.display());

    let source = DatasetSource::detect(&path, &DataConfig::default())
        .with_context(|| format!("cannot open {}", path.display()))?;
    let store = load_records(&source)
        .await
        .with_context(|| format!("cannot read records from {}", source))?;

    println!("\n=== STATIONS ({}) ===", store.stations().len());
    for station in store.stations() {
        println!(
            "  {} {:<40} lat={:.4} lon={:.4} elev={}",
            station.station, station.name, station.latitude, station.longitude, station.elevation
        );
    }

    println!("\n=== MEASUREMENTS ({}) ===", store.measurements().len());
    let earliest = store.measurements().iter().map(|m| m.date.as_str()).min();
    println!("  First date: {}", earliest.unwrap_or("-"));
    println!("  Last date:  {}", store.latest_date_str().unwrap_or("-"));
    if let Some(latest) = store.latest_date().context("latest date is malformed")? {
        println!("  12-month window starts: {}", cutoff_date(latest));
    }
    let missing_prcp = store
        .measurements()
        .iter()
        .filter(|m| m.prcp.is_none())
        .count();
    println!("  Missing precipitation: {}", missing_prcp);

    println!("\n=== MOST ACTIVE STATIONS ===");
    for (code, count) in store.stations_by_activity().into_iter().take(5) {
        println!("  {} {}", code, count);
    }

    Ok(())
}
