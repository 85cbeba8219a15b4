//! surfsup - a read-only JSON API over the Hawaii climate dataset
//!
//! This is the main entry point for the surfsup application.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use surfsup::data_loader::load_dataset;
use surfsup::handlers::heartbeat::mark_start_time;
use surfsup::{create_router, init_tracing, log_error, Config, Result, SurfsUpError};

#[tokio::main]
async fn main() -> Result<()> {
    mark_start_time();

    // Load configuration
    let (config, dataset_path) = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting surfsup v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        log_error(&e, "Invalid configuration");
        e
    })?;

    info!("Loading dataset: {:?}", dataset_path);

    // Load the records and create application state
    let app_state = load_dataset(&dataset_path, config.clone())
        .await
        .map_err(|e| {
            log_error(&e, "Failed to load dataset");
            e
        })?;

    info!(
        "Found {} stations and {} measurements",
        app_state.store.stations().len(),
        app_state.store.measurements().len()
    );
    info!(
        "Latest date {:?}, most active station {:?}",
        app_state.latest_date, app_state.active_station
    );

    let app = create_router(Arc::new(app_state));

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| SurfsUpError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| SurfsUpError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("Server error: {}", e);
            SurfsUpError::Server {
                message: format!("Server error: {}", e),
            }
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
