use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use transit_server::config::{ConfigError, ServerConfig};
use transit_server::loader::{self, LoadError};
use transit_server::system::TransitSystem;
use transit_server::web::{AppState, create_router};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "transit_server=info,tower_http=debug";

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    let stations = loader::read_stations(&config.stations_path)?;
    let connections = loader::read_connections(&config.connections_path)?;
    let skipped = stations.skipped.len() + connections.skipped.len();
    if skipped > 0 {
        warn!(skipped, "Some input lines were not loaded");
    }

    let (system, summary) = TransitSystem::from_records(stations.records, connections.records);
    for connection in &summary.rejected_connections {
        warn!(%connection, "Connection references a missing station");
    }
    info!(
        stations = system.network().station_count(),
        connections = system.network().connection_count(),
        "Loaded transit network"
    );

    let app = create_router(AppState::new(system));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Transit server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
