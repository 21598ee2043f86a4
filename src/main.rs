//! Status Rotator
//!
//! Answers every HTTP request, on any path and method, with the next status
//! code from a fixed rotation.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request    ┌──────────┐    ┌──────────────┐    ┌──────────┐
//!     ─────────────────▶│ listener │───▶│ rotate       │───▶│ rotation │
//!                       │ (axum)   │    │ handler      │◀───│ cursor   │
//!     Client Response   │          │    │              │    └──────────┘
//!     ◀─────────────────│          │◀───│ status+body  │
//!                       └──────────┘    └──────────────┘
//! ```

use clap::Parser;

use status_rotator::cli::Cli;
use status_rotator::http::HttpServer;
use status_rotator::lifecycle::{signals, startup, Shutdown, StartupError};
use status_rotator::observability::{logging, metrics};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config.observability.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    tracing::info!("status-rotator v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        status_codes = ?config.rotation.status_codes,
        "Configuration loaded"
    );

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}

async fn run(config: status_rotator::RotatorConfig) -> Result<(), StartupError> {
    let server = HttpServer::new(&config)?;
    let listener = startup::bind(&config.listener).await?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr)?;
        }
    }

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    server.run(listener, server_shutdown).await?;
    Ok(())
}
