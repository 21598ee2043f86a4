//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the listener for the configured address
//! - Surface bind failures as fatal startup errors
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last, after config and logging are ready

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;
use crate::rotation::RotationError;

/// Fatal errors raised before the server starts serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid bind address {address:?}: {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: std::io::Error,
    },

    #[error(transparent)]
    Rotation(#[from] RotationError),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the TCP listener described by `config`.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| StartupError::Address {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(address = %local_addr, "Listener bound");
    }

    Ok(listener)
}
