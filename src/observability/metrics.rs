//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Count responses handed out, by method and status
//! - Expose Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `rotator_responses_total` (counter): responses by method, status
//!
//! # Design Decisions
//! - Exporter is opt-in; without a recorder the macros are no-ops
//! - Labels for method and status code only

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const RESPONSES_TOTAL: &str = "rotator_responses_total";

/// Install the global Prometheus recorder and its HTTP listener.
///
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    metrics::describe_counter!(RESPONSES_TOTAL, "Responses served, by method and status code");

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one response.
pub fn record_response(method: &str, status: u16) {
    metrics::counter!(
        RESPONSES_TOTAL,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
