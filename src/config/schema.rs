//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the rotator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::rotation::DEFAULT_STATUS_CODES;

/// Root configuration for the status rotator.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RotatorConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Status codes handed out in order.
    pub rotation: RotationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Rotation list configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RotationConfig {
    /// Ordered HTTP status codes, cycled through one per request.
    pub status_codes: Vec<u16>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            status_codes: DEFAULT_STATUS_CODES.to_vec(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter, used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Expose Prometheus metrics.
    pub metrics_enabled: bool,

    /// Metrics listen address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
