//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject an empty rotation and codes outside the HTTP status range
//! - Check that listen addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RotatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::StatusCode;

use crate::config::schema::RotatorConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("rotation.status_codes must not be empty")]
    EmptyRotation,

    #[error("rotation.status_codes[{index}] = {code} is not a valid HTTP status code")]
    InvalidStatusCode { index: usize, code: u16 },

    #[error("{field} = {value:?} is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RotatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.rotation.status_codes.is_empty() {
        errors.push(ValidationError::EmptyRotation);
    }

    for (index, &code) in config.rotation.status_codes.iter().enumerate() {
        if StatusCode::from_u16(code).is_err() {
            errors.push(ValidationError::InvalidStatusCode { index, code });
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
