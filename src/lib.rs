//! Status Rotator Library
//!
//! A diagnostic HTTP server that answers every request with the next status
//! code from a fixed rotation, for exercising client retry logic.

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod rotation;

pub use config::RotatorConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use rotation::Rotation;
