//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route)
//!     → rotation (next status code)
//!     → response.rs (status + descriptive body)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::status_body;
pub use server::{AppState, HttpServer};
