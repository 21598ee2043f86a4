//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handler produces:
//!     → logging.rs (one structured event per request)
//!     → metrics.rs (response counters)
//!
//! Consumers:
//!     → stdout (human observation)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```

pub mod logging;
pub mod metrics;
