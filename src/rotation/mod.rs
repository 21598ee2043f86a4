//! Status rotation subsystem.
//!
//! # Data Flow
//! ```text
//! config.rotation.status_codes
//!     → cursor.rs (validate, build immutable list + cursor at 0)
//!     → Arc<Rotation> shared with every request handler
//!
//! Per request:
//!     → Rotation::next() (atomic read-and-advance)
//!     → status code for the response
//! ```
//!
//! # Design Decisions
//! - The list is immutable after construction; only the cursor mutates
//! - Cursor is stored already wrapped, always a valid index
//! - No locks: a single compare-and-swap loop advances the cursor

pub mod cursor;

pub use cursor::{Rotation, RotationError, DEFAULT_STATUS_CODES};
