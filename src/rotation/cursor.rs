//! Round-robin cursor over a fixed list of status codes.
//!
//! # Responsibilities
//! - Hold the immutable rotation list
//! - Hand out the next status code exactly once per call
//! - Wrap back to the first entry after the last

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;

/// Rotation used when no list is configured.
pub const DEFAULT_STATUS_CODES: [u16; 7] = [400, 401, 404, 403, 500, 502, 503];

/// Errors raised while building a rotation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RotationError {
    /// The rotation list has no entries.
    #[error("rotation list must contain at least one status code")]
    Empty,
    /// A numeric code is not a valid HTTP status.
    #[error("invalid HTTP status code: {0}")]
    InvalidStatus(u16),
}

/// Shared cursor into an ordered list of status codes.
///
/// Every call to [`Rotation::next`] observes a distinct cursor value, so
/// concurrent callers collectively walk the list in order, wrapping forever.
#[derive(Debug)]
pub struct Rotation {
    codes: Arc<[StatusCode]>,
    cursor: AtomicUsize,
}

impl Rotation {
    /// Build a rotation starting at the first entry.
    pub fn new(codes: Vec<StatusCode>) -> Result<Self, RotationError> {
        if codes.is_empty() {
            return Err(RotationError::Empty);
        }

        Ok(Self {
            codes: codes.into(),
            cursor: AtomicUsize::new(0),
        })
    }

    /// Build a rotation from raw numeric codes.
    pub fn from_codes(codes: &[u16]) -> Result<Self, RotationError> {
        let codes = codes
            .iter()
            .map(|&code| StatusCode::from_u16(code).map_err(|_| RotationError::InvalidStatus(code)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(codes)
    }

    /// Take the status code at the cursor and advance it.
    pub fn next(&self) -> StatusCode {
        let len = self.codes.len();

        // The closure always returns Some, so fetch_update cannot fail.
        let index = match self
            .cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |i| Some((i + 1) % len))
        {
            Ok(prev) | Err(prev) => prev,
        };

        self.codes[index]
    }

    /// Status code the next request will receive.
    pub fn peek(&self) -> StatusCode {
        self.codes[self.position()]
    }

    /// Current cursor value, always in `0..len()`.
    pub fn position(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[StatusCode] {
        &self.codes
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            codes: DEFAULT_STATUS_CODES
                .iter()
                .filter_map(|&code| StatusCode::from_u16(code).ok())
                .collect(),
            cursor: AtomicUsize::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::thread;

    fn default_rotation() -> Rotation {
        Rotation::from_codes(&DEFAULT_STATUS_CODES).unwrap()
    }

    #[test]
    fn test_rejects_empty_list() {
        assert_eq!(Rotation::new(Vec::new()).unwrap_err(), RotationError::Empty);
        assert_eq!(Rotation::from_codes(&[]).unwrap_err(), RotationError::Empty);
    }

    #[test]
    fn test_rejects_invalid_code() {
        let err = Rotation::from_codes(&[500, 42]).unwrap_err();
        assert_eq!(err, RotationError::InvalidStatus(42));
    }

    #[test]
    fn test_visits_list_in_order_and_wraps() {
        let rotation = default_rotation();

        let first: Vec<u16> = (0..7).map(|_| rotation.next().as_u16()).collect();
        assert_eq!(first, DEFAULT_STATUS_CODES);

        let second: Vec<u16> = (0..7).map(|_| rotation.next().as_u16()).collect();
        assert_eq!(second, DEFAULT_STATUS_CODES);
    }

    #[test]
    fn test_kth_call_matches_index() {
        let rotation = default_rotation();
        let seen: Vec<u16> = (0..15).map(|_| rotation.next().as_u16()).collect();

        assert_eq!(seen[0], 400);
        assert_eq!(seen[6], 503);
        assert_eq!(seen[7], 400);
        assert_eq!(seen[14], 503);
    }

    #[test]
    fn test_single_entry_always_repeats() {
        let rotation = Rotation::from_codes(&[503]).unwrap();
        for _ in 0..5 {
            assert_eq!(rotation.next(), StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(rotation.position(), 0);
        }
    }

    #[test]
    fn test_peek_does_not_advance() {
        let rotation = default_rotation();
        assert_eq!(rotation.peek(), StatusCode::BAD_REQUEST);
        assert_eq!(rotation.peek(), StatusCode::BAD_REQUEST);
        assert_eq!(rotation.position(), 0);

        rotation.next();
        assert_eq!(rotation.peek(), StatusCode::UNAUTHORIZED);
        assert_eq!(rotation.position(), 1);
    }

    #[test]
    fn test_default_matches_default_codes() {
        let rotation = Rotation::default();
        let codes: Vec<u16> = rotation.codes().iter().map(|c| c.as_u16()).collect();
        assert_eq!(codes, DEFAULT_STATUS_CODES);
        assert!(!rotation.is_empty());
    }

    #[test]
    fn test_concurrent_callers_see_each_value_once_per_cycle() {
        let rotation = Arc::new(default_rotation());
        let threads = 8;
        let cycles = 50;
        let per_thread = rotation.len() * cycles;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let rotation = rotation.clone();
                thread::spawn(move || {
                    (0..per_thread)
                        .map(|_| rotation.next().as_u16())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut counts: HashMap<u16, usize> = HashMap::new();
        for handle in handles {
            for code in handle.join().unwrap() {
                *counts.entry(code).or_default() += 1;
            }
        }

        for code in DEFAULT_STATUS_CODES {
            assert_eq!(counts[&code], threads * cycles, "code {code} count drifted");
        }
        assert_eq!(rotation.position(), 0);
    }
}
