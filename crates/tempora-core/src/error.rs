//! Error types for tempora
//!
//! Interval arithmetic is total over IEEE-754 and never fails. Errors only
//! arise at the edges, when an interval leaves the `f64` domain for a type
//! with a narrower range.

use thiserror::Error;

/// Failure to express an interval as a `std::time::Duration`.
///
/// Each variant carries the interval's canonical seconds.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IntervalError {
    #[error("Negative interval: {0}s")]
    Negative(f64),

    #[error("Interval is not finite: {0}s")]
    NonFinite(f64),

    #[error("Interval overflows Duration: {0}s")]
    Overflow(f64),
}

/// Result type for interval conversions
pub type IntervalResult<T> = Result<T, IntervalError>;
