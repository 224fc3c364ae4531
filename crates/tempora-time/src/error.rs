//! Error types for the time adapters

use std::time::Duration;

use tempora_core::IntervalError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TimeError {
    #[error("Timestamp is not finite: {0}")]
    NonFinite(f64),

    #[error("Timestamp out of range for SystemTime: {0}s since epoch")]
    OutOfRange(f64),

    #[error("Delay {requested:?} exceeds maximum {max:?}")]
    DelayTooLong { requested: Duration, max: Duration },

    #[error(transparent)]
    Interval(#[from] IntervalError),
}

/// Result type for time adapter operations
pub type TimeResult<T> = Result<T, TimeError>;
