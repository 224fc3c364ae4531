//! Tempora Core - Unit-tagged time intervals
//!
//! This crate defines:
//! - Time units (Day .. Nanosecond, plus user-defined units)
//! - `Interval<U>`: a duration tagged with its unit at compile time
//! - Cross-unit conversion, comparison and arithmetic via canonical seconds
//! - Numeric literal accessors (`5.minutes()`)
//!
//! The crate never reads a clock and never fails: arithmetic follows IEEE-754.

pub mod unit;
pub mod interval;
pub mod literal;
pub mod error;

pub use unit::*;
pub use interval::*;
pub use literal::*;
pub use error::*;
