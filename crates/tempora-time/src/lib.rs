//! Tempora Time - Adapters from intervals to points in time and timers
//!
//! This crate connects `tempora_core::Interval` to the outside world:
//! - Timestamps offset by intervals, `from_now` / `ago` over a `Clock`
//! - Deferred execution on the tokio timer
//!
//! Both only consume an interval's canonical seconds.

pub mod point;
pub mod defer;
pub mod error;

pub use point::*;
pub use defer::*;
pub use error::*;
