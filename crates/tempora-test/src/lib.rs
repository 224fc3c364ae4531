//! Tempora Test Harness - Shared strategies and tolerance checks
//!
//! This crate provides:
//! - Relative-tolerance comparison for converted intervals
//! - proptest strategies over finite interval values
//! - A sample user-defined unit (`Week`) for extensibility checks

use proptest::prelude::*;
use tempora_core::{define_unit, Interval, Unit};

/// Default relative tolerance for conversion round trips
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

define_unit!(
    /// Seven days, defined outside the core
    pub Week = 604_800.0, "wk"
);

/// `true` when `a` and `b` agree within `tolerance`, relative to the larger
/// magnitude (absolute below 1.0).
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

/// Compare two intervals by canonical seconds, with tolerance
pub fn intervals_close<A: Unit, B: Unit>(a: Interval<A>, b: Interval<B>, tolerance: f64) -> bool {
    approx_eq(a.canonical_seconds(), b.canonical_seconds(), tolerance)
}

/// Finite values spanning many orders of magnitude, both signs
pub fn finite_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e3f64..1e3,
        -1e9f64..1e9,
        -1e15f64..1e15,
        Just(0.0),
    ]
}

pub fn interval_of<U: Unit>() -> impl Strategy<Value = Interval<U>> {
    finite_value().prop_map(Interval::<U>::new)
}
