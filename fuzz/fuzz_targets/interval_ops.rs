#![no_main]
//! Interval arithmetic must be total: no input may panic, and the
//! left-unit and canonical-hash rules must hold for every finite value.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tempora_core::{Hour, Interval, Microsecond, Minute, Second, Unit};

#[derive(Arbitrary, Debug)]
struct Input {
    a: f64,
    b: f64,
    k: f64,
}

fn hash_of<U: Unit>(interval: Interval<U>) -> u64 {
    let mut hasher = DefaultHasher::new();
    interval.hash(&mut hasher);
    hasher.finish()
}

fuzz_target!(|input: Input| {
    let a = Interval::<Minute>::new(input.a);
    let b = Interval::<Microsecond>::new(input.b);

    let sum = a + b;
    let _ = a - b;
    let _ = -a * input.k / input.k;
    let _ = a.partial_cmp(&b);
    let _ = a.to_std_saturating();
    let _ = Duration::try_from(b);
    let _ = format!("{} {:?}", sum, sum);

    if sum.is_finite() {
        assert_eq!(
            sum.value(),
            (a.canonical_seconds() + b.canonical_seconds()) / Minute::RATIO_TO_SECONDS
        );
    }

    let seconds = Interval::<Second>::new(input.a);
    let hours = seconds.in_hours();
    if seconds == hours {
        assert_eq!(hash_of(seconds), hash_of(hours));
    }
});
