//! Time units
//!
//! A unit is a zero-sized marker type carrying one constant: how many
//! seconds a single unit represents. Units are open for extension; any
//! downstream crate can declare its own with [`define_unit!`] or a plain
//! `impl Unit`.

/// A time granularity, identified by its ratio to seconds.
///
/// INVARIANT: `RATIO_TO_SECONDS` is finite and strictly positive.
/// [`define_unit!`] checks this at compile time; hand-written impls are trusted.
pub trait Unit: 'static {
    /// Seconds in one unit
    const RATIO_TO_SECONDS: f64;

    /// Short symbol used by `Display`. Empty means "render as seconds".
    const SYMBOL: &'static str = "";

    /// Factor that turns a value in `Self` into a value in `V`.
    #[inline]
    fn conversion_rate<V: Unit>() -> f64
    where
        Self: Sized,
    {
        conversion_rate::<Self, V>()
    }
}

/// Conversion rate between two units: `A::RATIO_TO_SECONDS / B::RATIO_TO_SECONDS`.
#[inline]
pub fn conversion_rate<A: Unit, B: Unit>() -> f64 {
    A::RATIO_TO_SECONDS / B::RATIO_TO_SECONDS
}

/// Declare a unit marker type.
///
/// ```
/// use tempora_core::{define_unit, Day, Interval};
///
/// define_unit!(
///     /// Seven days
///     pub Week = 604_800.0, "wk"
/// );
///
/// assert_eq!(Interval::<Day>::new(7.0).converted_to::<Week>().value(), 1.0);
/// ```
///
/// A ratio that is zero, negative or not finite fails to compile:
///
/// ```compile_fail
/// tempora_core::define_unit!(pub Broken = 0.0);
/// ```
#[macro_export]
macro_rules! define_unit {
    ($(#[$meta:meta])* $vis:vis $name:ident = $ratio:expr $(, $symbol:expr)? $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {}

        impl $crate::Unit for $name {
            const RATIO_TO_SECONDS: f64 = {
                let ratio: f64 = $ratio;
                assert!(
                    ratio > 0.0 && ratio < f64::INFINITY,
                    "unit ratio must be finite and positive"
                );
                ratio
            };
            $(const SYMBOL: &'static str = $symbol;)?
        }

        const _: f64 = <$name as $crate::Unit>::RATIO_TO_SECONDS;
    };
}

define_unit!(
    /// 86 400 seconds
    pub Day = 86_400.0, "d"
);
define_unit!(
    /// 3 600 seconds
    pub Hour = 3_600.0, "h"
);
define_unit!(
    /// 60 seconds
    pub Minute = 60.0, "min"
);
define_unit!(
    /// The canonical base unit
    pub Second = 1.0, "s"
);
define_unit!(pub Millisecond = 1e-3, "ms");
define_unit!(pub Microsecond = 1e-6, "µs");
define_unit!(pub Nanosecond = 1e-9, "ns");
