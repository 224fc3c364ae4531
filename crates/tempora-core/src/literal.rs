//! Numeric literal accessors: `5.minutes()`, `1.5.hours()`

use crate::interval::Interval;
use crate::unit::{Day, Hour, Microsecond, Millisecond, Minute, Nanosecond, Second, Unit};

/// Interpret a number as an interval of some unit.
pub trait IntervalLiteral: Sized {
    fn interval<U: Unit>(self) -> Interval<U>;

    #[inline]
    fn days(self) -> Interval<Day> {
        self.interval()
    }

    #[inline]
    fn hours(self) -> Interval<Hour> {
        self.interval()
    }

    #[inline]
    fn minutes(self) -> Interval<Minute> {
        self.interval()
    }

    #[inline]
    fn seconds(self) -> Interval<Second> {
        self.interval()
    }

    #[inline]
    fn milliseconds(self) -> Interval<Millisecond> {
        self.interval()
    }

    #[inline]
    fn microseconds(self) -> Interval<Microsecond> {
        self.interval()
    }

    #[inline]
    fn nanoseconds(self) -> Interval<Nanosecond> {
        self.interval()
    }
}

macro_rules! impl_literal {
    ($($ty:ty),*) => {
        $(
            impl IntervalLiteral for $ty {
                #[inline]
                fn interval<U: Unit>(self) -> Interval<U> {
                    Interval::new(self as f64)
                }
            }
        )*
    };
}

impl_literal!(f64, i64);
