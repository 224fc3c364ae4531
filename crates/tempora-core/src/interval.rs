//! Unit-tagged intervals
//!
//! `Interval<U>` is a plain `f64` tagged at compile time with a [`Unit`].
//! Every cross-unit operation goes through canonical seconds:
//! - conversion reconstructs the value in the target unit
//! - `+`/`-` keep the unit of the left operand
//! - `==`/`<` compare canonical seconds, exactly (no epsilon), even within one unit

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::time::Duration;

use crate::error::{IntervalError, IntervalResult};
use crate::unit::{Day, Hour, Microsecond, Millisecond, Minute, Nanosecond, Second, Unit};

/// A span of time: `value` many `U`.
///
/// Negative and zero values are valid. NaN and infinities propagate per IEEE-754.
pub struct Interval<U: Unit> {
    value: f64,
    unit: PhantomData<fn() -> U>,
}

impl<U: Unit> Interval<U> {
    /// Zero duration
    pub const ZERO: Self = Self::new(0.0);

    /// `value` many `U`. Any `f64` is accepted, including negatives.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Interval {
            value,
            unit: PhantomData,
        }
    }

    /// Build from seconds: `value = seconds / U::RATIO_TO_SECONDS`
    #[inline]
    pub fn from_canonical_seconds(seconds: f64) -> Self {
        Self::new(seconds / U::RATIO_TO_SECONDS)
    }

    /// Raw magnitude, meaningful only relative to `U`
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Unit-independent figure used for every cross-unit operation
    #[inline]
    pub fn canonical_seconds(self) -> f64 {
        self.value * U::RATIO_TO_SECONDS
    }

    /// Reinterpret in another unit. Lossless up to floating-point rounding.
    #[inline]
    pub fn converted_to<V: Unit>(self) -> Interval<V> {
        Interval::from_canonical_seconds(self.canonical_seconds())
    }

    #[inline]
    pub fn in_days(self) -> Interval<Day> {
        self.converted_to()
    }

    #[inline]
    pub fn in_hours(self) -> Interval<Hour> {
        self.converted_to()
    }

    #[inline]
    pub fn in_minutes(self) -> Interval<Minute> {
        self.converted_to()
    }

    #[inline]
    pub fn in_seconds(self) -> Interval<Second> {
        self.converted_to()
    }

    #[inline]
    pub fn in_milliseconds(self) -> Interval<Millisecond> {
        self.converted_to()
    }

    #[inline]
    pub fn in_microseconds(self) -> Interval<Microsecond> {
        self.converted_to()
    }

    #[inline]
    pub fn in_nanoseconds(self) -> Interval<Nanosecond> {
        self.converted_to()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.value < 0.0
    }

    /// Convert to a `Duration`, clamping instead of failing.
    ///
    /// Negative and NaN intervals become `Duration::ZERO`; anything beyond
    /// `Duration::MAX` saturates to it.
    pub fn to_std_saturating(self) -> Duration {
        let secs = self.canonical_seconds();
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

impl<U: Unit> Clone for Interval<U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for Interval<U> {}

impl<U: Unit> Default for Interval<U> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit, V: Unit> PartialEq<Interval<V>> for Interval<U> {
    #[inline]
    fn eq(&self, other: &Interval<V>) -> bool {
        self.canonical_seconds() == other.canonical_seconds()
    }
}

/// Orders by canonical seconds, even when both sides share a unit, so that
/// `partial_cmp` agrees with `==` where `value * ratio` underflows or overflows.
impl<U: Unit, V: Unit> PartialOrd<Interval<V>> for Interval<U> {
    #[inline]
    fn partial_cmp(&self, other: &Interval<V>) -> Option<Ordering> {
        self.canonical_seconds()
            .partial_cmp(&other.canonical_seconds())
    }
}

/// Hashes canonical seconds so that equal intervals in different units
/// hash identically. `-0.0` is folded into `0.0`.
impl<U: Unit> Hash for Interval<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let secs = self.canonical_seconds();
        let secs = if secs == 0.0 { 0.0 } else { secs };
        secs.to_bits().hash(state);
    }
}

impl<U: Unit, V: Unit> Add<Interval<V>> for Interval<U> {
    type Output = Interval<U>;

    #[inline]
    fn add(self, rhs: Interval<V>) -> Self::Output {
        Self::from_canonical_seconds(self.canonical_seconds() + rhs.canonical_seconds())
    }
}

impl<U: Unit, V: Unit> Sub<Interval<V>> for Interval<U> {
    type Output = Interval<U>;

    #[inline]
    fn sub(self, rhs: Interval<V>) -> Self::Output {
        self + (-rhs)
    }
}

impl<U: Unit, V: Unit> AddAssign<Interval<V>> for Interval<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Interval<V>) {
        *self = *self + rhs;
    }
}

impl<U: Unit, V: Unit> SubAssign<Interval<V>> for Interval<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Interval<V>) {
        *self = *self - rhs;
    }
}

impl<U: Unit> Neg for Interval<U> {
    type Output = Interval<U>;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}

impl<U: Unit> Mul<f64> for Interval<U> {
    type Output = Interval<U>;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.value * rhs)
    }
}

impl<U: Unit> Mul<Interval<U>> for f64 {
    type Output = Interval<U>;

    #[inline]
    fn mul(self, rhs: Interval<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Interval<U> {
    type Output = Interval<U>;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.value / rhs)
    }
}

impl<U: Unit> MulAssign<f64> for Interval<U> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<U: Unit> DivAssign<f64> for Interval<U> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl<U: Unit> Sum for Interval<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a, U: Unit> Sum<&'a Interval<U>> for Interval<U> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<U: Unit> From<Duration> for Interval<U> {
    #[inline]
    fn from(duration: Duration) -> Self {
        Self::from_canonical_seconds(duration.as_secs_f64())
    }
}

impl<U: Unit> TryFrom<Interval<U>> for Duration {
    type Error = IntervalError;

    fn try_from(interval: Interval<U>) -> IntervalResult<Duration> {
        let secs = interval.canonical_seconds();
        if !secs.is_finite() {
            return Err(IntervalError::NonFinite(secs));
        }
        if secs < 0.0 {
            return Err(IntervalError::Negative(secs));
        }
        Duration::try_from_secs_f64(secs).map_err(|_| IntervalError::Overflow(secs))
    }
}

impl<U: Unit> fmt::Debug for Interval<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `path::Foo<bar::Baz>` prints as `Foo`
        let name = std::any::type_name::<U>();
        let base = name.split('<').next().unwrap_or(name);
        let short = base.rsplit("::").next().unwrap_or(base);
        write!(f, "Interval<{}>({:?})", short, self.value)
    }
}

/// `5 min`, `1.5 h`; units without a symbol render their canonical seconds.
/// Precision flags apply to the number: `format!("{:.1}", x)`.
impl<U: Unit> fmt::Display for Interval<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if U::SYMBOL.is_empty() {
            fmt::Display::fmt(&self.canonical_seconds(), f)?;
            f.write_str(" s")
        } else {
            fmt::Display::fmt(&self.value, f)?;
            write!(f, " {}", U::SYMBOL)
        }
    }
}
