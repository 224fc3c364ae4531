//! Points in time and clocks
//!
//! A `Timestamp` is seconds since the Unix epoch held as `f64`, so offsetting
//! it by any interval is total, exactly like interval arithmetic itself.
//! Reading the current time is delegated to a [`Clock`].

use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use tempora_core::{Interval, Second, Unit};

use crate::error::{TimeError, TimeResult};

/// Seconds since 1970-01-01T00:00:00Z
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestamp(f64);

impl Timestamp {
    pub const UNIX_EPOCH: Timestamp = Timestamp(0.0);

    #[inline]
    pub const fn from_unix_seconds(secs: f64) -> Self {
        Timestamp(secs)
    }

    #[inline]
    pub fn as_unix_seconds(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn offset_by_seconds(self, secs: f64) -> Self {
        Timestamp(self.0 + secs)
    }

    #[inline]
    pub fn adding<U: Unit>(self, interval: Interval<U>) -> Self {
        self.offset_by_seconds(interval.canonical_seconds())
    }

    /// Signed interval from `earlier` to `self`, in any unit
    #[inline]
    pub fn interval_since<U: Unit>(self, earlier: Timestamp) -> Interval<U> {
        Interval::from_canonical_seconds(self.0 - earlier.0)
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Timestamp(after.as_secs_f64()),
            Err(before) => Timestamp(-before.duration().as_secs_f64()),
        }
    }

    pub fn to_system_time(self) -> TimeResult<SystemTime> {
        let secs = self.0;
        if !secs.is_finite() {
            return Err(TimeError::NonFinite(secs));
        }
        let magnitude =
            Duration::try_from_secs_f64(secs.abs()).map_err(|_| TimeError::OutOfRange(secs))?;
        let time = if secs >= 0.0 {
            UNIX_EPOCH.checked_add(magnitude)
        } else {
            UNIX_EPOCH.checked_sub(magnitude)
        };
        time.ok_or(TimeError::OutOfRange(secs))
    }
}

impl<U: Unit> Add<Interval<U>> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn add(self, rhs: Interval<U>) -> Self::Output {
        self.adding(rhs)
    }
}

impl<U: Unit> Sub<Interval<U>> for Timestamp {
    type Output = Timestamp;

    #[inline]
    fn sub(self, rhs: Interval<U>) -> Self::Output {
        self.adding(-rhs)
    }
}

impl<U: Unit> AddAssign<Interval<U>> for Timestamp {
    #[inline]
    fn add_assign(&mut self, rhs: Interval<U>) {
        *self = *self + rhs;
    }
}

impl<U: Unit> SubAssign<Interval<U>> for Timestamp {
    #[inline]
    fn sub_assign(&mut self, rhs: Interval<U>) {
        *self = *self - rhs;
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Interval<Second>;

    #[inline]
    fn sub(self, rhs: Timestamp) -> Self::Output {
        self.interval_since(rhs)
    }
}

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({:.3}s)", self.0)
    }
}

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by `SystemTime`
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_system_time(SystemTime::now())
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        ManualClock {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, to: Timestamp) {
        *self.now.lock() = to;
    }

    /// Move the clock by an interval (negative moves it back)
    pub fn advance<U: Unit>(&self, by: Interval<U>) {
        *self.now.lock() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock()
    }
}

/// `clock.now() + interval`
pub fn from_now<C: Clock + ?Sized, U: Unit>(clock: &C, interval: Interval<U>) -> Timestamp {
    clock.now() + interval
}

/// `clock.now() - interval`
pub fn ago<C: Clock + ?Sized, U: Unit>(clock: &C, interval: Interval<U>) -> Timestamp {
    clock.now() - interval
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempora_core::{IntervalLiteral, Minute};

    #[test]
    fn test_add_interval() {
        let epoch = Timestamp::UNIX_EPOCH;

        let five_after = epoch.adding(5.seconds());
        assert_eq!(five_after.as_unix_seconds(), 5.0);

        assert_eq!(epoch + 10.minutes(), epoch.adding(10.minutes()));

        let mut copy = epoch;
        copy += 1.hours();
        assert_eq!(
            copy,
            Timestamp::from_unix_seconds(60.minutes().canonical_seconds())
        );
    }

    #[test]
    fn test_subtract_interval() {
        let reference = Timestamp::from_unix_seconds(978_307_200.0);

        let five_before = reference - 5.seconds();
        assert_eq!(five_before.as_unix_seconds() - reference.as_unix_seconds(), -5.0);

        assert_eq!(reference - 10.minutes(), reference.adding(-10.minutes()));

        let mut copy = reference;
        copy -= 1.hours();
        assert_eq!(copy, reference.offset_by_seconds(-3600.0));
    }

    #[test]
    fn test_timestamp_difference() {
        let a = Timestamp::from_unix_seconds(100.0);
        let b = Timestamp::from_unix_seconds(220.0);
        assert_eq!(b - a, 120.seconds());
        assert_eq!(a.interval_since::<Minute>(b).value(), -2.0);
    }

    #[test]
    fn test_system_time_round_trip() {
        let t = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let ts = Timestamp::from_system_time(t);
        assert_eq!(ts.as_unix_seconds(), 1_700_000_000.0);
        assert_eq!(ts.to_system_time().unwrap(), t);

        let before = Timestamp::from_unix_seconds(-60.0);
        assert_eq!(
            before.to_system_time().unwrap(),
            UNIX_EPOCH - Duration::from_secs(60)
        );
        assert_eq!(
            Timestamp::from_system_time(UNIX_EPOCH - Duration::from_secs(60)),
            before
        );
    }

    #[test]
    fn test_system_time_errors() {
        assert!(matches!(
            Timestamp::from_unix_seconds(f64::NAN).to_system_time(),
            Err(TimeError::NonFinite(_))
        ));
        assert!(matches!(
            Timestamp::from_unix_seconds(f64::INFINITY).to_system_time(),
            Err(TimeError::NonFinite(_))
        ));
        assert!(matches!(
            Timestamp::from_unix_seconds(1e300).to_system_time(),
            Err(TimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_manual_clock_helpers() {
        let clock = ManualClock::new(Timestamp::from_unix_seconds(1_000.0));
        assert_eq!(from_now(&clock, 1.minutes()).as_unix_seconds(), 1_060.0);
        assert_eq!(ago(&clock, 1.minutes()).as_unix_seconds(), 940.0);

        clock.advance(2.hours());
        assert_eq!(clock.now().as_unix_seconds(), 1_000.0 + 7_200.0);

        clock.set(Timestamp::UNIX_EPOCH);
        assert_eq!(ago(&clock, 1.days()).as_unix_seconds(), -86_400.0);
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract(start in -1e9f64..1e9, mins in -1e6f64..1e6) {
            let t = Timestamp::from_unix_seconds(start);
            let back = (t + mins.minutes()) - mins.minutes();
            prop_assert!((back.as_unix_seconds() - start).abs() <= 1e-6);
        }
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let earlier = ago(&clock, 1.seconds());
        assert!(clock.now() > earlier);
    }
}
