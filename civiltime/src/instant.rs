use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use chrono::{NaiveDateTime, TimeZone, Utc};

use crate::{fmt::INSTANT_PATTERN, ConversionError, Converter, Duration, TimeZoneName};

/// Absolute point on the timeline, independent of any timezone.
///
/// Stored as signed nanoseconds since 1970-01-01 00:00:00 UTC, which covers
/// roughly the years 1677 to 2262.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant(i64);

impl Instant {
    /// 1970-01-01 00:00:00 UTC
    pub const EPOCH: Instant = Instant(0);
    /// Earliest representable instant.
    pub const MIN: Instant = Instant(i64::MIN);
    /// Furthest representable instant, also used to mean "never".
    pub const MAX: Instant = Instant(i64::MAX);

    /// Current system time.
    pub fn now() -> Instant {
        Instant(Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX))
    }

    #[inline]
    pub const fn from_nanos(nanos: i64) -> Instant {
        Instant(nanos)
    }

    /// Nanoseconds since the epoch.
    #[inline]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Instant `ts` real-valued seconds after the epoch. Precision is limited
    /// by `f64`, so expect errors in the order of hundreds of nanoseconds for
    /// present-day timestamps.
    pub fn from_unix_ts(ts: f64) -> Instant {
        Instant((1e9 * ts) as i64)
    }

    /// Real-valued seconds since the epoch.
    pub fn unix_ts(self) -> f64 {
        1e-9 * self.0 as f64
    }

    /// Instant of a UTC civil time, or `None` outside of the representable
    /// range.
    pub fn from_naive_utc(utc: &NaiveDateTime) -> Option<Instant> {
        utc.and_utc().timestamp_nanos_opt().map(Instant)
    }

    /// UTC civil time of this instant.
    pub fn to_naive_utc(self) -> NaiveDateTime {
        Utc.timestamp_nanos(self.0).naive_utc()
    }

    pub fn checked_add(self, duration: Duration) -> Option<Instant> {
        duration
            .num_nanoseconds()
            .and_then(|nanos| self.0.checked_add(nanos))
            .map(Instant)
    }

    pub fn checked_sub(self, duration: Duration) -> Option<Instant> {
        duration
            .num_nanoseconds()
            .and_then(|nanos| self.0.checked_sub(nanos))
            .map(Instant)
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs)
            .expect("overflow when adding duration to instant")
    }
}

impl AddAssign<Duration> for Instant {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        self.checked_sub(rhs)
            .expect("overflow when subtracting duration from instant")
    }
}

impl SubAssign<Duration> for Instant {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Instant) -> Self::Output {
        let nanos = self
            .0
            .checked_sub(rhs.0)
            .expect("overflow when subtracting instants");
        Duration::nanoseconds(nanos)
    }
}

impl Display for Instant {
    /// UTC, `YYYY-MM-DD HH:MM:SS` with a fraction when the sub-second part is
    /// not zero.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_naive_utc().format(INSTANT_PATTERN))
    }
}

impl Debug for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instant({})", self)
    }
}

impl FromStr for Instant {
    type Err = ConversionError;

    /// Parses the canonical text in UTC; see [`Converter::parse_instant`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Converter::new().parse_instant(s, &TimeZoneName::utc(), None)
    }
}
