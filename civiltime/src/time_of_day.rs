use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use crate::{Duration, ParseError};

/// Textual shape accepted by [`TimeOfDay::from_str`].
pub const TIME_OF_DAY_PATTERN: &str = "HH:MM:SS[.fraction]";

const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// Time elapsed since local midnight, with nanosecond resolution.
///
/// Usually within [`TimeOfDay::min`]..=[`TimeOfDay::max`]. On a day that is
/// 25 hours long because clocks were set back, the last hour is at 24h or
/// more since midnight; see
/// [`Converter::time_of_day_from_instant`](crate::Converter::time_of_day_from_instant).
///
/// Text is `HH:MM:SS` followed by the fraction of a second when it is not
/// zero, trimmed of trailing zeros:
///
/// ```
/// use civiltime::TimeOfDay;
///
/// let tod: TimeOfDay = "9:30:0.25".parse().unwrap();
/// assert_eq!(tod, TimeOfDay::from_hms_nano(9, 30, 0, 250_000_000));
/// assert_eq!(tod.to_string(), "09:30:00.25");
///
/// // missing fields are zero
/// assert_eq!("0:0:.005".parse::<TimeOfDay>().unwrap().to_string(), "00:00:00.005");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(Duration);

impl TimeOfDay {
    /// Midnight.
    pub fn min() -> TimeOfDay {
        TimeOfDay(Duration::zero())
    }

    /// One nanosecond before the next midnight of a 24 hour day.
    pub fn max() -> TimeOfDay {
        TimeOfDay(Duration::nanoseconds(NANOS_PER_DAY - 1))
    }

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> TimeOfDay {
        TimeOfDay::from_hms_nano(hours, minutes, seconds, 0)
    }

    /// Out of range minutes, seconds or nanoseconds are a caller error and
    /// only checked in debug builds.
    pub fn from_hms_nano(hours: u32, minutes: u32, seconds: u32, nanos: u32) -> TimeOfDay {
        debug_assert!(minutes < 60, "minutes out of range: {minutes}");
        debug_assert!(seconds < 60, "seconds out of range: {seconds}");
        debug_assert!(
            i64::from(nanos) < NANOS_PER_SEC,
            "nanoseconds out of range: {nanos}"
        );

        TimeOfDay::from_nanos(
            i64::from(hours) * NANOS_PER_HOUR
                + i64::from(minutes) * NANOS_PER_MINUTE
                + i64::from(seconds) * NANOS_PER_SEC
                + i64::from(nanos),
        )
    }

    #[inline]
    pub fn from_nanos(nanos: i64) -> TimeOfDay {
        TimeOfDay(Duration::nanoseconds(nanos))
    }

    #[inline]
    pub fn from_duration(since_midnight: Duration) -> TimeOfDay {
        TimeOfDay(since_midnight)
    }

    /// Time elapsed since midnight.
    #[inline]
    pub fn to_duration(self) -> Duration {
        self.0
    }

    /// Nanoseconds since midnight.
    #[inline]
    pub fn as_nanos(self) -> i64 {
        self.0.num_nanoseconds().unwrap_or(i64::MAX)
    }

    pub fn hours(self) -> i64 {
        self.as_nanos() / NANOS_PER_HOUR
    }

    pub fn minutes(self) -> u32 {
        (self.as_nanos() / NANOS_PER_MINUTE % 60) as u32
    }

    pub fn seconds(self) -> u32 {
        (self.as_nanos() / NANOS_PER_SEC % 60) as u32
    }

    pub fn subsec_nanos(self) -> u32 {
        (self.as_nanos() % NANOS_PER_SEC) as u32
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        TimeOfDay::min()
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )?;

        let mut nanos = self.subsec_nanos();
        if nanos > 0 {
            let mut digits = 9;
            while nanos % 10 == 0 {
                nanos /= 10;
                digits -= 1;
            }
            write!(f, ".{:0width$}", nanos, width = digits)?;
        }

        Ok(())
    }
}

impl Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeOfDay({})", self)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    /// Parses `HH:MM:SS[.fraction]`, where any trailing fields may be left
    /// out: `"1"` is one hour and `"0:2"` two minutes. Up to 9 fractional
    /// digits are read. Hours may reach 24 so that the last hour of a 25
    /// hour day can be read back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseError::new(s, TIME_OF_DAY_PATTERN);
        if s.is_empty() {
            return Err(error());
        }

        let (hours, rest) = s.split_once(':').unwrap_or((s, ""));
        let (minutes, rest) = rest.split_once(':').unwrap_or((rest, ""));
        let (seconds, fraction) = rest.split_once('.').unwrap_or((rest, ""));

        let hours = field(hours).filter(|h| *h <= 24).ok_or_else(error)?;
        let minutes = field(minutes).filter(|m| *m < 60).ok_or_else(error)?;
        let seconds = field(seconds).filter(|s| *s < 60).ok_or_else(error)?;
        if fraction.len() > 9 {
            return Err(error());
        }
        let mut nanos = field(fraction).ok_or_else(error)?;
        for _ in fraction.len()..9 {
            nanos *= 10;
        }

        Ok(TimeOfDay::from_nanos(
            hours * NANOS_PER_HOUR + minutes * NANOS_PER_MINUTE + seconds * NANOS_PER_SEC + nanos,
        ))
    }
}

/// An empty field is zero; anything else must be all digits.
fn field(text: &str) -> Option<i64> {
    if text.is_empty() {
        return Some(0);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) || text.len() > 9 {
        return None;
    }

    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let min = TimeOfDay::min();
        assert_eq!(
            (min.hours(), min.minutes(), min.seconds(), min.subsec_nanos()),
            (0, 0, 0, 0)
        );

        let max = TimeOfDay::max();
        assert_eq!(
            (max.hours(), max.minutes(), max.seconds(), max.subsec_nanos()),
            (23, 59, 59, 999_999_999)
        );
        assert!(min < max);
    }

    #[test]
    fn partial_inputs() {
        let cases = [
            ("1", TimeOfDay::from_hms(1, 0, 0)),
            ("0:2", TimeOfDay::from_hms(0, 2, 0)),
            ("12:34:56", TimeOfDay::from_hms(12, 34, 56)),
            ("0:0:0.000004", TimeOfDay::from_nanos(4_000)),
            ("0:0:.005", TimeOfDay::from_nanos(5_000_000)),
            ("23:59:59.999999999", TimeOfDay::max()),
            ("24:30", TimeOfDay::from_hms(24, 30, 0)),
        ];
        for (text, expected) in cases {
            assert_eq!(text.parse::<TimeOfDay>(), Ok(expected), "{text}");
        }
        assert_eq!(
            "0:0:0.000004".parse::<TimeOfDay>().unwrap().to_duration(),
            Duration::microseconds(4)
        );
    }

    #[test]
    fn rejected_inputs() {
        for text in [
            "",
            "ab",
            "1:60",
            "1:0:60",
            "25",
            "1:2:3.4567890123",
            "1:2:3.x",
            "1:2:3:4",
            " 1",
            "-1",
        ] {
            let err = text.parse::<TimeOfDay>().unwrap_err();
            assert_eq!(err.input(), text);
            assert_eq!(err.pattern(), TIME_OF_DAY_PATTERN);
        }
    }

    #[test]
    fn display_trims_fraction() {
        assert_eq!(TimeOfDay::min().to_string(), "00:00:00");
        assert_eq!(TimeOfDay::max().to_string(), "23:59:59.999999999");
        assert_eq!(TimeOfDay::from_nanos(5_000_000).to_string(), "00:00:00.005");
        assert_eq!(
            TimeOfDay::from_hms_nano(9, 5, 7, 120_000).to_string(),
            "09:05:07.00012"
        );
        assert_eq!(
            format!("{:?}", TimeOfDay::from_hms(1, 2, 3)),
            "TimeOfDay(01:02:03)"
        );
    }
}
