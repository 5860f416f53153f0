use std::{
    fmt::{Debug, Display, Write},
    iter::Once,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use chrono::{Datelike, NaiveDate};

use crate::{
    fmt::{self, DATE_PATTERN},
    ConversionError, ConversionResult, Duration, ParseError,
};

/// Days between 0001-01-01 and 1970-01-01 in the proleptic Gregorian
/// calendar.
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Calendar date in the proleptic Gregorian calendar, without a timezone.
///
/// Ordered by year, then month, then day. Day arithmetic is done through
/// [`Days`] and never wraps around: the operators panic when the result
/// would fall outside of [`Date::MIN`]..=[`Date::MAX`], while
/// [`Date::checked_add_days`] and [`Date::checked_sub_days`] return `None`.
///
/// A date is also a sequence holding just itself, which lets functions
/// taking `impl IntoIterator<Item = Date>` accept either a single date or a
/// [`DateRange`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(NaiveDate);

impl Date {
    /// Earliest representable date, well before year 0000.
    pub const MIN: Date = Date(NaiveDate::MIN);
    /// Latest representable date, well after year 9999.
    pub const MAX: Date = Date(NaiveDate::MAX);

    /// Date for the civil `year`, `month` and `day`, or `None` when the day
    /// does not exist.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Date> {
        NaiveDate::from_ymd_opt(year, month, day).map(Date)
    }

    /// Date for the civil `year`, `month` and `day`.
    ///
    /// # Panics
    ///
    /// Panics if the day does not exist, e.g. 2021-02-29.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid civil date {year:04}-{month:02}-{day:02}"))
    }

    /// Date `days` after 1970-01-01.
    pub fn from_days_since_epoch(days: i64) -> Option<Date> {
        let days = days.checked_add(EPOCH_DAYS_FROM_CE)?;
        NaiveDate::from_num_days_from_ce_opt(i32::try_from(days).ok()?).map(Date)
    }

    /// Signed number of days since 1970-01-01.
    pub fn days_since_epoch(self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - EPOCH_DAYS_FROM_CE
    }

    /// Seconds between the epoch and midnight UTC of this date.
    pub fn unix_ts(self) -> i64 {
        self.days_since_epoch() * 86_400
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1 to 12
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// 1 to 31
    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn tomorrow(self) -> Date {
        self + Days(1)
    }

    pub fn yesterday(self) -> Date {
        self - Days(1)
    }

    /// Moves to the next day in place.
    pub fn increment(&mut self) -> &mut Date {
        *self += Days(1);
        self
    }

    /// Moves to the previous day in place.
    pub fn decrement(&mut self) -> &mut Date {
        *self -= Days(1);
        self
    }

    pub fn checked_add_days(self, days: Days) -> Option<Date> {
        let duration = days.to_duration()?;
        self.0.checked_add_signed(duration).map(Date)
    }

    pub fn checked_sub_days(self, days: Days) -> Option<Date> {
        let duration = days.to_duration()?;
        self.0.checked_sub_signed(duration).map(Date)
    }

    /// Every date from `start` up to, but excluding, `end`.
    ///
    /// ```
    /// use civiltime::Date;
    ///
    /// let start = Date::from_ymd(2024, 2, 27);
    /// let days: Vec<_> = Date::range(start, start + civiltime::Days(3)).collect();
    /// assert_eq!(days.last(), Some(&Date::from_ymd(2024, 2, 29)));
    /// ```
    pub fn range(start: Date, end: Date) -> DateRange {
        DateRange {
            next: Some(start).filter(|start| *start < end),
            end,
        }
    }

    /// Formats the date with a strftime-like `pattern`.
    ///
    /// Fails if `pattern` asks for fields a date does not have, such as
    /// `%H` or `%z`.
    pub fn format(self, pattern: &str) -> ConversionResult<String> {
        fmt::validate(pattern)?;
        let mut out = String::new();
        write!(out, "{}", self.0.format(pattern))
            .map_err(|_| ConversionError::InvalidPattern(pattern.to_string()))?;
        Ok(out)
    }

    /// Parses a date with a strftime-like `pattern`, which must consume the
    /// whole input.
    pub fn parse_from_str(input: &str, pattern: &str) -> ConversionResult<Date> {
        fmt::validate(pattern)?;
        let civil = fmt::parse_civil(input, pattern)
            .map_err(|e| ParseError::new(input, pattern).with_source(e))?;

        Ok(Date(civil.date))
    }

    /// The underlying `chrono` date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<Days> for Date {
    type Output = Date;

    fn add(self, rhs: Days) -> Self::Output {
        self.checked_add_days(rhs)
            .expect("date out of range when adding days")
    }
}

impl AddAssign<Days> for Date {
    fn add_assign(&mut self, rhs: Days) {
        *self = *self + rhs;
    }
}

impl Sub<Days> for Date {
    type Output = Date;

    fn sub(self, rhs: Days) -> Self::Output {
        self.checked_sub_days(rhs)
            .expect("date out of range when subtracting days")
    }
}

impl SubAssign<Days> for Date {
    fn sub_assign(&mut self, rhs: Days) {
        *self = *self - rhs;
    }
}

impl Sub<Date> for Date {
    type Output = Days;

    fn sub(self, rhs: Date) -> Self::Output {
        Days(self.days_since_epoch() - rhs.days_since_epoch())
    }
}

impl IntoIterator for Date {
    type Item = Date;
    type IntoIter = Once<Date>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self)
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_PATTERN))
    }
}

impl Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self)
    }
}

impl FromStr for Date {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse_from_str(s, DATE_PATTERN)
    }
}

/// Signed number of whole days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Days(pub i64);

impl Days {
    /// Length of this many 24 hour days, or `None` on overflow.
    pub fn to_duration(self) -> Option<Duration> {
        Duration::try_days(self.0)
    }
}

impl Add for Days {
    type Output = Days;

    fn add(self, rhs: Days) -> Self::Output {
        Days(self.0 + rhs.0)
    }
}

impl Sub for Days {
    type Output = Days;

    fn sub(self, rhs: Days) -> Self::Output {
        Days(self.0 - rhs.0)
    }
}

impl Neg for Days {
    type Output = Days;

    fn neg(self) -> Self::Output {
        Days(-self.0)
    }
}

/// Iterator over consecutive dates, see [`Date::range`].
#[derive(Clone, Debug)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current
            .checked_add_days(Days(1))
            .filter(|next| *next < self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self
            .next
            .map_or(0, |next| (self.end - next).0 as usize);
        (len, Some(len))
    }
}

impl ExactSizeIterator for DateRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_days() {
        assert_eq!(Date::from_ymd(1970, 1, 1).days_since_epoch(), 0);
        assert_eq!(Date::from_days_since_epoch(0), Some(Date::from_ymd(1970, 1, 1)));
        assert_eq!(
            Date::from_days_since_epoch(14_467),
            Some(Date::from_ymd(2009, 8, 11))
        );
        assert_eq!(Date::from_ymd(1969, 12, 31).days_since_epoch(), -1);
        assert_eq!(Date::from_ymd(2009, 8, 11).unix_ts(), 1_249_948_800);
        assert_eq!(Date::from_days_since_epoch(i64::MAX), None);
    }

    #[test]
    fn leap_years() {
        assert!(Date::from_ymd_opt(2000, 2, 29).is_some());
        assert!(Date::from_ymd_opt(2024, 2, 29).is_some());
        assert!(Date::from_ymd_opt(1900, 2, 29).is_none());
        assert!(Date::from_ymd_opt(2023, 2, 29).is_none());
        assert_eq!(Date::from_ymd(2024, 2, 28).tomorrow(), Date::from_ymd(2024, 2, 29));
        assert_eq!(Date::from_ymd(2023, 2, 28).tomorrow(), Date::from_ymd(2023, 3, 1));
    }

    #[test]
    #[should_panic]
    fn invalid_civil_date() {
        Date::from_ymd(2021, 2, 29);
    }

    #[test]
    fn no_wrap_at_bounds() {
        assert_eq!(Date::MAX.checked_add_days(Days(1)), None);
        assert_eq!(Date::MIN.checked_sub_days(Days(1)), None);
        assert_eq!(Date::MIN.checked_add_days(Days(i64::MAX)), None);
        assert!(Date::MIN.year() < 0);
        assert!(Date::MAX.year() > 9999);
    }

    #[test]
    fn in_place_steps() {
        let mut d = Date::from_ymd(2009, 12, 31);
        d.increment();
        assert_eq!(d, Date::from_ymd(2010, 1, 1));
        d.decrement().decrement();
        assert_eq!(d, Date::from_ymd(2009, 12, 30));
    }

    #[test]
    fn ranges() {
        let start = Date::from_ymd(2009, 8, 30);
        let end = Date::from_ymd(2009, 9, 2);
        let range = Date::range(start, end);
        assert_eq!(range.len(), 3);
        assert_eq!(
            range.map(|d| d.to_string()).collect::<Vec<_>>(),
            ["2009-08-30", "2009-08-31", "2009-09-01"]
        );
        assert_eq!(Date::range(end, start).count(), 0);
        assert_eq!(Date::range(start, start).count(), 0);

        let single: Vec<_> = start.into_iter().collect();
        assert_eq!(single, [start]);
    }

    #[test]
    fn text() {
        let d = Date::from_ymd(2009, 8, 11);
        assert_eq!(d.to_string(), "2009-08-11");
        assert_eq!(format!("{:?}", d), "Date(2009-08-11)");
        assert_eq!("2009-08-11".parse::<Date>(), Ok(d));
        assert_eq!(d.format("%d/%m/%Y").unwrap(), "11/08/2009");
        assert_eq!(Date::parse_from_str("11/08/2009", "%d/%m/%Y"), Ok(d));
        assert!(matches!(
            "2009-08-11x".parse::<Date>(),
            Err(ConversionError::Parse(e)) if e.input() == "2009-08-11x"
        ));
    }

    #[test]
    fn format_without_date_fields() {
        let d = Date::from_ymd(2009, 8, 11);
        for pattern in ["%H", "%T", "%F %z", "%Z"] {
            assert!(
                matches!(d.format(pattern), Err(ConversionError::InvalidPattern(p)) if p == pattern),
                "{pattern}"
            );
        }
        assert_eq!(d.format("%A %e %B").unwrap(), "Tuesday 11 August");
    }
}
