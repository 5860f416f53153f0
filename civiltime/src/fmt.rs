use std::fmt::Display;

use chrono::{
    format::{self, Fixed, Item, Numeric, Parsed, StrftimeItems},
    FixedOffset, NaiveDate, NaiveTime,
};

use crate::{ConversionError, ConversionResult, Duration};

/// Default pattern for dates, e.g. `2009-08-11`.
pub const DATE_PATTERN: &str = "%F";

/// Default pattern for instants, e.g. `2009-08-11 12:00:00.25`. The
/// fraction is only rendered when the sub-second part is not zero, and is
/// optional when parsing.
pub const INSTANT_PATTERN: &str = "%F %T%.f";

/// Inputs shorter than this are read as a date without a time when no
/// pattern is supplied.
pub const MIN_DATE_TIME_LEN: usize = 14;

/// Checks that `pattern` only contains known specifiers.
pub fn validate(pattern: &str) -> ConversionResult<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConversionError::InvalidPattern(pattern.to_string()));
    }

    Ok(())
}

/// Whether `pattern` contains a `%Z` timezone name.
pub(crate) fn has_zone_name(pattern: &str) -> bool {
    StrftimeItems::new(pattern).any(|item| matches!(item, Item::Fixed(Fixed::TimezoneName)))
}

/// Whether `pattern` reads any field below the day.
pub(crate) fn has_time_fields(pattern: &str) -> bool {
    StrftimeItems::new(pattern).any(|item| {
        matches!(
            item,
            Item::Numeric(
                Numeric::Hour
                    | Numeric::Hour12
                    | Numeric::Minute
                    | Numeric::Second
                    | Numeric::Nanosecond,
                _
            ) | Item::Fixed(Fixed::LowerAmPm | Fixed::UpperAmPm)
        )
    })
}

/// Splits a trailing timezone name off `input`: the last whitespace
/// separated token, if it starts with a letter.
///
/// ```
/// use civiltime::fmt::split_zone;
///
/// assert_eq!(split_zone("2009-08-11 EST"), ("2009-08-11", Some("EST")));
/// assert_eq!(split_zone("2009-08-11 12:00:00"), ("2009-08-11 12:00:00", None));
/// ```
pub fn split_zone(input: &str) -> (&str, Option<&str>) {
    let trimmed = input.trim_end();
    match trimmed.rsplit_once(char::is_whitespace) {
        Some((body, zone)) if zone.starts_with(|c: char| c.is_ascii_alphabetic()) => {
            (body.trim_end(), Some(zone))
        }
        _ => (trimmed, None),
    }
}

/// Civil fields read from text.
#[derive(Debug)]
pub(crate) struct Civil {
    pub(crate) date: NaiveDate,
    pub(crate) time: NaiveTime,
    pub(crate) offset: Option<FixedOffset>,
}

/// Reads `input` with `pattern`. The whole input must be consumed. Missing
/// time fields default to midnight.
pub(crate) fn parse_civil(input: &str, pattern: &str) -> Result<Civil, format::ParseError> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, input, StrftimeItems::new(pattern))?;

    let date = parsed.to_naive_date()?;
    let time = if has_time_fields(pattern) {
        parsed.to_naive_time()?
    } else {
        NaiveTime::MIN
    };

    Ok(Civil {
        date,
        time,
        offset: parsed.to_fixed_offset().ok(),
    })
}

/// Human readable rendering of a [`Duration`], picking the unit that keeps
/// the number small.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayDuration(pub Duration);

impl Display for DisplayDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut units = match self.0.num_nanoseconds() {
            Some(nanos) => nanos as f64,
            None => self.0.num_seconds() as f64 * 1e9,
        };
        if units.abs() < 1e3 {
            return write!(f, "{:.0}ns", units);
        }

        for name in ["us", "ms"] {
            units /= 1e3;
            if units.abs() < 1e3 {
                return write_units(f, units, name);
            }
        }

        units /= 1e3;
        if units.abs() < 60.0 {
            return write_units(f, units, "s");
        }

        write!(f, "{}s", units)
    }
}

fn write_units(f: &mut std::fmt::Formatter<'_>, units: f64, name: &str) -> std::fmt::Result {
    if units.abs() < 10.0 {
        write!(f, "{:.1}{}", units, name)
    } else {
        write!(f, "{:.0}{}", units, name)
    }
}

/// Renders `duration` as, e.g., `250ns`, `1.5us`, `12ms`, `3.2s` or `90s`.
pub fn display_duration(duration: Duration) -> DisplayDuration {
    DisplayDuration(duration)
}
