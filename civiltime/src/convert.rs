use chrono::NaiveTime;
use civiltime_tz::{TimeZoneName, TzDatabase, Zone, ZoneResolver};
use tracing::debug;

use crate::{
    fmt::{self, DATE_PATTERN, INSTANT_PATTERN, MIN_DATE_TIME_LEN},
    ConversionError, ConversionResult, Date, Days, Instant, ParseError, TimeOfDay,
};

/// Moves between civil dates and times of day and absolute instants, through
/// the rules of a named timezone.
///
/// The timezone is looked up by the [`ZoneResolver`] on every call and the
/// UTC offset is computed for the exact instant, or local day, being
/// converted. Nothing is cached, so a `Converter` can be shared freely
/// between threads.
///
/// Local times that fall in a daylight saving gap or fold are resolved as
/// documented on [`Zone`].
///
/// ```
/// use civiltime::{literals::AUG, Converter, TimeOfDay, TimeZoneName};
///
/// # fn main() -> civiltime::ConversionResult<()> {
/// let converter = Converter::new();
/// let tz = TimeZoneName::new("EST");
///
/// let noon = converter.instant_from_date_time(AUG / 11 / 2009, TimeOfDay::from_hms(12, 0, 0), &tz)?;
/// assert_eq!(noon.to_string(), "2009-08-11 16:00:00");
/// assert_eq!(converter.components(noon, &tz)?, (AUG / 11 / 2009, TimeOfDay::from_hms(12, 0, 0)));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Converter<R = TzDatabase> {
    resolver: R,
}

impl Converter<TzDatabase> {
    /// Converter backed by the IANA timezone database.
    pub fn new() -> Converter<TzDatabase> {
        Converter::with_resolver(TzDatabase::new())
    }
}

impl<R: ZoneResolver> Converter<R> {
    /// Converter backed by any rule set, e.g. a
    /// [`FixedZones`](civiltime_tz::FixedZones) table in tests.
    pub fn with_resolver(resolver: R) -> Converter<R> {
        Converter { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Rules of the zone named `tz`.
    pub fn zone(&self, tz: &TimeZoneName) -> ConversionResult<Zone> {
        Ok(self.resolver.resolve(tz)?)
    }

    /// Local date in `tz` at `instant`.
    pub fn date_from_instant(&self, instant: Instant, tz: &TimeZoneName) -> ConversionResult<Date> {
        let zone = self.zone(tz)?;
        zone.local_from_utc(&instant.to_naive_utc())
            .map(|local| Date::from(local.date()))
            .ok_or_else(|| out_of_range(instant))
    }

    /// Local date in `tz`, `nanos` after the epoch.
    pub fn date_from_nanos(&self, nanos: i64, tz: &TimeZoneName) -> ConversionResult<Date> {
        self.date_from_instant(Instant::from_nanos(nanos), tz)
    }

    /// Local date in `tz`, `ts` real-valued seconds after the epoch.
    pub fn date_from_unix_ts(&self, ts: f64, tz: &TimeZoneName) -> ConversionResult<Date> {
        self.date_from_instant(Instant::from_unix_ts(ts), tz)
    }

    /// Current local date in `tz`.
    ///
    /// Reads the system time. Code that needs a controllable time source
    /// should pass an instant from its own clock to
    /// [`Converter::date_from_instant`] instead.
    pub fn today(&self, tz: &TimeZoneName) -> ConversionResult<Date> {
        self.date_from_instant(Instant::now(), tz)
    }

    /// Instant of local midnight of `date` in `tz`.
    pub fn instant_from_date(&self, date: Date, tz: &TimeZoneName) -> ConversionResult<Instant> {
        let zone = self.zone(tz)?;
        let local = date.naive().and_time(NaiveTime::MIN);
        zone.utc_from_local(&local)
            .and_then(|utc| Instant::from_naive_utc(&utc))
            .ok_or_else(|| out_of_range(date))
    }

    /// Instant `tod` after local midnight of `date` in `tz`.
    ///
    /// The time of day is added to midnight as elapsed time, so on days
    /// with a daylight saving transition the civil time read off the clock
    /// may differ from `tod`.
    pub fn instant_from_date_time(
        &self,
        date: Date,
        tod: TimeOfDay,
        tz: &TimeZoneName,
    ) -> ConversionResult<Instant> {
        let midnight = self.instant_from_date(date, tz)?;
        midnight
            .checked_add(tod.to_duration())
            .ok_or_else(|| out_of_range(format_args!("{date} {tod}")))
    }

    /// Time elapsed in `tz` since the local midnight before `instant`.
    ///
    /// This is at least 24h during the last hour of a 25 hour day, which
    /// keeps [`Converter::components`] exact.
    pub fn time_of_day_from_instant(
        &self,
        instant: Instant,
        tz: &TimeZoneName,
    ) -> ConversionResult<TimeOfDay> {
        let midnight = self.midnight(instant, tz)?;
        Ok(TimeOfDay::from_duration(instant - midnight))
    }

    /// Local date and time of day of `instant` in `tz`, such that
    /// [`Converter::instant_from_date_time`] gives back `instant`.
    ///
    /// Fails with [`ConversionError::OutOfRange`] when the local midnight of
    /// `instant` falls before [`Instant::MIN`], which happens within a day
    /// of the start of the range in zones east of UTC.
    pub fn components(
        &self,
        instant: Instant,
        tz: &TimeZoneName,
    ) -> ConversionResult<(Date, TimeOfDay)> {
        let date = self.date_from_instant(instant, tz)?;
        let midnight = self.instant_from_date(date, tz)?;
        Ok((date, TimeOfDay::from_duration(instant - midnight)))
    }

    /// Start of the local day of `instant` in `tz`.
    pub fn midnight(&self, instant: Instant, tz: &TimeZoneName) -> ConversionResult<Instant> {
        let date = self.date_from_instant(instant, tz)?;
        self.instant_from_date(date, tz)
    }

    /// Start of the local day after the day of `instant` in `tz`.
    pub fn next_midnight(&self, instant: Instant, tz: &TimeZoneName) -> ConversionResult<Instant> {
        let date = self.date_from_instant(instant, tz)?;
        let tomorrow = date
            .checked_add_days(Days(1))
            .ok_or_else(|| out_of_range(date))?;
        self.instant_from_date(tomorrow, tz)
    }

    /// Parses a date with `pattern`, [`DATE_PATTERN`] by default.
    pub fn parse_date(&self, input: &str, pattern: Option<&str>) -> ConversionResult<Date> {
        Date::parse_from_str(input, pattern.unwrap_or(DATE_PATTERN))
    }

    /// Parses civil text as read off the clocks in `tz`.
    ///
    /// Without a `pattern`, inputs shorter than 14 characters are read with
    /// [`DATE_PATTERN`] as local midnight and longer ones with
    /// [`INSTANT_PATTERN`]. A trailing timezone name in the input, e.g.
    /// `2009-08-11 12:00:00 Europe/Berlin`, replaces `tz`; so does the
    /// token read by `%Z` when a pattern is given. A numeric offset read by
    /// `%z` takes precedence over both.
    pub fn parse_instant(
        &self,
        input: &str,
        tz: &TimeZoneName,
        pattern: Option<&str>,
    ) -> ConversionResult<Instant> {
        let (body, token, pattern) = match pattern {
            Some(pattern) => {
                fmt::validate(pattern)?;
                let token = if fmt::has_zone_name(pattern) {
                    fmt::split_zone(input).1
                } else {
                    None
                };
                (input, token, pattern)
            }
            None => {
                let (body, token) = fmt::split_zone(input);
                let pattern = if body.len() < MIN_DATE_TIME_LEN {
                    DATE_PATTERN
                } else {
                    INSTANT_PATTERN
                };
                (body, token, pattern)
            }
        };

        let civil = fmt::parse_civil(body, pattern)
            .map_err(|e| ParseError::new(input, pattern).with_source(e))?;

        let zone = match (civil.offset, token) {
            (Some(offset), _) => Zone::Fixed(offset),
            (None, Some(token)) => {
                debug!(input, zone = token, "timezone taken from input");
                self.zone(&TimeZoneName::new(token))?
            }
            (None, None) => self.zone(tz)?,
        };

        let local = civil.date.and_time(civil.time);
        zone.utc_from_local(&local)
            .and_then(|utc| Instant::from_naive_utc(&utc))
            .ok_or_else(|| out_of_range(input))
    }

    /// Formats `instant` as read off the clocks in `tz`, with `pattern`,
    /// [`INSTANT_PATTERN`] by default.
    pub fn format_instant(
        &self,
        instant: Instant,
        tz: &TimeZoneName,
        pattern: Option<&str>,
    ) -> ConversionResult<String> {
        let pattern = pattern.unwrap_or(INSTANT_PATTERN);
        fmt::validate(pattern)?;
        let zone = self.zone(tz)?;
        zone.format(&instant.to_naive_utc(), pattern)
            .map_err(|_| ConversionError::InvalidPattern(pattern.to_string()))
    }
}

fn out_of_range(what: impl std::fmt::Display) -> ConversionError {
    ConversionError::OutOfRange(what.to_string())
}
