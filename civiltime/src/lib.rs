//! Timezone-aware dates, times of day and instants.
//!
//! # Usage
//!
//! `civiltime` keeps civil time, as read off a wall clock, apart from
//! absolute time:
//!
//! * [`Date`]: a day of the proleptic Gregorian calendar, without a timezone.
//! * [`TimeOfDay`]: time elapsed since local midnight, with nanosecond
//!   resolution.
//! * [`Instant`]: a point on the timeline, as nanoseconds since the UNIX
//!   epoch.
//!
//! The only way to move between the two is through a [`Converter`] and a
//! [`TimeZoneName`]. The converter looks the zone up every time and computes
//! the UTC offset for the exact instant being converted, so daylight saving
//! transitions are always honoured.
//!
//! ## Example
//!
//! ```rust
//! use civiltime::{literals::AUG, Converter, Days, TimeZoneName};
//!
//! # fn main() -> civiltime::ConversionResult<()> {
//! let converter = Converter::new();
//! let tz = TimeZoneName::new("Europe/Berlin");
//!
//! let date = AUG / 11 / 2009;
//! assert_eq!(date.to_string(), "2009-08-11");
//! assert_eq!((date + Days(30)).to_string(), "2009-09-10");
//!
//! // midnight in Berlin is 22:00 UTC the day before during summer time
//! let midnight = converter.instant_from_date(date, &tz)?;
//! assert_eq!(midnight.to_string(), "2009-08-10 22:00:00");
//!
//! let instant = converter.parse_instant("2009-08-11 12:30:00", &tz, None)?;
//! let (day, tod) = converter.components(instant, &tz)?;
//! assert_eq!((day, tod.to_string()), (date, "12:30:00".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! # Timezones
//!
//! Names are resolved by a [`ZoneResolver`], by default the IANA database
//! ([`TzDatabase`]), which also understands a few aliases such as `EST` and
//! `current` for the zone of the host. Tests that need deterministic rules
//! can swap in a [`FixedZones`] table through
//! [`Converter::with_resolver`]. Unknown names are always reported as
//! [`ConversionError::UnknownTimeZone`], never replaced by another zone.
//!
//! # Text
//!
//! | type        | canonical text                   | example                   |
//! |-------------|----------------------------------|---------------------------|
//! | `Date`      | `%F`                             | `2009-08-11`              |
//! | `TimeOfDay` | `HH:MM:SS[.fraction]`            | `09:30:00.25`             |
//! | `Instant`   | `%F %T%.f`, in UTC               | `2009-08-11 16:00:00.005` |
//!
//! Every type parses back its own text through [`FromStr`](std::str::FromStr).
//! With the `serde` feature (enabled by default) the same text is used for
//! serialization.

/// Civil dates
pub mod date;
/// Conversions through a timezone
pub mod convert;
/// Errors
pub mod error;
/// Textual patterns and duration display
pub mod fmt;
/// Absolute time
pub mod instant;
pub mod literals;
#[cfg(feature = "serde")]
pub mod serialize;
/// Time since midnight
pub mod time_of_day;

pub use chrono::Duration;
pub use civiltime_tz::{
    FixedZones, TimeZoneName, TzDatabase, UnknownTimeZoneError, Zone, ZoneResolver,
};
pub use convert::Converter;
pub use date::{Date, DateRange, Days};
pub use error::{ConversionError, ConversionResult, ParseError};
pub use instant::Instant;
pub use time_of_day::TimeOfDay;
