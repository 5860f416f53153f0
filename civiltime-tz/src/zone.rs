use std::fmt::{Display, Write};

use chrono::{Duration, FixedOffset, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

/// Rules of a resolved timezone.
///
/// Offsets are always computed for the specific instant or civil time being
/// converted; a `Zone` never assumes that its offset is constant.
///
/// ## Gaps and folds
///
/// A civil time that occurs twice (a fold, when clocks are set back) maps to
/// the earliest of the two instants. A civil time that never occurs (a gap,
/// when clocks are set forward) is read with the offset in force before the
/// transition, which moves it forward by the length of the gap: 02:30 on a
/// day where New York jumps from 02:00 to 03:00 becomes 03:30 EDT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// A zone from the IANA database.
    Iana(Tz),
    /// A zone that is always at the same offset from UTC.
    Fixed(FixedOffset),
}

impl Zone {
    /// Offset from UTC in force at `utc`.
    pub fn offset_at(&self, utc: &NaiveDateTime) -> FixedOffset {
        match self {
            Zone::Iana(tz) => tz.offset_from_utc_datetime(utc).fix(),
            Zone::Fixed(offset) => *offset,
        }
    }

    /// Civil time shown by clocks in this zone at `utc`.
    pub fn local_from_utc(&self, utc: &NaiveDateTime) -> Option<NaiveDateTime> {
        let offset = self.offset_at(utc);
        utc.checked_add_signed(Duration::seconds(offset.local_minus_utc().into()))
    }

    /// UTC time at which clocks in this zone show `local`, disambiguated as
    /// described in the type documentation. `None` only when the result is
    /// outside of what [`NaiveDateTime`] can represent.
    pub fn utc_from_local(&self, local: &NaiveDateTime) -> Option<NaiveDateTime> {
        let offsets = match self {
            Zone::Iana(tz) => tz.offset_from_local_datetime(local).map(|o| o.fix()),
            Zone::Fixed(offset) => LocalResult::Single(*offset),
        };

        match offsets {
            LocalResult::Single(offset) => shift(local, offset),
            LocalResult::Ambiguous(a, b) => match (shift(local, a), shift(local, b)) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            },
            LocalResult::None => {
                // a day before lands safely on the far side of the transition
                let probe = local.checked_sub_signed(Duration::days(1))?;
                shift(local, self.offset_at(&probe))
            }
        }
    }

    /// Formats the civil time at `utc` using a strftime-like `pattern`.
    ///
    /// `%Z` renders the abbreviation for IANA zones and the numeric offset for
    /// fixed zones. Fails if `pattern` contains an invalid specifier.
    pub fn format(&self, utc: &NaiveDateTime, pattern: &str) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        match self {
            Zone::Iana(tz) => write!(out, "{}", tz.from_utc_datetime(utc).format(pattern))?,
            Zone::Fixed(offset) => {
                write!(out, "{}", offset.from_utc_datetime(utc).format(pattern))?
            }
        }

        Ok(out)
    }
}

fn shift(local: &NaiveDateTime, offset: FixedOffset) -> Option<NaiveDateTime> {
    local.checked_sub_signed(Duration::seconds(offset.local_minus_utc().into()))
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Iana(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}
