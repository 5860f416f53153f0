use chrono_tz::Tz;
use tracing::{trace, warn};

use crate::{TimeZoneName, UnknownTimeZoneError, Zone, ZoneResolver};

/// Resolves names against the IANA timezone database bundled by `chrono-tz`.
///
/// A few names are treated as aliases before the lookup:
///
/// * `EST`, `EDT` -> `America/New_York`
/// * `CST`, `CDT` -> `America/Chicago`
/// * an empty name, or `current` -> the zone of the host
///
/// Every other name is looked up verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct TzDatabase;

impl TzDatabase {
    pub fn new() -> TzDatabase {
        TzDatabase
    }
}

impl ZoneResolver for TzDatabase {
    fn resolve(&self, name: &TimeZoneName) -> Result<Zone, UnknownTimeZoneError> {
        let iana = match name.as_str() {
            "EST" | "EDT" => "America/New_York",
            "CST" | "CDT" => "America/Chicago",
            "" | "current" => return host_zone(name),
            other => other,
        };
        trace!(name = %name, iana, "resolving timezone");

        iana.parse::<Tz>()
            .map(Zone::Iana)
            .map_err(|_| UnknownTimeZoneError::new(name.as_str()))
    }
}

/// Zone of the host, as reported by the OS (honours `TZ`).
fn host_zone(name: &TimeZoneName) -> Result<Zone, UnknownTimeZoneError> {
    let host = iana_time_zone::get_timezone().map_err(|e| {
        warn!(error = %e, "unable to determine the host timezone");
        UnknownTimeZoneError::new(name.as_str())
    })?;

    host.parse::<Tz>().map(Zone::Iana).map_err(|_| {
        warn!(host = %host, "host timezone is not in the timezone database");
        UnknownTimeZoneError::new(name.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        let db = TzDatabase::new();
        for (alias, expected) in [
            ("EST", chrono_tz::America::New_York),
            ("EDT", chrono_tz::America::New_York),
            ("CST", chrono_tz::America::Chicago),
            ("CDT", chrono_tz::America::Chicago),
        ] {
            assert_eq!(db.resolve(&alias.into()), Ok(Zone::Iana(expected)));
        }
    }

    #[test]
    fn verbatim_lookup() {
        let db = TzDatabase::new();
        assert_eq!(
            db.resolve(&"Europe/Berlin".into()),
            Ok(Zone::Iana(chrono_tz::Europe::Berlin))
        );
        assert_eq!(db.resolve(&TimeZoneName::utc()), Ok(Zone::Iana(chrono_tz::UTC)));
        assert_eq!(
            db.resolve(&"Nowhere/Fake".into()),
            Err(UnknownTimeZoneError::new("Nowhere/Fake"))
        );
    }

    #[test]
    fn host_zone_is_consistent() {
        // the host zone may be undeterminable in minimal containers, but both
        // spellings must agree with each other
        let db = TzDatabase::new();
        let current = db.resolve(&TimeZoneName::current()).ok();
        let empty = db.resolve(&"".into()).ok();
        assert_eq!(current, empty);
    }
}
