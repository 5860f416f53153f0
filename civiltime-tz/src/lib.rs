//! ## `ZoneResolver` trait
//!
//! Simple trait that maps a [`TimeZoneName`] onto the rules of a [`Zone`],
//! i.e. looking it up in the IANA database, in a fixed table used by tests,
//! etc. Conversions between civil dates and instants only ever go through a
//! resolver, so the rule set can be swapped without touching the callers.
//!
//! ## Example usage of `ZoneResolver`
//!
//! ```rust
//! use chrono::NaiveDate;
//! use civiltime_tz::{tzdb::TzDatabase, TimeZoneName, ZoneResolver};
//!
//! # fn main() -> Result<(), civiltime_tz::UnknownTimeZoneError> {
//! let zone = TzDatabase::new().resolve(&TimeZoneName::new("EST"))?;
//!
//! // EST is an alias for America/New_York, which observes DST in August
//! let utc = NaiveDate::from_ymd_opt(2009, 8, 11)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! assert_eq!(zone.offset_at(&utc).local_minus_utc(), -4 * 3600);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

/// Deterministic rule set for tests
pub mod fixed;
/// Distinct label for timezone names
pub mod name;
/// IANA timezone database, through `chrono-tz`
pub mod tzdb;
/// Resolved zone rules
pub mod zone;

pub use fixed::FixedZones;
pub use name::TimeZoneName;
pub use tzdb::TzDatabase;
pub use zone::Zone;

/// The timezone name could not be resolved by a [`ZoneResolver`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized timezone: {name:?}")]
pub struct UnknownTimeZoneError {
    name: String,
}

impl UnknownTimeZoneError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name exactly as it was passed to the resolver.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Simple trait that maps a timezone name onto its rules, which can then be
/// queried for the UTC offset at any instant or civil time.
pub trait ZoneResolver: Send + Sync {
    /// Looks up `name`, failing with [`UnknownTimeZoneError`] when the name
    /// is not known. Implementations must never substitute another zone.
    fn resolve(&self, name: &TimeZoneName) -> Result<Zone, UnknownTimeZoneError>;
}

impl<R: ZoneResolver + ?Sized> ZoneResolver for &R {
    fn resolve(&self, name: &TimeZoneName) -> Result<Zone, UnknownTimeZoneError> {
        (**self).resolve(name)
    }
}

impl<R: ZoneResolver + ?Sized> ZoneResolver for Box<R> {
    fn resolve(&self, name: &TimeZoneName) -> Result<Zone, UnknownTimeZoneError> {
        (**self).resolve(name)
    }
}

impl<R: ZoneResolver + ?Sized> ZoneResolver for Arc<R> {
    fn resolve(&self, name: &TimeZoneName) -> Result<Zone, UnknownTimeZoneError> {
        (**self).resolve(name)
    }
}
