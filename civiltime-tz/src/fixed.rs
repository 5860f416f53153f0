use std::collections::HashMap;

use chrono::{FixedOffset, Offset, Utc};

use crate::{TimeZoneName, UnknownTimeZoneError, Zone, ZoneResolver};

/// Resolves names from a fixed table of constant offsets. No aliases, no
/// DST and no host lookups, which makes conversions fully deterministic.
#[derive(Clone, Debug, Default)]
pub struct FixedZones {
    zones: HashMap<String, FixedOffset>,
}

impl FixedZones {
    /// An empty table: every name is unknown.
    pub fn new() -> FixedZones {
        FixedZones::default()
    }

    /// A table that only knows `UTC`.
    pub fn utc() -> FixedZones {
        FixedZones::new().with_zone("UTC", Utc.fix())
    }

    /// Adds (or replaces) a zone named `name` at `offset` from UTC.
    pub fn with_zone(mut self, name: impl Into<String>, offset: FixedOffset) -> FixedZones {
        self.zones.insert(name.into(), offset);
        self
    }
}

impl ZoneResolver for FixedZones {
    fn resolve(&self, name: &TimeZoneName) -> Result<Zone, UnknownTimeZoneError> {
        self.zones
            .get(name.as_str())
            .copied()
            .map(Zone::Fixed)
            .ok_or_else(|| UnknownTimeZoneError::new(name.as_str()))
    }
}
