use std::fmt::Display;

/// Name of a timezone, kept apart from plain strings so that it cannot be
/// mixed up with other string parameters. Defaults to `UTC`.
///
/// The name is only a label: it is resolved lazily, every time it is used,
/// by a [`ZoneResolver`](crate::ZoneResolver).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeZoneName(String);

impl TimeZoneName {
    pub fn new(name: impl Into<String>) -> TimeZoneName {
        TimeZoneName(name.into())
    }

    /// `UTC`
    pub fn utc() -> TimeZoneName {
        TimeZoneName::new("UTC")
    }

    /// The zone of the host, whatever it is at resolution time.
    pub fn current() -> TimeZoneName {
        TimeZoneName::new("current")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimeZoneName {
    fn default() -> Self {
        Self::utc()
    }
}

impl From<&str> for TimeZoneName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TimeZoneName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Display for TimeZoneName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
