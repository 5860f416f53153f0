use civiltime::Instant;
use minstant::Anchor;

use crate::Clock;

/// TSC based clock backed by [`minstant`], converted to UNIX time through an
/// [`Anchor`] taken at construction.
#[derive(Default)]
pub struct MinstantClock {
    anchor: Anchor,
}

impl MinstantClock {
    pub fn new() -> MinstantClock {
        MinstantClock::default()
    }

    /// Instant at which `reading` was taken.
    pub fn instant_from_reading(&self, reading: minstant::Instant) -> Instant {
        let nanos = reading.as_unix_nanos(&self.anchor);
        Instant::from_nanos(i64::try_from(nanos).unwrap_or(i64::MAX))
    }
}

impl Clock for MinstantClock {
    #[inline]
    fn now(&self) -> Instant {
        self.instant_from_reading(minstant::Instant::now())
    }
}
