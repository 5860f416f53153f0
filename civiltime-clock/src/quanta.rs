use civiltime::{Duration, Instant};

use crate::Clock;

/// TSC based clock: stores a start TSC reading together with the system time
/// at that moment, and derives every later instant from the TSC delta.
pub struct QuantaClock {
    clock: quanta::Clock,
    start_time: Instant,
    start_instant: quanta::Instant,
}

impl QuantaClock {
    pub fn new() -> QuantaClock {
        let clock = quanta::Clock::new();
        // this also lazily initializes a global clock which
        // can take up to 200ms if it is not initialized
        let start_instant = clock.now();
        QuantaClock {
            clock,
            start_time: Instant::now(),
            start_instant,
        }
    }

    /// Instant at which `reading` was taken from this clock's TSC.
    pub fn instant_from_reading(&self, reading: quanta::Instant) -> Instant {
        let elapsed = reading.duration_since(self.start_instant);
        let nanos = i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX);
        self.start_time
            .checked_add(Duration::nanoseconds(nanos))
            .unwrap_or(Instant::MAX)
    }
}

impl Default for QuantaClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for QuantaClock {
    #[inline]
    fn now(&self) -> Instant {
        self.instant_from_reading(self.clock.now())
    }
}
