use civiltime::{Duration, Instant};

use crate::{Clock, SystemClock};

/// Measures elapsed time on any [`Clock`].
///
/// ```
/// use civiltime_clock::StopWatch;
///
/// let mut watch = StopWatch::start();
/// // ... some work
/// let lap = watch.mark();
/// assert!(lap <= watch.total_elapsed());
/// ```
#[derive(Debug)]
pub struct StopWatch<C = SystemClock> {
    clock: C,
    start: Instant,
    last: Instant,
}

impl StopWatch<SystemClock> {
    /// Starts a stopwatch on the system clock.
    pub fn start() -> StopWatch<SystemClock> {
        StopWatch::new(SystemClock::new())
    }
}

impl<C: Clock> StopWatch<C> {
    pub fn new(clock: C) -> StopWatch<C> {
        let start = clock.now();
        StopWatch {
            clock,
            start,
            last: start,
        }
    }

    /// Time since the last mark, or since the start, and sets a new mark.
    pub fn mark(&mut self) -> Duration {
        let now = self.clock.now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }

    /// Time since the last mark, or since the start.
    pub fn elapsed(&self) -> Duration {
        self.clock.now() - self.last
    }

    /// Time since the stopwatch was started.
    pub fn total_elapsed(&self) -> Duration {
        self.clock.now() - self.start
    }
}

/// Rate limiter: [`Periodically::ready`] is true at most once per period,
/// e.g. to log progress from a hot loop.
#[derive(Debug)]
pub struct Periodically<C = SystemClock> {
    clock: C,
    period: Duration,
    next: Instant,
}

impl Periodically<SystemClock> {
    pub fn every(period: Duration) -> Periodically<SystemClock> {
        Periodically::new(SystemClock::new(), period)
    }
}

impl<C: Clock> Periodically<C> {
    /// The first call to [`Periodically::ready`] is always true.
    pub fn new(clock: C, period: Duration) -> Periodically<C> {
        Periodically {
            clock,
            period,
            next: Instant::MIN,
        }
    }

    pub fn ready(&mut self) -> bool {
        let now = self.clock.now();
        if now < self.next {
            return false;
        }

        self.next = now.checked_add(self.period).unwrap_or(Instant::MAX);
        true
    }
}
