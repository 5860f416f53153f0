use std::{
    fmt::Debug,
    sync::{
        atomic::{AtomicBool, AtomicI64, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
};

use civiltime::{fmt::display_duration, Duration, Instant};
use crossbeam_utils::CachePadded;
use tracing::{debug, error};

use crate::{Clock, SystemClock};

const DEFAULT_THREAD_NAME: &str = "civiltime-clock";

/// Whether the virtual time of a [`LowResClock`] follows real time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Virtual time is refreshed together with real time.
    #[default]
    RealTime,
    /// Virtual time only changes through [`LowResClock::set_virtual_now`].
    Virtual,
}

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("clock resolution must be a positive duration, got {0}")]
    InvalidResolution(Duration),
    #[error("virtual time can only be set on a clock in virtual mode")]
    NotVirtual,
    #[error("thread name {0:?} contains a NUL byte")]
    InvalidThreadName(String),
    #[error("unable to spawn the clock updater thread")]
    Spawn(#[from] std::io::Error),
}

/// State written by the updater thread and read by every holder of the
/// clock.
struct Shared {
    actual: CachePadded<AtomicI64>,
    virtual_now: CachePadded<AtomicI64>,
    done: AtomicBool,
}

/// Low resolution clock: the current time is cached and refreshed by a
/// background thread once every `resolution`, so that reading it is a single
/// atomic load.
///
/// The cached time starts at the current time truncated down to a multiple
/// of the resolution, and then advances by exactly one resolution per tick,
/// so that it never drifts because of late wake-ups.
///
/// Each clock owns its updater thread, which is stopped and joined when the
/// clock is dropped. Dropping may therefore block for up to one
/// resolution.
pub struct LowResClock {
    shared: Arc<Shared>,
    mode: Mode,
    resolution: Duration,
    updater: Option<JoinHandle<()>>,
}

impl LowResClock {
    /// Starts a clock refreshed from the system time.
    pub fn new(mode: Mode, resolution: Duration) -> Result<LowResClock, ClockError> {
        LowResClock::builder()
            .mode(mode)
            .resolution(resolution)
            .build()
    }

    pub fn builder() -> ClockBuilder {
        ClockBuilder::default()
    }

    /// Real time, as of the last refresh. Never affected by the mode.
    #[inline]
    pub fn now(&self) -> Instant {
        Instant::from_nanos(self.shared.actual.load(Ordering::Acquire))
    }

    /// Same as [`LowResClock::now`] in [`Mode::RealTime`]; the last time set
    /// by [`LowResClock::set_virtual_now`] in [`Mode::Virtual`], which
    /// starts at [`Instant::EPOCH`].
    #[inline]
    pub fn virtual_now(&self) -> Instant {
        Instant::from_nanos(self.shared.virtual_now.load(Ordering::Acquire))
    }

    /// Moves virtual time to `instant`. Only a clock in [`Mode::Virtual`]
    /// accepts this.
    pub fn set_virtual_now(&self, instant: Instant) -> Result<(), ClockError> {
        if self.mode != Mode::Virtual {
            return Err(ClockError::NotVirtual);
        }

        self.shared
            .virtual_now
            .store(instant.as_nanos(), Ordering::Release);
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn resolution(&self) -> Duration {
        self.resolution
    }
}

impl Clock for LowResClock {
    #[inline]
    fn now(&self) -> Instant {
        LowResClock::now(self)
    }
}

impl Debug for LowResClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LowResClock")
            .field("mode", &self.mode)
            .field("resolution", &display_duration(self.resolution).to_string())
            .field("now", &self.now())
            .field("virtual_now", &self.virtual_now())
            .finish()
    }
}

impl Drop for LowResClock {
    fn drop(&mut self) {
        self.shared.done.store(true, Ordering::Release);
        if let Some(updater) = self.updater.take() {
            updater.thread().unpark();
            if updater.join().is_err() {
                error!("clock updater thread panicked");
            }
        }
    }
}

/// Builder for a [`LowResClock`].
///
/// ```
/// use civiltime::Duration;
/// use civiltime_clock::{LowResClock, Mode, SystemClock};
///
/// # fn main() -> Result<(), civiltime_clock::ClockError> {
/// let clock = LowResClock::builder()
///     .mode(Mode::Virtual)
///     .resolution(Duration::microseconds(100))
///     .thread_name("sim-clock")
///     .build_with(SystemClock::new())?;
/// assert_eq!(clock.mode(), Mode::Virtual);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ClockBuilder {
    mode: Mode,
    resolution: Duration,
    thread_name: String,
}

impl Default for ClockBuilder {
    fn default() -> Self {
        Self {
            mode: Mode::RealTime,
            resolution: Duration::milliseconds(1),
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl ClockBuilder {
    /// [`Mode::RealTime`] by default.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// One millisecond by default.
    pub fn resolution(mut self, resolution: Duration) -> Self {
        self.resolution = resolution;
        self
    }

    /// Name of the updater thread. Names containing a NUL byte are rejected
    /// by [`ClockBuilder::build`].
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Starts a clock refreshed from the system time.
    pub fn build(self) -> Result<LowResClock, ClockError> {
        self.build_with(SystemClock::new())
    }

    /// Starts a clock refreshed from `source`.
    pub fn build_with<C>(self, source: C) -> Result<LowResClock, ClockError>
    where
        C: Clock + Send + 'static,
    {
        let tick = self
            .resolution
            .num_nanoseconds()
            .filter(|nanos| *nanos > 0)
            .ok_or(ClockError::InvalidResolution(self.resolution))?;
        if self.thread_name.contains('\0') {
            return Err(ClockError::InvalidThreadName(self.thread_name));
        }

        let start = source.now().as_nanos().div_euclid(tick) * tick;
        let virtual_start = match self.mode {
            Mode::RealTime => start,
            Mode::Virtual => Instant::EPOCH.as_nanos(),
        };
        let shared = Arc::new(Shared {
            actual: CachePadded::new(AtomicI64::new(start)),
            virtual_now: CachePadded::new(AtomicI64::new(virtual_start)),
            done: AtomicBool::new(false),
        });

        let mode = self.mode;
        let updater = thread::Builder::new().name(self.thread_name).spawn({
            let shared = shared.clone();
            move || update(&shared, &source, mode, tick)
        })?;
        debug!(
            ?mode,
            resolution = %display_duration(self.resolution),
            "clock updater started"
        );

        Ok(LowResClock {
            shared,
            mode,
            resolution: self.resolution,
            updater: Some(updater),
        })
    }
}

/// Body of the updater thread. Only this thread writes `actual`, and only
/// in `RealTime` mode does it write `virtual_now`.
fn update<C: Clock>(shared: &Shared, source: &C, mode: Mode, tick: i64) {
    let mut actual = shared.actual.load(Ordering::Acquire);

    loop {
        let next = actual.saturating_add(tick);
        loop {
            if shared.done.load(Ordering::Acquire) {
                debug!("clock updater stopped");
                return;
            }

            let now = source.now().as_nanos();
            if now >= next {
                break;
            }
            thread::park_timeout(std::time::Duration::from_nanos(now.abs_diff(next)));
        }

        actual = next;
        shared.actual.store(actual, Ordering::Release);
        if mode == Mode::RealTime {
            shared.virtual_now.store(actual, Ordering::Release);
        }
    }
}
