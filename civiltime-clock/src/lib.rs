//! `Clock` dictates where the current [`Instant`] is read from.
//!
//! Reading the system time costs a system call, or at best a trip through
//! the vDSO, which adds up on hot paths that only need a coarse timestamp.
//! This crate offers a few interchangeable sources:
//!
//! * [`SystemClock`]: the system time, read every time.
//! * [`QuantaClock`]/[`MinstantClock`]: TSC readings anchored to the system
//!   time once at construction.
//! * [`LowResClock`]: a cached instant refreshed by a background thread
//!   every `resolution`, read with a single atomic load.
//!
//! Code that depends on the current time should take an `impl Clock`, so
//! that tests can pass a frozen clock instead.
//!
//! ## Example usage of `LowResClock`
//!
//! ```rust
//! use civiltime::Duration;
//! use civiltime_clock::{Clock, LowResClock, Mode};
//!
//! # fn main() -> Result<(), civiltime_clock::ClockError> {
//! let clock = LowResClock::new(Mode::RealTime, Duration::milliseconds(1))?;
//! let t0 = clock.now();
//! std::thread::sleep(std::time::Duration::from_millis(5));
//! assert!(clock.now() > t0);
//!
//! // a virtual clock only moves when told to
//! let sim = LowResClock::new(Mode::Virtual, Duration::milliseconds(1))?;
//! sim.set_virtual_now("2009-08-11 12:00:00".parse().unwrap())?;
//! assert_eq!(sim.virtual_now().to_string(), "2009-08-11 12:00:00");
//! # Ok(())
//! # }
//! ```
//!
//! The updater thread belongs to a single `LowResClock`, which cannot be
//! cloned:
//!
//! ```rust compile_fail
//! use civiltime::Duration;
//! use civiltime_clock::{LowResClock, Mode};
//!
//! let clock = LowResClock::new(Mode::RealTime, Duration::milliseconds(1)).unwrap();
//! let copy: LowResClock = clock.clone();
//! ```

use std::sync::Arc;

use civiltime::Instant;

pub mod lowres;
pub mod minstant;
pub mod quanta;
pub mod stopwatch;
pub mod system;

pub use lowres::{ClockBuilder, ClockError, LowResClock, Mode};
pub use self::minstant::MinstantClock;
pub use self::quanta::QuantaClock;
pub use stopwatch::{Periodically, StopWatch};
pub use system::SystemClock;

pub trait Clock {
    /// Returns the current instant, as seen by this clock
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
