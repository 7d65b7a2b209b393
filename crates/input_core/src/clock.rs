//! Time source for caret blinking.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic clock reporting seconds since an arbitrary origin.
pub trait Clock {
    fn now(&self) -> f64;
}

impl<T: Clock + ?Sized> Clock for &T {
    #[inline]
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// `std::time::Instant`-backed clock, starting at zero when created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock advanced by hand, for headless drivers and tests.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: f64) {
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
