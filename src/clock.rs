//! Monotonic timestamp sources
//!
//! The runner never reads time directly; it is handed a [`MonotonicClock`]
//! so tests can drive it with scripted readings.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Instant;

/// A nanosecond timestamp source
pub trait MonotonicClock {
    /// Current reading in nanoseconds from an arbitrary origin
    fn now_ns(&self) -> u64;
}

/// Wall clock backed by [`Instant`], with its origin at construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    #[inline(always)]
    fn now_ns(&self) -> u64 {
        // u64 nanoseconds covers ~584 years of uptime
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Clock that replays a fixed list of readings, then repeats the last one
#[derive(Debug, Default)]
pub struct ScriptedClock {
    readings: Mutex<VecDeque<u64>>,
    last: Mutex<u64>,
}

impl ScriptedClock {
    pub fn new(readings: impl IntoIterator<Item = u64>) -> Self {
        Self {
            readings: Mutex::new(readings.into_iter().collect()),
            last: Mutex::new(0),
        }
    }

    /// Readings not yet handed out
    pub fn remaining(&self) -> usize {
        self.readings.lock().len()
    }
}

impl MonotonicClock for ScriptedClock {
    fn now_ns(&self) -> u64 {
        let mut last = self.last.lock();
        if let Some(next) = self.readings.lock().pop_front() {
            *last = next;
        }
        *last
    }
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_ns(&self) -> u64 {
        (**self).now_ns()
    }
}
