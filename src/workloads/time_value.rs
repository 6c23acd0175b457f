//! Fresh allocation vs. reuse of a mutable time value

use std::hint::black_box;

use crate::types::Workload;

/// Mutable point in time, seconds plus sub-second nanoseconds since the epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeValue {
    secs: i64,
    nanos: u32,
}

impl TimeValue {
    pub fn from_epoch_millis(millis: i64) -> Self {
        let mut value = Self::default();
        value.set_epoch_millis(millis);
        value
    }

    pub fn set_epoch_millis(&mut self, millis: i64) {
        self.secs = millis.div_euclid(1000);
        self.nanos = (millis.rem_euclid(1000) as u32) * 1_000_000;
    }

    pub fn epoch_millis(&self) -> i64 {
        self.secs * 1000 + i64::from(self.nanos / 1_000_000)
    }

    pub fn secs(&self) -> i64 {
        self.secs
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }
}

/// A new boxed time value per iteration
pub fn time_value_alloc(count: usize) -> Workload {
    Workload::infallible("time-value-alloc", move || {
        for i in 0..count {
            black_box(Box::new(TimeValue::from_epoch_millis(i as i64)));
        }
    })
}

/// One boxed time value, reset on every iteration
pub fn time_value_reuse(count: usize) -> Workload {
    Workload::infallible("time-value-reuse", move || {
        let mut value = Box::new(TimeValue::default());
        for i in 0..count {
            value.set_epoch_millis(i as i64);
            black_box(&mut value);
        }
    })
}
