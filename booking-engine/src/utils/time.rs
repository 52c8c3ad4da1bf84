//! Time helpers
//!
//! The engine never reads ambient wall-clock time; everything that
//! needs "now" takes a [`Clock`] handle so tests can pin the instant.

use chrono::{NaiveDateTime, NaiveTime};
use parking_lot::Mutex;

/// Source of the current business-local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the host's local timezone
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Clock pinned to a settable instant
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

/// Render a time-of-day as `HH:MM`
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
