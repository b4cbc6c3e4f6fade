//! Wall-clock abstraction so derivations take "now" as an explicit input.

use chrono::{Datelike, Local, NaiveDateTime};

pub trait Clock {
    /// Current local wall-clock instant.
    fn now(&self) -> NaiveDateTime;

    /// Calendar year of [`Clock::now`]; upper bound for the year stepper.
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Reads the host (or browser, on wasm) local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
