//! Wall-clock source for timestamps and dated file names.
use chrono::{Local, NaiveDateTime};

/// Supplies the local date and time.
///
/// [`LogSink`](crate::LogSink) reads the clock once per line for the
/// timestamp and once per (re)open for the file date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// [`Clock`] backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
