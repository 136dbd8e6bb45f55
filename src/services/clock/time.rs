use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};
use tokio::time::Instant;

/// Wall-clock time of day, split into display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeOfDay {
    /// Hour, 0-23
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// Second, 0-59
    pub second: u32,
    /// Whether the hour is 12 or later
    pub is_pm: bool,
}

impl TimeOfDay {
    /// Builds a time of day, wrapping out-of-range fields into range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        let hour = hour % 24;
        Self {
            hour,
            minute: minute % 60,
            second: second % 60,
            is_pm: hour >= 12,
        }
    }

    /// Seconds elapsed since midnight, 0-86399.
    pub fn seconds_in_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Formats the time for display.
    ///
    /// 24-hour: `13:05:09`. 12-hour: `01:05:09 PM`, with midnight and noon
    /// shown as 12.
    pub fn display(&self, hour_24: bool, show_seconds: bool) -> String {
        let hour = if hour_24 {
            self.hour
        } else {
            match self.hour % 12 {
                0 => 12,
                h => h,
            }
        };

        let mut text = format!("{hour:02}:{:02}", self.minute);
        if show_seconds {
            text.push_str(&format!(":{:02}", self.second));
        }
        if !hour_24 {
            text.push_str(if self.is_pm { " PM" } else { " AM" });
        }

        text
    }
}

impl<T: Timelike> From<&T> for TimeOfDay {
    fn from(time: &T) -> Self {
        TimeOfDay::new(time.hour(), time.minute(), time.second())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Source of local wall-clock time.
pub trait TimeSource: Send + Sync {
    /// The current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// The system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that starts at a chosen local time and advances with tokio's timer.
///
/// Under a paused tokio runtime it moves only when the runtime's time does,
/// which makes tick behaviour reproducible.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTimeSource {
    start: NaiveDateTime,
    origin: Instant,
}

impl SimulatedTimeSource {
    /// Starts the simulated clock at `start`. Must be called inside a tokio runtime.
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            start,
            origin: Instant::now(),
        }
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> NaiveDateTime {
        let elapsed = Instant::now().saturating_duration_since(self.origin);
        self.start + elapsed
    }
}
