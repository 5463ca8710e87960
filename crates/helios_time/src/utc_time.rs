//! UTC timestamp with whole-second resolution.

use crate::calendar::CalendarDate;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A UTC calendar date with a whole-second time of day.
///
/// Hour is in [0, 23], minute and second in [0, 59].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcTimestamp {
    date: CalendarDate,
    hour: u32,
    minute: u32,
    second: u32,
}

impl UtcTimestamp {
    /// Create a timestamp, returning `None` if any time component is out of range.
    pub fn new(date: CalendarDate, hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Split fractional hours in [0, 24) into hour, minute and second by truncation.
    ///
    /// `hour = floor(h)`, `minute = floor(frac * 60)`,
    /// `second = floor((h - hour - minute/60) * 3600)`. Each component is
    /// clamped to its range so rounding noise at a boundary cannot produce
    /// 24:00:00 or a 60th second. The date is attached unchanged.
    pub fn from_fractional_hours(date: CalendarDate, hours: f64) -> Self {
        let hour = hours.floor().clamp(0.0, 23.0) as u32;
        let minute_frac = hours - hour as f64;
        let minute = (minute_frac * 60.0).floor().clamp(0.0, 59.0) as u32;
        let second_frac = hours - hour as f64 - minute as f64 / 60.0;
        let second = (second_frac * 3600.0).floor().clamp(0.0, 59.0) as u32;
        Self {
            date,
            hour,
            minute,
            second,
        }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Seconds elapsed since 00:00:00 UTC on this timestamp's date.
    pub fn seconds_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}Z",
            self.date, self.hour, self.minute, self.second
        )
    }
}

/// Format a duration in seconds as `H:MM:SS`.
pub fn format_duration_hms(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h}:{m:02}:{s:02}")
}
