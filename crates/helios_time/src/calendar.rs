//! Proleptic Gregorian calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;

/// A proleptic Gregorian calendar date with no time-of-day component.
///
/// Only constructible through [`CalendarDate::new`] or [`FromStr`], so every
/// value names a day that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Create a validated calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn parse_digits(s: &str, field: &str) -> Result<u32, TimeError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::Parse(format!("{field} must be digits, got {s:?}")));
    }
    s.parse()
        .map_err(|e| TimeError::Parse(format!("{field} {s:?}: {e}")))
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYYMMDD` or `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (y, m, d) = if s.contains('-') {
            let parts: Vec<&str> = s.split('-').collect();
            if parts.len() != 3 || parts[0].len() != 4 {
                return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
            }
            (parts[0], parts[1], parts[2])
        } else {
            if s.len() != 8 {
                return Err(TimeError::Parse(format!(
                    "expected 8 characters (YYYYMMDD), got {} in {s:?}",
                    s.len()
                )));
            }
            if !s.is_ascii() {
                return Err(TimeError::Parse(format!("expected YYYYMMDD, got {s:?}")));
            }
            (&s[..4], &s[4..6], &s[6..])
        };
        let year = parse_digits(y, "year")? as i32;
        let month = parse_digits(m, "month")?;
        let day = parse_digits(d, "day")?;
        Self::new(year, month, day)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
