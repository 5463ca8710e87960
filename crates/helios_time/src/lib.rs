//! Calendar and UTC time types for sunrise/sunset calculations.
//!
//! This crate provides:
//! - A validated proleptic Gregorian [`CalendarDate`] with `YYYYMMDD` and
//!   `YYYY-MM-DD` parsing
//! - A whole-second [`UtcTimestamp`] built from fractional UTC hours

pub mod calendar;
pub mod error;
pub mod utc_time;

pub use calendar::{CalendarDate, days_in_month, is_leap_year};
pub use error::TimeError;
pub use utc_time::{SECONDS_PER_DAY, UtcTimestamp, format_duration_hms};
