//! Error types for calendar handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar date construction or parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple is not a valid proleptic Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Date text could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: year={year}, month={month}, day={day}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
