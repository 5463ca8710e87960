//! Error types for rise/set calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use helios_time::TimeError;

/// The requested event does not happen on this date at this location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    /// The Sun stays above the zenith threshold all day (`cos H < -1`).
    PolarDay,
    /// The Sun stays below the zenith threshold all day (`cos H > 1`).
    PolarNight,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolarDay => write!(f, "the sun never sets on this date (polar day)"),
            Self::PolarNight => write!(f, "the sun never rises on this date (polar night)"),
        }
    }
}

impl Error for DomainError {}

/// Errors from rise/set calculations and their typed inputs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RiseSetError {
    /// Latitude or longitude outside its valid range.
    InvalidLocation(&'static str),
    /// Zenith selector text that names no known zenith.
    InvalidZenith(String),
    /// Continuous day or night for the requested zenith.
    Domain(DomainError),
    /// Calendar error.
    Time(TimeError),
}

impl RiseSetError {
    /// The polar condition, if this error is one.
    pub fn domain(&self) -> Option<DomainError> {
        match self {
            Self::Domain(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl Display for RiseSetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidZenith(name) => write!(
                f,
                "invalid zenith {name:?}: expected official, civil, nautical or astronomical"
            ),
            Self::Domain(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for RiseSetError {}

impl From<DomainError> for RiseSetError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<TimeError> for RiseSetError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
