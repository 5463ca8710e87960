//! Types for sunrise/sunset and twilight calculations.
//!
//! Provides the observer location, zenith definitions, event direction, and
//! the sunrise/sunset pair used by the rise/set computation module.

use std::str::FromStr;

use helios_time::{SECONDS_PER_DAY, UtcTimestamp};

use crate::error::RiseSetError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Location {
    /// Create a location from geodetic latitude (north positive, [-90, 90])
    /// and longitude (east positive, [-180, 180]) in degrees.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, RiseSetError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(RiseSetError::InvalidLocation(
                "latitude must be in [-90, 90] degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(RiseSetError::InvalidLocation(
                "longitude must be in [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Longitude expressed in hours (15 degrees per hour).
    pub fn longitude_hours(&self) -> f64 {
        self.longitude_deg / 15.0
    }
}

/// Zenith angle of the Sun's centre that defines a rise or set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZenithKind {
    /// 90 deg 50 arcmin: upper limb on the horizon with standard refraction.
    Official,
    /// 96 deg: civil twilight.
    Civil,
    /// 102 deg: nautical twilight.
    Nautical,
    /// 108 deg: astronomical twilight.
    Astronomical,
}

impl ZenithKind {
    /// All zenith kinds, from the horizon outwards.
    pub const ALL: [ZenithKind; 4] = [
        Self::Official,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
    ];

    /// Zenith angle in degrees.
    pub fn degrees(self) -> f64 {
        match self {
            Self::Official => 90.0 + 50.0 / 60.0,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::Civil => "civil",
            Self::Nautical => "nautical",
            Self::Astronomical => "astronomical",
        }
    }
}

impl FromStr for ZenithKind {
    type Err = RiseSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|z| z.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RiseSetError::InvalidZenith(s.to_string()))
    }
}

impl std::fmt::Display for ZenithKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the rising or the setting crossing is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rising,
    Setting,
}

impl Direction {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Rising)
    }
}

impl From<bool> for Direction {
    fn from(rising: bool) -> Self {
        if rising { Self::Rising } else { Self::Setting }
    }
}

/// Sunrise and sunset for one date, location and zenith.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: UtcTimestamp,
    pub sunset: UtcTimestamp,
}

impl SunTimes {
    /// Seconds between sunrise and sunset.
    ///
    /// Both events carry the input date, so when the UTC sunset time of day
    /// falls before sunrise (the setting instant passed 24:00 UTC) one day is
    /// added.
    pub fn day_length_seconds(&self) -> u32 {
        let rise = self.sunrise.seconds_of_day();
        let set = self.sunset.seconds_of_day();
        if set >= rise {
            set - rise
        } else {
            set + SECONDS_PER_DAY - rise
        }
    }
}
