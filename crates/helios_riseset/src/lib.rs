//! Approximate sunrise, sunset and twilight times in UTC.
//!
//! This crate provides:
//! - Typed inputs: [`Location`], [`ZenithKind`], [`Direction`]
//! - The closed-form rise/set algorithm ([`compute_solar_event`]) with
//!   explicit polar day/night errors
//! - Optional per-stage diagnostics through a caller-supplied
//!   [`DiagnosticSink`]
//!
//! All computations are pure functions of their inputs.
//!
//! ```
//! use helios_riseset::{Location, ZenithKind, sun_times};
//! use helios_time::CalendarDate;
//!
//! let loc = Location::new(51.414_166_66, -1.515).unwrap();
//! let date = CalendarDate::new(2022, 11, 22).unwrap();
//! let times = sun_times(loc, date, ZenithKind::Official).unwrap();
//! assert_eq!(times.sunrise.to_string(), "2022-11-22T07:34:44Z");
//! assert_eq!(times.sunset.to_string(), "2022-11-22T16:08:55Z");
//! ```

pub mod angle;
pub mod diagnostics;
pub mod error;
pub mod riseset;
pub mod riseset_types;

pub use diagnostics::{DiagnosticSink, NoDiagnostics, Stage, TracingDiagnostics};
pub use error::{DomainError, RiseSetError};
pub use riseset::{
    compute_solar_event, compute_solar_event_with, day_of_year, sun_times, sun_times_with,
    sunrise, sunset,
};
pub use riseset_types::{Direction, Location, SunTimes, ZenithKind};
