//! Intermediate values of a rise/set computation, for callers that want to
//! inspect or log them.
//!
//! The calculator never logs on its own. A [`DiagnosticSink`] is passed in
//! explicitly; [`NoDiagnostics`] discards everything, [`TracingDiagnostics`]
//! forwards to `tracing`, and any `FnMut(Direction, Stage)` closure works as a
//! callback.

use crate::error::DomainError;
use crate::riseset_types::Direction;

/// One intermediate quantity of the rise/set algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Approximate day of the year.
    DayOfYear(u32),
    /// Longitude in hours and approximate time `t` in days.
    ApproximateTime { lng_hour: f64, t: f64 },
    /// Sun's mean anomaly in degrees.
    MeanAnomaly(f64),
    /// Sun's true longitude in degrees, [0, 360).
    TrueLongitude(f64),
    /// Right ascension, quadrant-corrected.
    RightAscension { degrees: f64, hours: f64 },
    /// Sine and cosine of the declination.
    Declination { sin: f64, cos: f64 },
    /// Cosine of the local hour angle, before the polar guard.
    HourAngleCosine(f64),
    /// The guard rejected the hour angle.
    Polar(DomainError),
    /// Local hour angle in hours.
    HourAngle(f64),
    /// Local mean time of the event in hours.
    LocalMeanTime(f64),
    /// Event time in UTC hours, [0, 24).
    Utc(f64),
}

/// Receiver for [`Stage`] values during a computation.
pub trait DiagnosticSink {
    fn record(&mut self, direction: Direction, stage: Stage);
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiagnostics;

impl DiagnosticSink for NoDiagnostics {
    #[inline]
    fn record(&mut self, _direction: Direction, _stage: Stage) {}
}

/// Emits each stage as a `tracing` event under the `helios_riseset` target.
///
/// Values are logged at `trace`; polar conditions at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record(&mut self, direction: Direction, stage: Stage) {
        match stage {
            Stage::DayOfYear(n) => tracing::trace!(?direction, n, "day of the year"),
            Stage::ApproximateTime { lng_hour, t } => {
                tracing::trace!(?direction, lng_hour, t, "approximate time")
            }
            Stage::MeanAnomaly(m) => tracing::trace!(?direction, m, "mean anomaly"),
            Stage::TrueLongitude(l) => tracing::trace!(?direction, l, "true longitude"),
            Stage::RightAscension { degrees, hours } => {
                tracing::trace!(?direction, degrees, hours, "right ascension")
            }
            Stage::Declination { sin, cos } => {
                tracing::trace!(?direction, sin, cos, "declination")
            }
            Stage::HourAngleCosine(cos_h) => {
                tracing::trace!(?direction, cos_h, "local hour angle cosine")
            }
            Stage::Polar(kind) => tracing::debug!(?direction, %kind, "no rise/set event"),
            Stage::HourAngle(hours) => tracing::trace!(?direction, hours, "local hour angle"),
            Stage::LocalMeanTime(hours) => {
                tracing::trace!(?direction, hours, "local mean time")
            }
            Stage::Utc(hours) => tracing::trace!(?direction, hours, "event time (UTC hours)"),
        }
    }
}

impl<F> DiagnosticSink for F
where
    F: FnMut(Direction, Stage),
{
    fn record(&mut self, direction: Direction, stage: Stage) {
        self(direction, stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_collects_stages() {
        let mut seen = Vec::new();
        let mut sink = |d: Direction, s: Stage| seen.push((d, s));
        sink.record(Direction::Rising, Stage::DayOfYear(326));
        sink.record(Direction::Setting, Stage::Utc(16.5));
        assert_eq!(
            seen,
            vec![
                (Direction::Rising, Stage::DayOfYear(326)),
                (Direction::Setting, Stage::Utc(16.5)),
            ]
        );
    }

    #[test]
    fn no_diagnostics_is_inert() {
        let mut sink = NoDiagnostics;
        sink.record(Direction::Rising, Stage::MeanAnomaly(1.0));
    }
}
