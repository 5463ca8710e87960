//! Sunrise/sunset computation with twilight variants.
//!
//! Closed-form approximate algorithm: day of year, mean anomaly, true
//! longitude, right ascension, declination, local hour angle, then UTC.
//! Accurate to about a minute between the polar circles. Published in the
//! Almanac for Computers (1990), Nautical Almanac Office, USNO.

use helios_time::{CalendarDate, UtcTimestamp};

use crate::angle::{
    acos_deg, asin_deg, atan_deg, cos_deg, normalize_24, normalize_360, sin_deg, tan_deg,
};
use crate::diagnostics::{DiagnosticSink, NoDiagnostics, Stage};
use crate::error::{DomainError, RiseSetError};
use crate::riseset_types::{Direction, Location, SunTimes, ZenithKind};

/// Length of the anomalistic year in days.
const ANOMALISTIC_YEAR_DAYS: f64 = 365.259_635_8;

/// Offset of the mean anomaly at the start of the year, degrees.
const MEAN_ANOMALY_OFFSET_DEG: f64 = 3.289;

/// Equation-of-centre amplitudes, degrees.
const CENTRE_AMPLITUDE_1: f64 = 1.916;
const CENTRE_AMPLITUDE_2: f64 = 0.020;

/// Longitude of perihelion plus 180 degrees.
const PERIHELION_OFFSET_DEG: f64 = 282.634;

/// cos and sin of the obliquity of the ecliptic (~23.44 deg).
const COS_OBLIQUITY: f64 = 0.917_64;
const SIN_OBLIQUITY: f64 = 0.397_82;

/// Sidereal drift of the mean Sun, hours per day.
const SIDEREAL_DRIFT_HOURS: f64 = 0.065_71;

/// Local mean time offset, hours.
const LOCAL_MEAN_TIME_OFFSET_HOURS: f64 = 6.622;

/// Approximate day of the year (1-based) for a calendar date.
///
/// `N = floor(275 M / 9) - floor((M + 9) / 12) * (1 + floor((Y - 4 floor(Y/4) + 2) / 3)) + D - 30`
///
/// Gives 1 on 1 January and 365 on 31 December (366 in leap years).
pub fn day_of_year(date: CalendarDate) -> u32 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let n1 = (275 * month).div_euclid(9);
    let n2 = (month + 9).div_euclid(12);
    let n3 = 1 + (year - 4 * year.div_euclid(4) + 2).div_euclid(3);
    (n1 - n2 * n3 + day - 30) as u32
}

/// Compute the UTC instant the Sun's centre crosses `zenith` on `date`.
///
/// The returned timestamp carries the input date; the time of day is the
/// event time in UTC truncated to whole seconds.
///
/// # Errors
/// * `RiseSetError::Domain(DomainError::PolarNight)` if the Sun stays below
///   the zenith threshold all day
/// * `RiseSetError::Domain(DomainError::PolarDay)` if it stays above
pub fn compute_solar_event(
    location: Location,
    date: CalendarDate,
    zenith: ZenithKind,
    direction: Direction,
) -> Result<UtcTimestamp, RiseSetError> {
    compute_solar_event_with(location, date, zenith, direction, &mut NoDiagnostics)
}

/// [`compute_solar_event`], reporting every intermediate value to `sink`.
pub fn compute_solar_event_with<S: DiagnosticSink + ?Sized>(
    location: Location,
    date: CalendarDate,
    zenith: ZenithKind,
    direction: Direction,
    sink: &mut S,
) -> Result<UtcTimestamp, RiseSetError> {
    let utc_hours = event_utc_hours(location, date, zenith, direction, sink)?;
    Ok(UtcTimestamp::from_fractional_hours(date, utc_hours))
}

/// Event time as fractional UTC hours in [0, 24).
fn event_utc_hours<S: DiagnosticSink + ?Sized>(
    location: Location,
    date: CalendarDate,
    zenith: ZenithKind,
    direction: Direction,
    sink: &mut S,
) -> Result<f64, DomainError> {
    let n = day_of_year(date);
    sink.record(direction, Stage::DayOfYear(n));

    // Approximate time in days; the Sun is taken to rise at 06:00 and set at
    // 18:00 local mean time.
    let lng_hour = location.longitude_hours();
    let event_hour = if direction.is_rising() { 6.0 } else { 18.0 };
    let t = f64::from(n) + (event_hour - lng_hour) / 24.0;
    sink.record(direction, Stage::ApproximateTime { lng_hour, t });

    let m = (360.0 / ANOMALISTIC_YEAR_DAYS) * t - MEAN_ANOMALY_OFFSET_DEG;
    sink.record(direction, Stage::MeanAnomaly(m));

    let l = normalize_360(
        m + CENTRE_AMPLITUDE_1 * sin_deg(m)
            + CENTRE_AMPLITUDE_2 * sin_deg(2.0 * m)
            + PERIHELION_OFFSET_DEG,
    );
    sink.record(direction, Stage::TrueLongitude(l));

    // atan only covers half a turn; move RA into L's quadrant.
    let mut ra = normalize_360(atan_deg(COS_OBLIQUITY * tan_deg(l)));
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    ra += l_quadrant - ra_quadrant;
    let ra_hours = ra / 15.0;
    sink.record(
        direction,
        Stage::RightAscension {
            degrees: ra,
            hours: ra_hours,
        },
    );

    let sin_dec = SIN_OBLIQUITY * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));
    sink.record(
        direction,
        Stage::Declination {
            sin: sin_dec,
            cos: cos_dec,
        },
    );

    let phi = location.latitude_deg();
    let cos_h = (cos_deg(zenith.degrees()) - sin_dec * sin_deg(phi)) / (cos_deg(phi) * cos_dec);
    sink.record(direction, Stage::HourAngleCosine(cos_h));

    // Polar check before acos
    if cos_h > 1.0 {
        sink.record(direction, Stage::Polar(DomainError::PolarNight));
        return Err(DomainError::PolarNight);
    }
    if cos_h < -1.0 {
        sink.record(direction, Stage::Polar(DomainError::PolarDay));
        return Err(DomainError::PolarDay);
    }

    let h_deg = if direction.is_rising() {
        360.0 - acos_deg(cos_h)
    } else {
        acos_deg(cos_h)
    };
    let h_hours = h_deg / 15.0;
    sink.record(direction, Stage::HourAngle(h_hours));

    let local_mean_time =
        h_hours + ra_hours - SIDEREAL_DRIFT_HOURS * t - LOCAL_MEAN_TIME_OFFSET_HOURS;
    sink.record(direction, Stage::LocalMeanTime(local_mean_time));

    let utc = normalize_24(local_mean_time - lng_hour);
    sink.record(direction, Stage::Utc(utc));
    Ok(utc)
}

/// Sunrise (or dawn, for a twilight zenith) on `date`.
pub fn sunrise(
    location: Location,
    date: CalendarDate,
    zenith: ZenithKind,
) -> Result<UtcTimestamp, RiseSetError> {
    compute_solar_event(location, date, zenith, Direction::Rising)
}

/// Sunset (or dusk, for a twilight zenith) on `date`.
pub fn sunset(
    location: Location,
    date: CalendarDate,
    zenith: ZenithKind,
) -> Result<UtcTimestamp, RiseSetError> {
    compute_solar_event(location, date, zenith, Direction::Setting)
}

/// Compute both sunrise and sunset for a day.
///
/// Fails with the first direction's error if either event does not occur.
pub fn sun_times(
    location: Location,
    date: CalendarDate,
    zenith: ZenithKind,
) -> Result<SunTimes, RiseSetError> {
    sun_times_with(location, date, zenith, &mut NoDiagnostics)
}

/// [`sun_times`], reporting intermediate values of both events to `sink`.
pub fn sun_times_with<S: DiagnosticSink + ?Sized>(
    location: Location,
    date: CalendarDate,
    zenith: ZenithKind,
    sink: &mut S,
) -> Result<SunTimes, RiseSetError> {
    let sunrise = compute_solar_event_with(location, date, zenith, Direction::Rising, sink)?;
    let sunset = compute_solar_event_with(location, date, zenith, Direction::Setting, sink)?;
    Ok(SunTimes { sunrise, sunset })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn day_of_year_first_and_last() {
        assert_eq!(day_of_year(date(2023, 1, 1)), 1);
        assert_eq!(day_of_year(date(2023, 12, 31)), 365);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366);
    }

    #[test]
    fn day_of_year_around_february() {
        assert_eq!(day_of_year(date(2023, 2, 28)), 59);
        assert_eq!(day_of_year(date(2023, 3, 1)), 60);
        assert_eq!(day_of_year(date(2024, 3, 1)), 61);
    }

    #[test]
    fn day_of_year_reference_date() {
        assert_eq!(day_of_year(date(2022, 11, 22)), 326);
    }

    #[test]
    fn day_of_year_negative_year() {
        // floor semantics, not truncation, for years before 0
        assert_eq!(day_of_year(date(-1, 3, 1)), 60);
    }

    #[test]
    fn stages_reported_in_order() {
        let loc = Location::new(51.414_166_66, -1.515).unwrap();
        let mut stages = Vec::new();
        let mut sink = |_: Direction, s: Stage| stages.push(s);
        compute_solar_event_with(
            loc,
            date(2022, 11, 22),
            ZenithKind::Official,
            Direction::Rising,
            &mut sink,
        )
        .unwrap();
        assert_eq!(stages.len(), 10, "{stages:?}");
        assert_eq!(stages[0], Stage::DayOfYear(326));
        match stages[9] {
            Stage::Utc(h) => assert!((h - 7.579).abs() < 1e-3, "utc = {h}"),
            other => panic!("expected Utc stage last, got {other:?}"),
        }
    }

    #[test]
    fn right_ascension_in_longitude_quadrant() {
        let loc = Location::new(0.0, 0.0).unwrap();
        for month in 1..=12 {
            let mut l = None;
            let mut ra = None;
            let mut sink = |_: Direction, s: Stage| match s {
                Stage::TrueLongitude(v) => l = Some(v),
                Stage::RightAscension { degrees, .. } => ra = Some(degrees),
                _ => {}
            };
            compute_solar_event_with(
                loc,
                date(2023, month, 15),
                ZenithKind::Official,
                Direction::Rising,
                &mut sink,
            )
            .unwrap();
            let (l, ra) = (l.unwrap(), ra.unwrap());
            assert_eq!(
                (l / 90.0).floor(),
                (ra / 90.0).floor(),
                "month {month}: L = {l}, RA = {ra}"
            );
            assert!((l - ra).abs() < 3.0, "month {month}: L = {l}, RA = {ra}");
        }
    }

    #[test]
    fn polar_night_stage_reported() {
        let loc = Location::new(78.0, 15.0).unwrap();
        let mut last = None;
        let mut sink = |_: Direction, s: Stage| last = Some(s);
        let err = compute_solar_event_with(
            loc,
            date(2022, 12, 21),
            ZenithKind::Official,
            Direction::Rising,
            &mut sink,
        )
        .unwrap_err();
        assert_eq!(err, RiseSetError::Domain(DomainError::PolarNight));
        assert_eq!(last, Some(Stage::Polar(DomainError::PolarNight)));
    }
}
