//! Golden-value tests for the approximate sunrise/sunset algorithm.
//!
//! Expected times are whole-second truncations of the algorithm's UTC hours.

use helios_riseset::{
    Direction, DomainError, Location, RiseSetError, ZenithKind, compute_solar_event, sun_times,
    sunrise, sunset,
};
use helios_time::{CalendarDate, UtcTimestamp};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

fn hms(t: UtcTimestamp) -> (u32, u32, u32) {
    (t.hour(), t.minute(), t.second())
}

fn reading() -> Location {
    Location::new(51.414_166_66, -1.515).unwrap()
}

#[test]
fn reading_official_sunrise() {
    let t = sunrise(reading(), date(2022, 11, 22), ZenithKind::Official).unwrap();
    assert_eq!(hms(t), (7, 34, 44));
    assert_eq!((t.year(), t.month(), t.day()), (2022, 11, 22));
}

#[test]
fn reading_official_sunset() {
    let t = sunset(reading(), date(2022, 11, 22), ZenithKind::Official).unwrap();
    assert_eq!(hms(t), (16, 8, 55));
    assert_eq!(t.to_string(), "2022-11-22T16:08:55Z");
}

#[test]
fn reading_twilights() {
    let d = date(2022, 11, 22);
    let cases = [
        (ZenithKind::Civil, (6, 57, 0), (16, 46, 43)),
        (ZenithKind::Nautical, (6, 15, 44), (17, 28, 2)),
        (ZenithKind::Astronomical, (5, 36, 7), (18, 7, 40)),
    ];
    for (zenith, dawn, dusk) in cases {
        let times = sun_times(reading(), d, zenith).unwrap();
        assert_eq!(hms(times.sunrise), dawn, "{zenith} dawn");
        assert_eq!(hms(times.sunset), dusk, "{zenith} dusk");
    }
}

#[test]
fn equator_equinox() {
    let loc = Location::new(0.0, 0.0).unwrap();
    let times = sun_times(loc, date(2024, 3, 20), ZenithKind::Official).unwrap();
    assert_eq!(hms(times.sunrise), (6, 4, 4));
    assert_eq!(hms(times.sunset), (18, 10, 35));
}

#[test]
fn new_delhi_equinox() {
    let loc = Location::new(28.6139, 77.209).unwrap();
    let times = sun_times(loc, date(2024, 3, 20), ZenithKind::Official).unwrap();
    // 06:24 / 18:32 IST
    assert_eq!(hms(times.sunrise), (0, 54, 45));
    assert_eq!(hms(times.sunset), (13, 2, 47));
}

#[test]
fn sydney_sunrise_keeps_input_date() {
    // Sunrise in Sydney is the previous UTC evening; the date is not carried.
    let loc = Location::new(-33.8688, 151.2093).unwrap();
    let d = date(2024, 1, 1);
    let rise = sunrise(loc, d, ZenithKind::Official).unwrap();
    let set = sunset(loc, d, ZenithKind::Official).unwrap();
    assert_eq!(hms(rise), (18, 47, 26));
    assert_eq!(hms(set), (9, 9, 29));
    assert_eq!(rise.date(), d);
    assert_eq!(set.date(), d);
}

#[test]
fn reading_day_length() {
    let times = sun_times(reading(), date(2022, 11, 22), ZenithKind::Official).unwrap();
    assert_eq!(times.day_length_seconds(), 8 * 3600 + 34 * 60 + 11);
}

#[test]
fn svalbard_winter_never_rises() {
    let loc = Location::new(78.0, 15.0).unwrap();
    let d = date(2022, 12, 21);
    for direction in [Direction::Rising, Direction::Setting] {
        let err = compute_solar_event(loc, d, ZenithKind::Official, direction).unwrap_err();
        assert_eq!(err, RiseSetError::Domain(DomainError::PolarNight), "{direction:?}");
    }
}

#[test]
fn svalbard_summer_never_sets() {
    let loc = Location::new(78.0, 15.0).unwrap();
    let d = date(2022, 6, 21);
    for direction in [Direction::Rising, Direction::Setting] {
        let err = compute_solar_event(loc, d, ZenithKind::Official, direction).unwrap_err();
        assert_eq!(err.domain(), Some(DomainError::PolarDay), "{direction:?}");
    }
}

#[test]
fn antarctic_seasons_reversed() {
    let loc = Location::new(-78.0, 166.0).unwrap();
    let winter = sun_times(loc, date(2022, 6, 21), ZenithKind::Official).unwrap_err();
    assert_eq!(winter.domain(), Some(DomainError::PolarNight));
    let summer = sun_times(loc, date(2022, 12, 21), ZenithKind::Official).unwrap_err();
    assert_eq!(summer.domain(), Some(DomainError::PolarDay));
}

#[test]
fn mid_latitude_astronomical_twilight_lasts_all_night_in_june() {
    let err = sunrise(reading(), date(2023, 6, 10), ZenithKind::Astronomical).unwrap_err();
    assert_eq!(err.domain(), Some(DomainError::PolarDay));
    assert!(sunrise(reading(), date(2023, 6, 10), ZenithKind::Official).is_ok());
}

#[test]
fn poles_are_valid_inputs() {
    let north = Location::new(90.0, 0.0).unwrap();
    let err = sunrise(north, date(2022, 12, 21), ZenithKind::Official).unwrap_err();
    assert_eq!(err.domain(), Some(DomainError::PolarNight));
}
