use helios_riseset::{
    DomainError, Location, RiseSetError, SunTimes, TracingDiagnostics, ZenithKind, sun_times_with,
};
use helios_time::{CalendarDate, format_duration_hms};

/// Outcome of a day's computation at one place.
#[derive(Debug, Clone, PartialEq)]
pub enum DayReport {
    Times(SunTimes),
    Polar(DomainError),
}

/// Compute sunrise and sunset, turning polar conditions into a report
/// rather than an error.
pub fn compute_day(
    location: Location,
    date: CalendarDate,
    zenith: ZenithKind,
) -> Result<DayReport, RiseSetError> {
    tracing::info!(
        lat = location.latitude_deg(),
        lon = location.longitude_deg(),
        %date,
        %zenith,
        "computing sunrise/sunset"
    );
    match sun_times_with(location, date, zenith, &mut TracingDiagnostics) {
        Ok(times) => Ok(DayReport::Times(times)),
        Err(RiseSetError::Domain(kind)) => Ok(DayReport::Polar(kind)),
        Err(e) => Err(e),
    }
}

/// Output lines for a report.
pub fn render(label: &str, date: CalendarDate, report: &DayReport) -> Vec<String> {
    match report {
        DayReport::Times(times) => {
            let (rise, set) = (times.sunrise, times.sunset);
            vec![
                format!(
                    "Sunrise at {label} on {date} is {}:{:02}:{:02} UTC",
                    rise.hour(),
                    rise.minute(),
                    rise.second()
                ),
                format!(
                    "Sunset at {label} on {date} is {}:{:02}:{:02} UTC",
                    set.hour(),
                    set.minute(),
                    set.second()
                ),
                format!(
                    "Day length at {label} on {date} is {}",
                    format_duration_hms(times.day_length_seconds())
                ),
            ]
        }
        DayReport::Polar(DomainError::PolarNight) => {
            vec![format!("Sun never rises at {label} on {date} (polar night)")]
        }
        DayReport::Polar(DomainError::PolarDay) => {
            vec![format!("Sun never sets at {label} on {date} (midnight sun)")]
        }
    }
}

/// Label for a bare coordinate pair.
pub fn coordinate_label(location: Location) -> String {
    format!(
        "{:.4}°N, {:.4}°E",
        location.latitude_deg(),
        location.longitude_deg()
    )
}
