//! Local-time capability: coordinate → IANA zone → wall-clock time.
//!
//! Zone lookup asks the timeapi.io coordinate endpoint first, then
//! falls back to a rough longitude-based estimate so the capability
//! still answers offline. Times render as a 12-hour clock with AM/PM.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::time::Duration;

const TZ_API_TIMEOUT: Duration = Duration::from_secs(3);

/// Coordinates → zone → current local time capability.
pub trait LocalTimeService {
    /// IANA zone name for a coordinate, if determinable.
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String>;

    /// Current time in the zone, formatted `hh:mm AM/PM`. None for an
    /// unrecognized zone name.
    fn current_time_in(&self, zone: &str) -> Option<String>;
}

/// Default implementation over timeapi.io and chrono-tz.
pub struct Clock {
    offline: bool,
}

impl Clock {
    pub fn new() -> Self {
        Self { offline: false }
    }

    /// Offline mode — skip the zone API and go straight to the
    /// longitude estimate.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalTimeService for Clock {
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String> {
        if !self.offline {
            if let Some(zone) = zone_from_api(lat, lon) {
                return Some(zone);
            }
        }
        Some(zone_from_longitude(lon))
    }

    fn current_time_in(&self, zone: &str) -> Option<String> {
        let tz: Tz = zone.parse().ok()?;
        Some(format_12h(Utc::now(), &tz))
    }
}

/// Render an instant as `hh:mm AM/PM` in the given zone.
fn format_12h(instant: DateTime<Utc>, tz: &Tz) -> String {
    instant.with_timezone(tz).format("%I:%M %p").to_string()
}

fn zone_from_api(lat: f64, lon: f64) -> Option<String> {
    let url = format!(
        "https://www.timeapi.io/api/timezone/coordinate?latitude={}&longitude={}",
        lat, lon
    );

    let response = ureq::get(&url)
        .set("User-Agent", "Dialscope/0.3")
        .timeout(TZ_API_TIMEOUT)
        .call()
        .ok()?;

    let val: serde_json::Value = response.into_json().ok()?;
    val.get("timeZone")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Rough IANA zone from longitude alone. Crude, but always answers.
fn zone_from_longitude(lon: f64) -> String {
    let offset_hours = (lon / 15.0).round() as i32;
    match offset_hours {
        -12..=-10 => "Pacific/Honolulu".into(),
        -9 => "America/Anchorage".into(),
        -8 => "America/Los_Angeles".into(),
        -7 => "America/Denver".into(),
        -6 => "America/Chicago".into(),
        -5 => "America/New_York".into(),
        -4 => "America/Halifax".into(),
        -3 => "America/Sao_Paulo".into(),
        -2..=-1 => "Atlantic/Azores".into(),
        0 => "Europe/London".into(),
        1 => "Europe/Paris".into(),
        2 => "Europe/Helsinki".into(),
        3 => "Europe/Moscow".into(),
        4 => "Asia/Dubai".into(),
        5 => "Asia/Karachi".into(),
        6 => "Asia/Dhaka".into(),
        7 => "Asia/Bangkok".into(),
        8 => "Asia/Shanghai".into(),
        9 => "Asia/Tokyo".into(),
        10 => "Australia/Sydney".into(),
        11 => "Pacific/Noumea".into(),
        12 => "Pacific/Auckland".into(),
        _ => "UTC".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_12h_morning() {
        // 2026-06-15 08:30 UTC — UTC zone keeps the wall clock.
        let instant = Utc.with_ymd_and_hms(2026, 6, 15, 8, 30, 0).unwrap();
        assert_eq!(format_12h(instant, &chrono_tz::UTC), "08:30 AM");
    }

    #[test]
    fn test_format_12h_noon_and_midnight() {
        let noon = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_12h(noon, &chrono_tz::UTC), "12:00 PM");

        let midnight = Utc.with_ymd_and_hms(2026, 6, 15, 0, 0, 0).unwrap();
        assert_eq!(format_12h(midnight, &chrono_tz::UTC), "12:00 AM");
    }

    #[test]
    fn test_format_12h_zone_shift() {
        // 23:30 UTC is 08:30 AM next day in Tokyo (UTC+9).
        let instant = Utc.with_ymd_and_hms(2026, 6, 15, 23, 30, 0).unwrap();
        let tz: Tz = "Asia/Tokyo".parse().unwrap();
        assert_eq!(format_12h(instant, &tz), "08:30 AM");
    }

    #[test]
    fn test_current_time_in_bad_zone() {
        let clock = Clock::new();
        assert!(clock.current_time_in("Not/AZone").is_none());
    }

    #[test]
    fn test_current_time_in_valid_zone_shape() {
        let clock = Clock::new();
        let display = clock.current_time_in("Europe/Stockholm").unwrap();
        // hh:mm AM/PM
        assert_eq!(display.len(), 8);
        assert!(display.ends_with("AM") || display.ends_with("PM"));
        assert_eq!(&display[2..3], ":");
    }

    #[test]
    fn test_zone_from_longitude() {
        assert_eq!(zone_from_longitude(0.0), "Europe/London");
        assert_eq!(zone_from_longitude(-74.0), "America/New_York");
        assert_eq!(zone_from_longitude(139.7), "Asia/Tokyo");
    }

    #[test]
    fn test_offline_timezone_at_uses_estimate() {
        let mut clock = Clock::new();
        clock.set_offline(true);
        assert_eq!(clock.timezone_at(59.3, 18.07), Some("Europe/Paris".into()));
    }
}
