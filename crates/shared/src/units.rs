//! Display formatting helpers shared by the weather panels.

use chrono::DateTime;

/// Rounded display temperature, e.g. `23°`.
pub fn format_temp(celsius: f64) -> String {
    format!("{}°", celsius.round() as i64)
}

/// 8-point compass direction for a wind bearing in degrees.
pub fn wind_direction(deg: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let normalized = deg.rem_euclid(360.0);
    POINTS[((normalized + 22.5) / 45.0) as usize % 8]
}

/// Local wall-clock time (`HH:MM`) for a unix timestamp and a UTC offset in
/// seconds, as reported by the weather API's `timezone` field.
pub fn format_time(unix: i64, tz_offset: i64) -> String {
    DateTime::from_timestamp(unix + tz_offset, 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Short weekday label (`Tue, Sep 3`) for a unix timestamp and a UTC offset.
pub fn format_day(unix: i64, tz_offset: i64) -> String {
    DateTime::from_timestamp(unix + tz_offset, 0)
        .map(|t| t.format("%a, %b %-d").to_string())
        .unwrap_or_default()
}

/// Upper-cases the first character of an API condition description
/// ("broken clouds" -> "Broken clouds").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperatures_round_to_whole_degrees() {
        assert_eq!(format_temp(18.3), "18°");
        assert_eq!(format_temp(18.5), "19°");
        assert_eq!(format_temp(-0.4), "0°");
        assert_eq!(format_temp(-3.6), "-4°");
    }

    #[test]
    fn wind_bearings_map_to_compass_points() {
        assert_eq!(wind_direction(0.0), "N");
        assert_eq!(wind_direction(45.0), "NE");
        assert_eq!(wind_direction(180.0), "S");
        assert_eq!(wind_direction(337.4), "NW");
        assert_eq!(wind_direction(337.5), "N");
        // Bearings wrap outside [0, 360).
        assert_eq!(wind_direction(405.0), "NE");
        assert_eq!(wind_direction(-90.0), "W");
    }

    #[test]
    fn times_render_in_the_location_offset() {
        // 2024-09-26 12:00:00 UTC
        let noon_utc = 1727352000;
        assert_eq!(format_time(noon_utc, 0), "12:00");
        assert_eq!(format_time(noon_utc, 7200), "14:00");
        assert_eq!(format_time(noon_utc, -3600), "11:00");
    }

    #[test]
    fn descriptions_capitalize_first_letter_only() {
        assert_eq!(capitalize("broken clouds"), "Broken clouds");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Rain"), "Rain");
    }
}
