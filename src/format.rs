//! Pure presentation helpers shared by the TUI and the plain renderer.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::domain::MagnitudeBucket;

pub const LOCATION_SEPARATOR: &str = " of ";
pub const NEAR_THE: &str = "Near the";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationParts {
    pub offset: String,
    pub primary: String,
}

/// One decimal place, rounding half up (toward positive infinity).
pub fn format_magnitude(magnitude: f64) -> String {
    let rounded = (magnitude * 10.0 + 0.5).floor() / 10.0;
    format!("{:.1}", rounded)
}

pub fn split_location(raw: &str) -> LocationParts {
    match raw.split_once(LOCATION_SEPARATOR) {
        Some((offset, primary)) => LocationParts {
            offset: format!("{}{}", offset, LOCATION_SEPARATOR.trim_end()),
            primary: primary.to_string(),
        },
        None => LocationParts {
            offset: NEAR_THE.to_string(),
            primary: raw.to_string(),
        },
    }
}

pub fn magnitude_color_bucket(magnitude: f64) -> MagnitudeBucket {
    MagnitudeBucket::from_magnitude(magnitude)
}

pub fn format_date(time_ms: i64) -> String {
    format_date_in(time_ms, &Local)
}

pub fn format_time(time_ms: i64) -> String {
    format_time_in(time_ms, &Local)
}

/// `MMM dd, yyyy`, e.g. `Mar 03, 1984`.
pub fn format_date_in<Tz>(time_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format_in(time_ms, tz, "%b %d, %Y")
}

/// `h:mm a`, e.g. `4:30 PM`.
pub fn format_time_in<Tz>(time_ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format_in(time_ms, tz, "%-I:%M %p")
}

fn format_in<Tz>(time_ms: i64, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::<Utc>::from_timestamp_millis(time_ms) {
        Some(utc) => utc.with_timezone(tz).format(pattern).to_string(),
        None => String::new(),
    }
}
