//! Coordinate text formatting and parsing.
//!
//! Provides the two notations location displays use: decimal degrees at
//! microdegree precision (matching [`RATIO`]) and sexagesimal
//! degree/minute/second text with a hemisphere suffix. Parsing accepts
//! decimal degree text and range-checks the result.
//!
//! [`RATIO`]: crate::RATIO

use crate::{Error, Result, validate_latitude, validate_longitude};

/// Formats a latitude as decimal degrees, e.g. `"32.085300°"`.
///
/// Six decimal places, one microdegree, the precision the identifier
/// encoding retains.
pub fn format_latitude_decimal(latitude: f64) -> String {
    format!("{latitude:.6}°")
}

/// Formats a longitude as decimal degrees, e.g. `"34.781800°"`.
pub fn format_longitude_decimal(longitude: f64) -> String {
    format!("{longitude:.6}°")
}

/// Formats a latitude in sexagesimal notation, e.g. `"32°05′07.1″N"`.
///
/// Zero maps to the northern hemisphere.
pub fn format_latitude_sexagesimal(latitude: f64) -> String {
    format_sexagesimal(latitude, 'N', 'S')
}

/// Formats a longitude in sexagesimal notation, e.g. `"34°46′54.5″E"`.
///
/// Zero maps to the eastern hemisphere.
pub fn format_longitude_sexagesimal(longitude: f64) -> String {
    format_sexagesimal(longitude, 'E', 'W')
}

/// Formats an elevation in meters, e.g. `"754.0 m"`.
pub fn format_elevation(elevation: f64) -> String {
    format!("{elevation:.1} m")
}

/// Formats a coordinate pair, and elevation when known, as one line.
///
/// ```
/// use geokey::format_coordinates;
///
/// assert_eq!(
///     format_coordinates(32.0853, 34.7818, None),
///     "32.085300°, 34.781800°"
/// );
/// ```
pub fn format_coordinates(latitude: f64, longitude: f64, elevation: Option<f64>) -> String {
    let mut text = format!(
        "{}, {}",
        format_latitude_decimal(latitude),
        format_longitude_decimal(longitude)
    );
    if let Some(elevation) = elevation {
        text.push_str(", ");
        text.push_str(&format_elevation(elevation));
    }
    text
}

/// Parses decimal latitude text, with or without a trailing `°`.
///
/// # Errors
///
/// [`Error::ParseCoordinate`] for text that is not a decimal number,
/// [`Error::LatitudeOutOfRange`] for values outside `[-90, 90]`.
pub fn parse_latitude(text: &str) -> Result<f64> {
    validate_latitude(parse_degrees(text)?)
}

/// Parses decimal longitude text, with or without a trailing `°`.
///
/// # Errors
///
/// [`Error::ParseCoordinate`] for text that is not a decimal number,
/// [`Error::LongitudeOutOfRange`] for values outside `[-180, 180]`.
pub fn parse_longitude(text: &str) -> Result<f64> {
    validate_longitude(parse_degrees(text)?)
}

fn parse_degrees(text: &str) -> Result<f64> {
    let trimmed = text.trim().trim_end_matches('°');
    trimmed.parse().map_err(|_| Error::ParseCoordinate {
        text: text.to_owned(),
    })
}

fn format_sexagesimal(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    let total = value.abs();
    let mut degrees = total.floor() as u64;
    let remainder = (total - total.floor()) * 60.0;
    let mut minutes = remainder.floor() as u64;
    // Round seconds to a tenth first so 59.96″ carries instead of printing 60.0″.
    let mut seconds = ((remainder - remainder.floor()) * 600.0).round() / 10.0;
    if seconds >= 60.0 {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes = 0;
        degrees += 1;
    }
    format!("{degrees}°{minutes:02}′{seconds:04.1}″{hemisphere}")
}
