use crate::{Error, Result};

/// Factor converting a degree value to its integer fixed-point form.
///
/// One unit of the fixed-point representation is a microdegree. The same
/// factor scales every coordinate the crate packs, so two values that agree
/// after scaling and rounding are indistinguishable downstream.
pub const RATIO: f64 = 1_000_000.0;

/// Southernmost valid latitude, in degrees.
pub const LATITUDE_MIN: f64 = -90.0;
/// Northernmost valid latitude, in degrees.
pub const LATITUDE_MAX: f64 = 90.0;
/// Westernmost valid longitude, in degrees.
pub const LONGITUDE_MIN: f64 = -180.0;
/// Easternmost valid longitude, in degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Converts a degree value to fixed-point microdegrees.
///
/// The value is scaled by [`RATIO`] and rounded to the nearest integer, ties
/// away from zero. The cast saturates at the `i64` bounds, which no finite
/// geographic coordinate approaches: every in-range value stays within
/// `±180_000_000` and round-trips exactly through [`from_fixed_point`].
///
/// Out-of-range input is not rejected here; use [`validate_latitude`] or
/// [`validate_longitude`] first when the domain matters.
pub fn to_fixed_point(degrees: f64) -> i64 {
    (degrees * RATIO).round() as i64
}

/// Converts fixed-point microdegrees back to a degree value.
pub fn from_fixed_point(fixed: i64) -> f64 {
    fixed as f64 / RATIO
}

/// Checks that a latitude lies within `[-90, 90]` degrees.
///
/// Returns the value unchanged on success so the check can sit inline in an
/// expression chain.
pub fn validate_latitude(latitude: f64) -> Result<f64> {
    if !(LATITUDE_MIN..=LATITUDE_MAX).contains(&latitude) {
        return Err(Error::LatitudeOutOfRange(latitude));
    }
    Ok(latitude)
}

/// Checks that a longitude lies within `[-180, 180]` degrees.
pub fn validate_longitude(longitude: f64) -> Result<f64> {
    if !(LONGITUDE_MIN..=LONGITUDE_MAX).contains(&longitude) {
        return Err(Error::LongitudeOutOfRange(longitude));
    }
    Ok(longitude)
}

/// A value with a geographic position.
///
/// This is the seam between the identifier encoder and whatever record type
/// carries the coordinates: anything that can report a latitude and longitude
/// in degrees can be keyed.
///
/// # Example
///
/// ```
/// use geokey::{CityId, Located};
///
/// struct Point {
///     lat: f64,
///     lon: f64,
/// }
///
/// impl Located for Point {
///     fn latitude(&self) -> f64 {
///         self.lat
///     }
///     fn longitude(&self) -> f64 {
///         self.lon
///     }
/// }
///
/// let p = Point { lat: 32.0853, lon: 34.7818 };
/// assert_eq!(CityId::for_location(&p), CityId::from_degrees(32.0853, 34.7818));
/// ```
pub trait Located {
    /// Returns the latitude, in degrees.
    fn latitude(&self) -> f64;

    /// Returns the longitude, in degrees.
    fn longitude(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_round_trips_in_range_values() {
        for &deg in &[0.0, 32.0853, -33.8688, 151.2093, -74.006, 90.0, -90.0, 180.0, -180.0] {
            let fixed = to_fixed_point(deg);
            assert!((from_fixed_point(fixed) - deg).abs() < 0.5 / RATIO);
        }
    }

    #[test]
    fn fixed_point_rounds_to_nearest() {
        // 1.4 and 1.6 microdegrees straddle the integer boundary.
        assert_eq!(to_fixed_point(0.0000014), 1);
        assert_eq!(to_fixed_point(0.0000016), 2);
        assert_eq!(to_fixed_point(-0.0000014), -1);
        assert_eq!(to_fixed_point(-0.0000016), -2);
    }

    #[test]
    fn in_range_values_are_exact_microdegrees() {
        assert_eq!(to_fixed_point(90.0), 90_000_000);
        assert_eq!(to_fixed_point(-180.0), -180_000_000);
        assert_eq!(from_fixed_point(34_781_800), 34.7818);
    }

    #[test]
    fn validation_accepts_bounds() {
        assert_eq!(validate_latitude(90.0), Ok(90.0));
        assert_eq!(validate_latitude(-90.0), Ok(-90.0));
        assert_eq!(validate_longitude(180.0), Ok(180.0));
        assert_eq!(validate_longitude(-180.0), Ok(-180.0));
    }

    #[test]
    fn validation_rejects_out_of_range() {
        assert_eq!(
            validate_latitude(90.1),
            Err(Error::LatitudeOutOfRange(90.1))
        );
        assert_eq!(
            validate_longitude(-180.5),
            Err(Error::LongitudeOutOfRange(-180.5))
        );
        assert!(validate_latitude(f64::NAN).is_err());
    }
}
