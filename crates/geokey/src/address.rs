use crate::Located;

/// A geocoded address record.
///
/// The composition base for location entities: a coordinate pair plus the
/// descriptive attributes a geocoder returns alongside it. Coordinates are
/// not validated on construction, mirroring the identifier encoder's
/// unvalidated contract; run the values through
/// [`validate_latitude`]/[`validate_longitude`] first when the caller needs
/// the geographic domain enforced.
///
/// # Example
///
/// ```
/// use geokey::GeoAddress;
///
/// let address = GeoAddress::new(32.0853, 34.7818)
///     .with_formatted("Tel Aviv, Israel")
///     .with_language("he");
/// assert_eq!(address.formatted(), Some("Tel Aviv, Israel"));
/// ```
///
/// [`validate_latitude`]: crate::validate_latitude
/// [`validate_longitude`]: crate::validate_longitude
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct GeoAddress {
    latitude: f64,
    longitude: f64,
    elevation: Option<f64>,
    formatted: Option<String>,
    language: Option<String>,
}

impl GeoAddress {
    /// Creates an address at the given coordinates, in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation: None,
            formatted: None,
            language: None,
        }
    }

    /// Sets the elevation, in meters.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Sets the formatted display text.
    pub fn with_formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted = Some(formatted.into());
        self
    }

    /// Sets the language tag of the formatted text.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Returns the elevation, in meters, if known.
    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }

    /// Returns the formatted display text, if any.
    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    /// Returns the language tag of the formatted text, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl Located for GeoAddress {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_fill_optional_fields() {
        let address = GeoAddress::new(31.778, 35.235)
            .with_elevation(754.0)
            .with_formatted("Jerusalem")
            .with_language("en");
        assert_eq!(address.latitude(), 31.778);
        assert_eq!(address.longitude(), 35.235);
        assert_eq!(address.elevation(), Some(754.0));
        assert_eq!(address.formatted(), Some("Jerusalem"));
        assert_eq!(address.language(), Some("en"));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let address = GeoAddress::new(0.0, 0.0);
        assert_eq!(address.elevation(), None);
        assert_eq!(address.formatted(), None);
        assert_eq!(address.language(), None);
    }
}
