use crate::{CityId, GeoAddress, Located};

/// Time zone assigned to a city until a real one is known.
pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// A value with a time zone.
pub trait Zoned {
    /// Returns the IANA time zone identifier, e.g. `"Asia/Jerusalem"`.
    fn time_zone(&self) -> &str;
}

/// A city record.
///
/// Embeds a [`GeoAddress`] and adds the time zone the city's clock follows.
/// The identifier is derived from the coordinates on demand rather than
/// stored, so it cannot drift from the position; the time zone is the one
/// mutable attribute.
///
/// # Example
///
/// ```
/// use geokey::{City, CityId, GeoAddress};
///
/// let mut city = City::with_time_zone(
///     GeoAddress::new(32.0853, 34.7818).with_formatted("Tel Aviv"),
///     "Asia/Jerusalem",
/// );
/// assert_eq!(city.id(), CityId::from_degrees(32.0853, 34.7818));
///
/// city.set_time_zone("Asia/Tel_Aviv");
/// assert_eq!(city.id(), CityId::from_degrees(32.0853, 34.7818));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    address: GeoAddress,
    time_zone: String,
}

impl City {
    /// Creates a city at the given address, in the [`DEFAULT_TIME_ZONE`].
    pub fn new(address: GeoAddress) -> Self {
        Self::with_time_zone(address, DEFAULT_TIME_ZONE)
    }

    /// Creates a city with an explicit time zone identifier.
    pub fn with_time_zone(address: GeoAddress, time_zone: impl Into<String>) -> Self {
        Self {
            address,
            time_zone: time_zone.into(),
        }
    }

    /// Returns the identifier derived from this city's coordinates.
    pub fn id(&self) -> CityId {
        CityId::for_location(self)
    }

    /// Returns the embedded address record.
    pub fn address(&self) -> &GeoAddress {
        &self.address
    }

    /// Replaces the time zone identifier.
    pub fn set_time_zone(&mut self, time_zone: impl Into<String>) {
        self.time_zone = time_zone.into();
    }
}

impl From<GeoAddress> for City {
    fn from(address: GeoAddress) -> Self {
        Self::new(address)
    }
}

impl Located for City {
    fn latitude(&self) -> f64 {
        self.address.latitude()
    }

    fn longitude(&self) -> f64 {
        self.address.longitude()
    }
}

impl Zoned for City {
    fn time_zone(&self) -> &str {
        &self.time_zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_delegates_to_coordinates() {
        let city = City::new(GeoAddress::new(32.0853, 34.7818));
        assert_eq!(
            city.id(),
            CityId::from_degrees(city.latitude(), city.longitude())
        );
    }

    #[test]
    fn time_zone_defaults_and_mutates() {
        let mut city = City::from(GeoAddress::new(-33.8688, 151.2093));
        assert_eq!(city.time_zone(), DEFAULT_TIME_ZONE);

        city.set_time_zone("Australia/Sydney");
        assert_eq!(city.time_zone(), "Australia/Sydney");
    }

    #[test]
    fn time_zone_does_not_affect_the_id() {
        let address = GeoAddress::new(40.7128, -74.0060);
        let utc = City::new(address.clone());
        let local = City::with_time_zone(address, "America/New_York");
        assert_eq!(utc.id(), local.id());
    }
}
