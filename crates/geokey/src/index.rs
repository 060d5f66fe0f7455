use crate::{City, CityId, Located, Result, validate_latitude, validate_longitude};
use std::collections::HashMap;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// WGS84 equatorial radius, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Radius, in meters, within which two positions count as the same location.
pub const SAME_LOCATION: f64 = 250.0;

/// Great-circle distance between two coordinate pairs, in meters.
///
/// Haversine over a spherical earth of [`EARTH_RADIUS_METERS`]; accurate to
/// well under one percent at the ranges the index queries care about.
pub fn distance_between(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> f64 {
    let phi1 = latitude1.to_radians();
    let phi2 = latitude2.to_radians();
    let half_dphi = (latitude2 - latitude1).to_radians() / 2.0;
    let half_dlambda = (longitude2 - longitude1).to_radians() / 2.0;

    let a = half_dphi.sin().powi(2) + phi1.cos() * phi2.cos() * half_dlambda.sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().asin()
}

#[derive(Clone, Debug)]
struct CityEntry {
    city: City,
    favorite: bool,
}

/// An in-memory city lookup keyed by the derived identifier.
///
/// Cities whose coordinates collapse to the same identifier occupy one slot:
/// inserting such a city replaces the stored record but keeps its favorite
/// flag, so a starred place stays starred when its record is refreshed.
///
/// Mutation takes `&mut self`; the index holds no interior locking. Wrap it
/// in whatever sharing the caller already uses when it must cross threads.
///
/// # Example
///
/// ```
/// use geokey::{City, CityIndex, GeoAddress};
///
/// let mut index = CityIndex::new();
/// let id = index.insert(City::new(
///     GeoAddress::new(32.0853, 34.7818).with_formatted("Tel Aviv"),
/// ));
///
/// let found = index.nearest(32.0855, 34.7820).unwrap();
/// assert_eq!(found.map(City::id), Some(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CityIndex {
    entries: HashMap<CityId, CityEntry>,
}

impl CityIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a city, keyed by the identifier its coordinates derive.
    ///
    /// Returns the key. A city already stored under the same key is replaced;
    /// its favorite flag is preserved.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn insert(&mut self, city: City) -> CityId {
        let id = city.id();
        let favorite = self.entries.get(&id).is_some_and(|entry| entry.favorite);
        self.entries.insert(id, CityEntry { city, favorite });
        id
    }

    /// Returns the city stored under `id`, if any.
    pub fn get(&self, id: CityId) -> Option<&City> {
        self.entries.get(&id).map(|entry| &entry.city)
    }

    /// Removes and returns the city stored under `id`.
    pub fn remove(&mut self, id: CityId) -> Option<City> {
        self.entries.remove(&id).map(|entry| entry.city)
    }

    /// Number of cities in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no cities.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored cities in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.entries.values().map(|entry| &entry.city)
    }

    /// Marks or unmarks the city stored under `id` as a favorite.
    ///
    /// Returns false when no city is stored under `id`.
    pub fn set_favorite(&mut self, id: CityId, favorite: bool) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.favorite = favorite;
                true
            }
            None => false,
        }
    }

    /// Returns true if the city stored under `id` is a favorite.
    pub fn is_favorite(&self, id: CityId) -> bool {
        self.entries.get(&id).is_some_and(|entry| entry.favorite)
    }

    /// Iterates over the favorite cities in arbitrary order.
    pub fn favorites(&self) -> impl Iterator<Item = &City> {
        self.entries
            .values()
            .filter(|entry| entry.favorite)
            .map(|entry| &entry.city)
    }

    /// Finds the closest city within [`SAME_LOCATION`] of the query point.
    ///
    /// # Errors
    ///
    /// Rejects query coordinates outside the geographic domain.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Result<Option<&City>> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;

        let closest = self
            .entries
            .values()
            .map(|entry| {
                let city = &entry.city;
                let distance =
                    distance_between(latitude, longitude, city.latitude(), city.longitude());
                (distance, city)
            })
            .filter(|(distance, _)| *distance <= SAME_LOCATION)
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, city)| city);
        Ok(closest)
    }

    /// Returns the cities within `radius` meters of the query point, closest
    /// first.
    ///
    /// # Errors
    ///
    /// Rejects query coordinates outside the geographic domain.
    pub fn within(&self, latitude: f64, longitude: f64, radius: f64) -> Result<Vec<&City>> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;

        let mut matches: Vec<(f64, &City)> = self
            .entries
            .values()
            .map(|entry| {
                let city = &entry.city;
                let distance =
                    distance_between(latitude, longitude, city.latitude(), city.longitude());
                (distance, city)
            })
            .filter(|(distance, _)| *distance <= radius)
            .collect();
        matches.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        Ok(matches.into_iter().map(|(_, city)| city).collect())
    }
}
