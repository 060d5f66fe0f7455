use crate::{Located, RATIO, to_fixed_point};
use core::fmt;

/// A 64-bit city identifier packed from a coordinate pair
///
/// - 2 bits always zero
/// - 31 bits latitude (fixed-point microdegrees, masked)
/// - 32 bits longitude (fixed-point microdegrees, masked)
///
/// ```text
///  Bit Index:  63  62 61                        31 31                         0
///              +------+----------------------------+---------------------------+
///  Field:      | zero |       latitude (31)        |      longitude (32)       |
///              +------+----------------------------+---------------------------+
///              |<------------ MSB ----------- 64 bits ----------- LSB -------->|
/// ```
///
/// The two fields share bit 31: the latitude field is shifted left by 31 and
/// OR-ed with the full 32-bit longitude field, so a westward (negative)
/// longitude, whose two's-complement top bit is set, aliases the lowest
/// latitude bit. The overlap costs at most one microdegree of latitude
/// fidelity on decode and nothing on key stability.
///
/// Masking makes the encoding total and lossy by intent: any pair of doubles
/// packs into an identifier, equal pairs always pack to the same identifier,
/// and pairs closer than `1/RATIO` degrees on both axes collapse to one key.
/// Out-of-range coordinates are not rejected; they wrap within the masks and
/// may collide with in-range keys. Validate at the call site when the domain
/// matters.
///
/// # Example
///
/// ```
/// use geokey::CityId;
///
/// let id = CityId::from_degrees(32.0853, 34.7818);
/// assert_eq!(id.latitude_degrees(), 32.0853);
/// assert_eq!(id.longitude_degrees(), 34.7818);
/// assert_eq!(CityId::from_degrees(0.0, 0.0).to_raw(), 0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId {
    id: u64,
}

impl CityId {
    /// Bitmask for the 31-bit latitude field. Occupies bits 31 through 61.
    pub const LATITUDE_MASK: u64 = (1 << 31) - 1;

    /// Bitmask for the 32-bit longitude field. Occupies bits 0 through 31.
    pub const LONGITUDE_MASK: u64 = (1 << 32) - 1;

    /// Number of bits to shift the latitude field to its position (bit 31).
    pub const LATITUDE_SHIFT: u64 = 31;

    /// Largest raw value an identifier can take. Bits 62 and 63 are never set.
    pub const MAX: u64 = (Self::LATITUDE_MASK << Self::LATITUDE_SHIFT) | Self::LONGITUDE_MASK;

    /// Packs a coordinate pair, in degrees, into an identifier.
    ///
    /// Each axis is scaled by [`RATIO`], rounded to the nearest microdegree
    /// (ties away from zero), truncated to 64 bits, and masked to its field
    /// width. There is no failure path and no validation.
    ///
    /// [`RATIO`]: crate::RATIO
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::from_fixed_point(to_fixed_point(latitude), to_fixed_point(longitude))
    }

    /// Packs a pre-scaled microdegree pair into an identifier.
    pub const fn from_fixed_point(latitude: i64, longitude: i64) -> Self {
        let lat = (latitude as u64) & Self::LATITUDE_MASK;
        let lon = (longitude as u64) & Self::LONGITUDE_MASK;
        Self {
            id: (lat << Self::LATITUDE_SHIFT) | lon,
        }
    }

    /// Derives the identifier for anything with a position.
    ///
    /// Equivalent to `Self::from_degrees(location.latitude(),
    /// location.longitude())` for every implementor.
    pub fn for_location<L: Located + ?Sized>(location: &L) -> Self {
        Self::from_degrees(location.latitude(), location.longitude())
    }

    /// Extracts the raw 31-bit latitude field.
    pub const fn latitude_bits(&self) -> u64 {
        (self.id >> Self::LATITUDE_SHIFT) & Self::LATITUDE_MASK
    }

    /// Extracts the raw 32-bit longitude field.
    pub const fn longitude_bits(&self) -> u64 {
        self.id & Self::LONGITUDE_MASK
    }

    /// Recovers the latitude field as signed microdegrees.
    ///
    /// Sign-extends the 31-bit field, which is exact for identifiers packed
    /// from in-range coordinates except that a westward longitude may have
    /// set the field's lowest bit (see the type-level layout note).
    pub const fn latitude_fixed(&self) -> i64 {
        ((self.latitude_bits() << 33) as i64) >> 33
    }

    /// Recovers the longitude field as signed microdegrees.
    ///
    /// Sign-extends the 32-bit field; exact for in-range longitudes.
    pub const fn longitude_fixed(&self) -> i64 {
        ((self.longitude_bits() << 32) as i64) >> 32
    }

    /// Recovers the latitude in degrees, to microdegree precision.
    ///
    /// Off by at most `1/RATIO` when the packed longitude was westward.
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude_fixed() as f64 / RATIO
    }

    /// Recovers the longitude in degrees, to microdegree precision.
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude_fixed() as f64 / RATIO
    }

    /// Converts this identifier into its raw representation.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Reinterprets a raw value as an identifier.
    ///
    /// No validation is performed; see [`Self::is_valid`].
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Returns the identifier as a signed 64-bit integer.
    ///
    /// Every identifier produced by the packing constructors is non-negative,
    /// so the cast is lossless for key stores that only take signed integers.
    pub const fn to_i64(&self) -> i64 {
        self.id as i64
    }

    /// Returns true if no bits above the packed coordinate fields are set.
    ///
    /// Identifiers from the packing constructors are always valid; only
    /// values arriving through [`Self::from_raw`] or deserialization can
    /// fail this check.
    pub const fn is_valid(&self) -> bool {
        self.id <= Self::MAX
    }

    /// Returns the identifier as a zero-padded 20-digit string.
    pub fn to_padded_string(&self) -> String {
        format!("{:020}", self.id)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CityId")
            .field("id", &self.id)
            .field("latitude", &self.latitude_degrees())
            .field("longitude", &self.longitude_degrees())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_encodes_to_zero() {
        assert_eq!(CityId::from_degrees(0.0, 0.0).to_raw(), 0);
    }

    #[test]
    fn known_coordinates_pin_their_identifiers() {
        // Tel Aviv: both fields positive.
        let tel_aviv = CityId::from_degrees(32.0853, 34.7818);
        assert_eq!(tel_aviv.to_raw(), 68_902_657_125_956_200);
        assert_eq!(tel_aviv.latitude_bits(), 32_085_300);
        assert_eq!(tel_aviv.longitude_bits(), 34_781_800);

        // New York: westward longitude stored in two's complement.
        let new_york = CityId::from_degrees(40.7128, -74.0060);
        assert_eq!(new_york.to_raw(), 87_430_076_485_255_696);
        assert_eq!(new_york.longitude_bits(), 4_220_961_296);

        // Sydney: southern latitude loses its sign bit to the mask.
        let sydney = CityId::from_degrees(-33.8688, 151.2093);
        assert_eq!(sydney.to_raw(), 4_538_953_324_401_214_804);
        assert_eq!(sydney.latitude_bits(), 2_113_614_848);
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = CityId::from_degrees(32.0853, 34.7818);
        let b = CityId::from_degrees(32.0853, 34.7818);
        assert_eq!(a, b);
        assert_eq!(a.to_raw(), b.to_raw());
    }

    #[test]
    fn encoding_is_deterministic_over_random_coordinates() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let lat = rng.random_range(-90.0..=90.0);
            let lon = rng.random_range(-180.0..=180.0);
            let a = CityId::from_degrees(lat, lon);
            let b = CityId::from_degrees(lat, lon);
            assert_eq!(a, b);
            assert!(a.is_valid());
            assert!((a.longitude_degrees() - lon).abs() <= 0.6 / RATIO);
        }
    }

    #[test]
    fn sub_microdegree_neighbors_collapse() {
        let a = CityId::from_degrees(10.0, 20.0);
        let b = CityId::from_degrees(10.00000025, 20.00000025);
        assert_eq!(a, b);
    }

    #[test]
    fn microdegree_neighbors_do_not_collapse() {
        let a = CityId::from_degrees(10.0, 20.0);
        let b = CityId::from_degrees(10.000001, 20.0);
        assert_ne!(a, b);
    }

    #[test]
    fn latitude_mask_discards_sign() {
        let id = CityId::from_degrees(-90.0, 0.0);
        assert_eq!(id.latitude_bits(), (1 << 31) - 90_000_000);
        assert_eq!(id.latitude_fixed(), -90_000_000);
    }

    #[test]
    fn overscaled_latitude_wraps_within_mask() {
        // 5000 degrees scales past 31 bits; the excess is discarded.
        let id = CityId::from_degrees(5000.0, 0.0);
        assert_eq!(id.latitude_bits(), 705_032_704);
        assert!(id.is_valid());
    }

    #[test]
    fn longitude_mask_keeps_low_32_bits() {
        let id = CityId::from_degrees(0.0, -74.0060);
        assert_eq!(id.longitude_bits(), (1u64 << 32) - 74_006_000);
        assert_eq!(id.longitude_fixed(), -74_006_000);
    }

    #[test]
    fn decoded_degrees_match_in_range_inputs() {
        let sydney = CityId::from_degrees(-33.8688, 151.2093);
        assert_eq!(sydney.latitude_degrees(), -33.8688);
        assert_eq!(sydney.longitude_degrees(), 151.2093);

        // Westward longitude aliases the lowest latitude bit: one microdegree
        // north of the packed input.
        let new_york = CityId::from_degrees(40.7128, -74.0060);
        assert_eq!(new_york.longitude_degrees(), -74.0060);
        assert_eq!(new_york.latitude_degrees(), 40.712801);
    }

    #[test]
    fn fixed_point_constructor_matches_degrees() {
        assert_eq!(
            CityId::from_fixed_point(32_085_300, 34_781_800),
            CityId::from_degrees(32.0853, 34.7818)
        );
    }

    #[test]
    fn raw_round_trip() {
        let id = CityId::from_degrees(32.0853, 34.7818);
        assert_eq!(CityId::from_raw(id.to_raw()), id);
        assert_eq!(id.to_i64(), 68_902_657_125_956_200i64);
    }

    #[test]
    fn validity_tracks_high_bits() {
        assert!(CityId::from_raw(CityId::MAX).is_valid());
        assert!(!CityId::from_raw(CityId::MAX + 1).is_valid());
        assert!(!CityId::from_raw(u64::MAX).is_valid());
    }

    #[test]
    fn padded_string_is_twenty_digits() {
        let id = CityId::from_degrees(0.0, 34.7818);
        assert_eq!(id.to_padded_string(), "00000000000034781800");
    }
}
