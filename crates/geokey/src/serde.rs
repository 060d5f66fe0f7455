//! Serde adapters for identifier fields.
//!
//! [`CityId`] derives `Serialize`/`Deserialize` as a struct. Wire formats
//! that store the bare integer instead use the [`as_native`] adapter, which
//! also validates on decode so foreign data cannot smuggle in bits above the
//! packed coordinate fields.
//!
//! [`CityId`]: crate::CityId

/// Serialize a [`CityId`] as its native integer representation.
///
/// ```
/// use geokey::CityId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Row {
///     #[serde(with = "geokey::serde::as_native")]
///     id: CityId,
/// }
///
/// let row = Row { id: CityId::from_degrees(32.0853, 34.7818) };
/// let json = serde_json::to_string(&row).unwrap();
/// assert_eq!(json, r#"{"id":68902657125956200}"#);
/// ```
///
/// [`CityId`]: crate::CityId
pub mod as_native {
    use crate::{CityId, Error};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize an identifier as its raw integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &CityId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize an identifier from its raw integer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The value sets bits outside the packed coordinate fields
    pub fn deserialize<'de, D>(d: D) -> Result<CityId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(d)?;
        let id = CityId::from_raw(raw);
        if !id.is_valid() {
            return Err(serde::de::Error::custom(Error::IdentifierOverflow { raw }));
        }
        Ok(id)
    }
}
