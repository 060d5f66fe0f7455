//! Error types for coordinate handling.
//!
//! Identifier encoding itself is infallible: any pair of doubles packs into an
//! identifier. Errors arise only on the validated paths around it.
//!
//! ## Error Cases
//! - `LatitudeOutOfRange` / `LongitudeOutOfRange`: a caller-side range check
//!   or an index query received a coordinate outside the geographic domain.
//! - `ParseCoordinate`: coordinate text could not be parsed as a decimal
//!   degree value.
//! - `IdentifierOverflow`: a deserialized raw value sets bits outside the
//!   packed coordinate fields.

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for the crate.
#[derive(Clone, thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A latitude was outside `[-90, 90]` degrees.
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// A longitude was outside `[-180, 180]` degrees.
    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// Coordinate text was not a decimal degree value.
    #[error("invalid coordinate text: {text:?}")]
    ParseCoordinate { text: String },

    /// A raw identifier sets bits above the packed coordinate fields.
    #[error("identifier {raw:#x} sets bits outside the coordinate fields")]
    IdentifierOverflow { raw: u64 },
}
