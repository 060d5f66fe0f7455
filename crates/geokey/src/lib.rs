//! Compact 64-bit location identifiers and the records that use them.
//!
//! A [`CityId`] packs a latitude/longitude pair into one integer by
//! fixed-point encoding each axis at microdegree precision and OR-ing the
//! masked fields together. The encoding is pure, deterministic, and lossy by
//! intent: positions closer than a microdegree share a key, which is exactly
//! what a per-location primary key wants.
//!
//! Around the identifier sit the data model ([`GeoAddress`], [`City`]), the
//! fixed-point and validation helpers, coordinate text formatting, and an
//! in-memory [`CityIndex`] with distance-based lookup.
//!
//! ```
//! use geokey::{City, CityId, GeoAddress};
//!
//! let city = City::with_time_zone(
//!     GeoAddress::new(32.0853, 34.7818).with_formatted("Tel Aviv"),
//!     "Asia/Jerusalem",
//! );
//! assert_eq!(city.id(), CityId::from_degrees(32.0853, 34.7818));
//! ```

mod address;
mod city;
mod coord;
mod error;
mod format;
mod id;
mod index;
#[cfg(feature = "serde")]
pub mod serde;

pub use crate::address::*;
pub use crate::city::*;
pub use crate::coord::*;
pub use crate::error::*;
pub use crate::format::*;
pub use crate::id::*;
pub use crate::index::*;
