//! Normalized result model.
//!
//! Every provider, whatever its vendor schema, reports results as an
//! [`AddressCollection`] of immutable [`Address`] values built through an
//! [`AddressBuilder`]. Sub-values ([`Coordinates`], [`Bounds`],
//! [`AdminLevel`], [`Country`]) are plain immutable values.

mod address;
mod admin_level;
mod builder;
mod collection;
mod coordinates;
mod country;

pub use address::{Address, Location};
pub use admin_level::{AdminLevel, AdminLevelCollection, MAX_LEVEL_DEPTH};
pub use builder::AddressBuilder;
pub use collection::AddressCollection;
pub use coordinates::{Bounds, Coordinates, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
pub use country::Country;
