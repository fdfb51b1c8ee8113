//! Geospatial primitives for the branch locator.
//!
//! # Organization
//!
//! - [`coordinate`]: `Coordinate` type and haversine distance
//! - [`bounds`]: bounding boxes for map framing

pub mod bounds;
pub mod coordinate;

pub use bounds::BoundingBox;
pub use coordinate::{haversine_km, Coordinate, EARTH_RADIUS_KM};
