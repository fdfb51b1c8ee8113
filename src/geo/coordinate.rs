//! Geographic coordinates and great-circle distance.
//!
//! Distances use the haversine formula with a spherical Earth of radius
//! 6371 km, which is accurate to well under 1% at the scale this widget
//! operates at (branches a few tens of kilometres apart).

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate with latitude and longitude in WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180).
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[inline]
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if latitude and longitude fall within their valid ranges.
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Computes the great-circle distance between two coordinates in kilometres.
///
/// The computation is symmetric (`haversine_km(a, b) == haversine_km(b, a)`)
/// and returns `0.0` for identical points.
///
/// # Examples
///
/// ```
/// use branchfinder::geo::{haversine_km, Coordinate};
///
/// let berlin = Coordinate::new(52.5200, 13.4050);
/// let paris = Coordinate::new(48.8566, 2.3522);
/// let distance = haversine_km(berlin, paris);
/// assert!((distance - 878.0).abs() < 10.0);
/// ```
#[must_use]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let s1 = (d_lat / 2.0).sin().powi(2);
    let s2 = a.latitude.to_radians().cos()
        * b.latitude.to_radians().cos()
        * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * (s1 + s2).sqrt().atan2((1.0 - s1 - s2).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let stevenage = Coordinate::new(51.8979, -0.2020);
        assert_eq!(haversine_km(stevenage, stevenage), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let harlow = Coordinate::new(51.7729, 0.1023);
        let chatham = Coordinate::new(51.38, 0.53);
        assert_eq!(haversine_km(harlow, chatham), haversine_km(chatham, harlow));
    }

    #[test]
    fn berlin_to_paris_is_roughly_878_km() {
        let berlin = Coordinate::new(52.5200, 13.4050);
        let paris = Coordinate::new(48.8566, 2.3522);
        assert!((haversine_km(berlin, paris) - 878.0).abs() < 10.0);
    }

    #[test]
    fn validity_bounds() {
        assert!(Coordinate::new(51.75, -0.3333).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
    }
}
