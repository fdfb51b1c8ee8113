//! Axis-aligned bounding boxes over geographic coordinates.
//!
//! The map collaborator consumes these through `Action::FitBounds` to frame
//! either the whole branch directory or a user-position/branch pair. Padding
//! follows the Leaflet convention: a fraction of the box's own extent added
//! on every side.

use super::Coordinate;
use serde::{Deserialize, Serialize};

/// A latitude/longitude bounding box.
///
/// Invariant: `south <= north` and `west <= east`. Boxes are built from
/// coordinate sets via [`BoundingBox::from_points`], which establishes the
/// invariant, and only grow afterwards (`extend`, `pad`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Builds the smallest box containing every coordinate in `points`.
    ///
    /// Returns `None` for an empty iterator; a single point yields a
    /// degenerate (zero-extent) box.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grows the box to include `point`.
    pub fn extend(&mut self, point: Coordinate) {
        self.south = self.south.min(point.latitude);
        self.west = self.west.min(point.longitude);
        self.north = self.north.max(point.latitude);
        self.east = self.east.max(point.longitude);
    }

    /// Returns the box grown by `ratio` of its own width/height on each side.
    ///
    /// Matches Leaflet's `LatLngBounds.pad`: a degenerate box pads to itself.
    #[must_use]
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_margin = (self.north - self.south) * ratio;
        let lng_margin = (self.east - self.west) * ratio;
        Self {
            south: self.south - lat_margin,
            west: self.west - lng_margin,
            north: self.north + lat_margin,
            east: self.east + lng_margin,
        }
    }

    /// Returns the centre point of the box.
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Returns true if `point` lies inside the box (inclusive).
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude >= self.south
            && point.latitude <= self.north
            && point.longitude >= self.west
            && point.longitude <= self.east
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_spans_all_inputs() {
        let bounds = BoundingBox::from_points([
            Coordinate::new(51.7729, 0.1023),
            Coordinate::new(51.75, -0.3333),
            Coordinate::new(51.1328, 0.2636),
        ])
        .unwrap();

        assert_eq!(bounds.south, 51.1328);
        assert_eq!(bounds.west, -0.3333);
        assert_eq!(bounds.north, 51.7729);
        assert_eq!(bounds.east, 0.2636);
        assert!(bounds.contains(Coordinate::new(51.5, 0.0)));
    }

    #[test]
    fn from_points_is_none_for_empty_input() {
        assert!(BoundingBox::from_points(std::iter::empty::<Coordinate>()).is_none());
    }

    #[test]
    fn pad_grows_proportionally_to_extent() {
        let bounds = BoundingBox::from_points([
            Coordinate::new(50.0, 0.0),
            Coordinate::new(51.0, 2.0),
        ])
        .unwrap();
        let padded = bounds.pad(0.25);

        assert!((padded.south - 49.75).abs() < 1e-9);
        assert!((padded.north - 51.25).abs() < 1e-9);
        assert!((padded.west - -0.5).abs() < 1e-9);
        assert!((padded.east - 2.5).abs() < 1e-9);
    }

    #[test]
    fn center_of_pair_is_midpoint() {
        let bounds = BoundingBox::from_points([
            Coordinate::new(50.0, 0.0),
            Coordinate::new(52.0, 1.0),
        ])
        .unwrap();
        assert_eq!(bounds.center(), Coordinate::new(51.0, 0.5));
    }
}
