//! Branch domain model and operations.
//!
//! This module defines the core `Branch` type representing a single business
//! location that can be shown on the map and in the list view. Branch records
//! are immutable after directory load; every field except `postal_prefixes`
//! is a display or linking value, opaque to the resolver.

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// A single business location in the branch directory.
///
/// Branches are loaded once at startup and never mutated. The resolver matches
/// against `postal_prefixes` and `coordinates`; everything else exists for
/// display (`name`, `area`, `outward`) or outbound linking (`order_url`).
///
/// # Fields
///
/// - `id`: unique key across the directory (e.g. `"stevenage"`)
/// - `name`: full display name (e.g. `"Cheese Pizza - Stevenage"`)
/// - `area`: locality display string (e.g. `"Stevenage, Hertfordshire"`)
/// - `outward`: canonical outward code shown next to the area (e.g. `"SG1"`)
/// - `postal_prefixes`: one or more short prefixes used for postcode matching
/// - `coordinates`: WGS-84 latitude/longitude in degrees
/// - `order_url`: external ordering link, opaque to the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub area: String,
    pub outward: String,
    pub postal_prefixes: Vec<String>,
    pub coordinates: Coordinate,
    pub order_url: String,
}

impl Branch {
    /// Returns a Google Maps directions link targeting this branch.
    ///
    /// Used for the "Directions" link in marker popups and branch cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use branchfinder::Directory;
    ///
    /// let directory = Directory::builtin();
    /// let branch = directory.get("stevenage").unwrap();
    /// assert!(branch.directions_url().starts_with("https://www.google.com/maps/dir/"));
    /// ```
    #[must_use]
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            self.coordinates.latitude, self.coordinates.longitude
        )
    }

    /// Returns the `"{area} ({outward})"` line used by dropdown options and
    /// card meta rows.
    #[must_use]
    pub fn area_label(&self) -> String {
        format!("{} ({})", self.area, self.outward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch() -> Branch {
        Branch {
            id: "stevenage".to_string(),
            name: "Cheese Pizza - Stevenage".to_string(),
            area: "Stevenage, Hertfordshire".to_string(),
            outward: "SG1".to_string(),
            postal_prefixes: vec!["SG".to_string()],
            coordinates: Coordinate::new(51.8979, -0.2020),
            order_url: "https://cheesepizzastevenage.co.uk/".to_string(),
        }
    }

    #[test]
    fn directions_url_targets_branch_coordinates() {
        assert_eq!(
            branch().directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=51.8979,-0.202"
        );
    }

    #[test]
    fn area_label_includes_outward_code() {
        assert_eq!(branch().area_label(), "Stevenage, Hertfordshire (SG1)");
    }
}
