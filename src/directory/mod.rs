//! The immutable branch directory.
//!
//! This module defines [`Directory`], the read-only table of branch records
//! that every resolver query and view computation runs against. The directory
//! is constructed once at startup, validated for unique ids, and never mutated
//! afterwards; there are no add/remove/update operations by design.
//!
//! Scan order is the order records were supplied in, and it is part of the
//! contract: prefix matching and nearest-branch ties both resolve to the first
//! record encountered.

use crate::domain::{Branch, LocatorError, Result};
use crate::geo::BoundingBox;
use std::collections::HashSet;

mod data;

pub use data::builtin_branches;

/// The read-only table of branch records.
///
/// Owns the branch list and exposes lookup, ordered iteration, and the
/// geographic bounds used for the map's default extent. Invariant: every
/// `Branch::id` is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    branches: Vec<Branch>,
}

impl Directory {
    /// Creates a directory from a branch list, validating id uniqueness.
    ///
    /// The supplied order is preserved and becomes the resolver's tie-break
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Directory`] if two records share an id.
    pub fn new(branches: Vec<Branch>) -> Result<Self> {
        let mut seen = HashSet::new();
        for branch in &branches {
            if !seen.insert(branch.id.as_str()) {
                return Err(LocatorError::Directory(format!(
                    "duplicate branch id: {}",
                    branch.id
                )));
            }
        }

        tracing::debug!(branch_count = branches.len(), "directory loaded");
        Ok(Self { branches })
    }

    /// Returns the directory built from the compiled-in branch table.
    #[must_use]
    pub fn builtin() -> Self {
        // The builtin table is validated by test; unique ids hold by construction.
        Self {
            branches: data::builtin_branches(),
        }
    }

    /// Looks up a branch by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|branch| branch.id == id)
    }

    /// Returns true if a branch with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Iterates branches in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Branch> {
        self.branches.iter()
    }

    /// Returns the number of branches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Returns true if the directory holds no branches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Returns the bounding box of all branch coordinates, or `None` if the
    /// directory is empty.
    ///
    /// The map collaborator fits this box (padded) as its default extent.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.branches.iter().map(|branch| branch.coordinates))
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Branch;
    type IntoIter = std::slice::Iter<'a, Branch>;

    fn into_iter(self) -> Self::IntoIter {
        self.branches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    fn record(id: &str) -> Branch {
        Branch {
            id: id.to_string(),
            name: format!("Cheese Pizza - {id}"),
            area: "Somewhere".to_string(),
            outward: "XX1".to_string(),
            postal_prefixes: vec!["XX".to_string()],
            coordinates: Coordinate::new(51.0, 0.0),
            order_url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn builtin_table_is_valid_and_ordered() {
        let directory = Directory::new(builtin_branches()).unwrap();
        let ids: Vec<&str> = directory.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["harlow", "stalbans", "stevenage", "chatham", "tunbridgewells"]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Directory::new(vec![record("harlow"), record("harlow")]).unwrap_err();
        assert!(err.to_string().contains("duplicate branch id: harlow"));
    }

    #[test]
    fn lookup_by_id() {
        let directory = Directory::builtin();
        assert!(directory.contains("stevenage"));
        assert_eq!(
            directory.get("stevenage").map(|b| b.name.as_str()),
            Some("Cheese Pizza - Stevenage")
        );
        assert!(directory.get("gotham").is_none());
    }

    #[test]
    fn bounds_cover_every_branch() {
        let directory = Directory::builtin();
        let bounds = directory.bounds().unwrap();
        for branch in &directory {
            assert!(bounds.contains(branch.coordinates));
        }
    }

    #[test]
    fn bounds_of_empty_directory_is_none() {
        let directory = Directory::new(vec![]).unwrap();
        assert!(directory.bounds().is_none());
    }
}
