//! Selection and status state types for the view coordinator.
//!
//! This module defines the two small state machines the coordinator runs on:
//! [`Selection`], the single process-wide "active branch" value, and
//! [`Status`], the human-readable line shown under the locator controls.
//!
//! # State Machine
//!
//! Selection has exactly two states:
//! - **Idle**: no branch highlighted; the full (or filtered) directory is
//!   shown in table order and the map sits at its default extent
//! - **Active**: one branch is highlighted, shown first in the list, centred
//!   on the map with its popup open
//!
//! Status is deliberately richer than Selection: a failed resolution returns
//! to `Idle` selection but carries a distinguishable `NoMatch` status, and
//! every geolocation failure reason keeps its own variant so the messages
//! stay distinct.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The currently active branch, if any.
///
/// Owned exclusively by `AppState` and mutated only from event transitions.
/// Initialized to `Idle`; set on every successful resolution or manual pick;
/// cleared on reset or on a query that yields no match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No active branch.
    Idle,

    /// One branch is selected and highlighted.
    Active {
        /// Id of the active branch; always present in the directory.
        id: String,
    },
}

impl Selection {
    /// Returns the active branch id, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Active { id } => Some(id),
        }
    }

    /// Returns true if no branch is active.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// The status line shown to the visitor.
///
/// Every resolver and geolocation outcome terminates in one of these; no
/// outcome throws. [`Status::fmt`] renders the user-facing strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Status {
    /// Initial/reset state; renders as an empty line.
    Idle,

    /// A geolocation request is in flight.
    Locating,

    /// A branch was resolved; `distance_km` is present when the resolution
    /// came from a geographic query.
    Nearest {
        /// Display name of the resolved branch.
        name: String,
        /// Distance from the query point, when known.
        distance_km: Option<f64>,
    },

    /// A postcode query matched no branch. Distinct from `Idle` so the UI can
    /// tell "nothing asked" from "nothing found".
    NoMatch,

    /// The user declined the location permission prompt.
    PermissionDenied,

    /// The device could not produce a position.
    PositionUnavailable,

    /// The geolocation request exceeded its bounded wait.
    LocationTimeout,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::Locating => write!(f, "Getting your location…"),
            Self::Nearest {
                name,
                distance_km: Some(distance),
            } => {
                write!(f, "Closest branch: {name} (~{distance:.1} km away)")
            }
            Self::Nearest {
                name,
                distance_km: None,
            } => write!(f, "Nearest branch: {name}"),
            Self::NoMatch => write!(f, "No matching branch found."),
            Self::PermissionDenied => {
                write!(f, "Location permission denied. Please allow location access.")
            }
            Self::PositionUnavailable => {
                write!(f, "Could not get your location. Try again.")
            }
            Self::LocationTimeout => {
                write!(f, "Location request timed out. Try again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_renders_empty() {
        assert_eq!(Status::Idle.to_string(), "");
    }

    #[test]
    fn nearest_with_distance_uses_closest_wording() {
        let status = Status::Nearest {
            name: "Cheese Pizza - Stevenage".to_string(),
            distance_km: Some(12.34),
        };
        assert_eq!(
            status.to_string(),
            "Closest branch: Cheese Pizza - Stevenage (~12.3 km away)"
        );
    }

    #[test]
    fn nearest_without_distance_uses_nearest_wording() {
        let status = Status::Nearest {
            name: "Cheese Pizza - Stevenage".to_string(),
            distance_km: None,
        };
        assert_eq!(status.to_string(), "Nearest branch: Cheese Pizza - Stevenage");
    }

    #[test]
    fn failure_statuses_stay_distinct() {
        let messages = [
            Status::NoMatch.to_string(),
            Status::PermissionDenied.to_string(),
            Status::PositionUnavailable.to_string(),
            Status::LocationTimeout.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn selection_accessors() {
        assert!(Selection::Idle.is_idle());
        assert_eq!(Selection::Idle.active_id(), None);
        let active = Selection::Active {
            id: "stevenage".to_string(),
        };
        assert_eq!(active.active_id(), Some("stevenage"));
    }
}
