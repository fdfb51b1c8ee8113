//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information: ordered card lists, dropdown
//! options, the rendered status line, and marker specifications for map
//! initialization.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the presentation collaborator. They contain no business logic, only
//! display-ready data; HTML construction stays on the host side.

use crate::directory::Directory;
use crate::domain::Branch;
use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Complete view model for the locator's list, dropdown, and status line.
///
/// Computed from `AppState` after every transition that sets the render
/// flag. Cards and options share the same ordering: current filter subset
/// in table order, active branch first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatorViewModel {
    /// Dropdown entries, in display order. The host prepends its own
    /// placeholder ("Please choose") entry.
    pub options: Vec<SelectOption>,

    /// Branch cards, in display order.
    pub cards: Vec<BranchCard>,

    /// Rendered status line; empty in the idle state.
    pub status_line: String,

    /// Id of the active branch, if any, for dropdown synchronization.
    pub active_id: Option<String>,

    /// Current search box contents, for input synchronization.
    pub query: String,
}

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Branch id submitted on selection.
    pub id: String,

    /// Display label, `"{area} ({outward})"`.
    pub label: String,
}

/// Display information for a single branch card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCard {
    /// Branch id, echoed back on card click.
    pub id: String,

    /// Card title: the branch's full display name.
    pub name: String,

    /// Meta line, `"{area} ({outward})"`.
    pub meta: String,

    /// Ordering link for the card's call-to-action.
    pub order_url: String,

    /// Google Maps directions link.
    pub directions_url: String,

    /// Whether this card carries the active highlight and "Nearest" badge.
    pub is_active: bool,
}

/// One marker to place on the map at initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    /// Branch id, reported back by the marker-click event.
    pub id: String,

    /// Marker position.
    pub coordinates: Coordinate,

    /// Structured popup content; the host renders it to markup.
    pub popup: PopupContent,
}

/// Structured content of a marker's detail popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupContent {
    /// Popup title: the branch's full display name.
    pub title: String,

    /// Secondary line: the branch's area.
    pub subtitle: String,

    /// Ordering link.
    pub order_url: String,

    /// Google Maps directions link.
    pub directions_url: String,
}

/// Builds one marker specification per branch, in table order.
///
/// Called once at startup, before the first event, to populate the map
/// collaborator.
#[must_use]
pub fn marker_specs(directory: &Directory) -> Vec<MarkerSpec> {
    directory.iter().map(marker_spec).collect()
}

fn marker_spec(branch: &Branch) -> MarkerSpec {
    MarkerSpec {
        id: branch.id.clone(),
        coordinates: branch.coordinates,
        popup: PopupContent {
            title: branch.name.clone(),
            subtitle: branch.area.clone(),
            order_url: branch.order_url.clone(),
            directions_url: branch.directions_url(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_marker_per_branch_in_table_order() {
        let directory = Directory::builtin();
        let specs = marker_specs(&directory);

        assert_eq!(specs.len(), directory.len());
        assert_eq!(specs[0].id, "harlow");
        assert_eq!(specs[2].popup.title, "Cheese Pizza - Stevenage");
        assert!(specs[2]
            .popup
            .directions_url
            .starts_with("https://www.google.com/maps/dir/"));
    }

    #[test]
    fn marker_specs_serialize_for_the_host_bridge() {
        let directory = Directory::builtin();
        let json = serde_json::to_string(&marker_specs(&directory)).unwrap();
        assert!(json.contains("\"id\":\"stevenage\""));
        assert!(json.contains("\"latitude\":51.8979"));
    }
}
