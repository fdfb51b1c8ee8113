//! Actions representing side effects to be executed by the host runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or a
//! geolocation callback. Actions bridge pure state transformations and
//! effectful operations on the external collaborators: the map widget and
//! the geolocation provider.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The host executes
//! them in sequence; order matters (e.g. a pair-bounds fit followed by a
//! `SetView` leaves the map centred on the branch, as the original widget
//! behaves).

use crate::geo::{BoundingBox, Coordinate};
use crate::geolocation::GeolocationOptions;
use serde::{Deserialize, Serialize};

/// Commands representing side effects to be executed by the host runtime.
///
/// Actions are produced by the event handler and executed by the host's map
/// and geolocation shims. They are serde-serializable so a web embed can
/// receive them as JSON across the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Centres the map on `center` at `zoom`.
    ///
    /// Emitted when a branch becomes active.
    SetView {
        /// Map centre target.
        center: Coordinate,
        /// Map zoom level (Leaflet scale).
        zoom: u8,
    },

    /// Fits the map viewport to `bounds`.
    ///
    /// Emitted with the padded all-branches box on init/reset, and with the
    /// padded user-plus-branch box after a geolocation fix.
    FitBounds {
        /// Viewport target, already padded.
        bounds: BoundingBox,
    },

    /// Opens the detail popup of the marker for branch `id`.
    OpenPopup {
        /// Branch whose marker popup should open.
        id: String,
    },

    /// Asks the host's geolocation provider for a single-shot position.
    ///
    /// The host must answer with exactly one `Event::LocationResolved`.
    RequestLocation {
        /// Provider options (accuracy, timeout, cache tolerance).
        options: GeolocationOptions,
    },

    /// Places (or moves) the "you are here" marker.
    ShowUserMarker {
        /// The visitor's reported position.
        position: Coordinate,
    },

    /// Removes the "you are here" marker, if present.
    RemoveUserMarker,
}
