//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! locator widget, along with methods for filtering, selection management,
//! and UI view model generation. It is the single source of truth for all
//! transient UI state; there are no hidden module-level globals.
//!
//! # Architecture
//!
//! `AppState` separates core data (the immutable branch [`Directory`]) from
//! derived state (the visible branch subset, the active selection, the status
//! line). Derived state is recomputed by [`AppState::apply_filter`] after
//! every transition that can affect it, and view models are computed
//! on demand from state snapshots.
//!
//! # State Components
//!
//! - **Directory**: immutable branch table, loaded once at construction
//! - **Selection**: the single active branch, or `Idle`
//! - **Status**: the human-readable status line
//! - **Filter query**: free-text filter narrowing the visible subset;
//!   orthogonal to selection
//! - **Geolocation bookkeeping**: the pending-request flag and the cached
//!   position fix

use crate::directory::Directory;
use crate::domain::Branch;
use crate::geo::BoundingBox;
use crate::geolocation::{GeolocationOptions, PositionFix};
use crate::resolver;
use crate::ui::viewmodel::{BranchCard, LocatorViewModel, SelectOption};
use crate::Config;

use super::modes::{Selection, Status};

/// Fractional padding applied to the all-branches box for the default map
/// extent.
pub(crate) const BOUNDS_PADDING: f64 = 0.25;

/// Fractional padding applied to the user-plus-branch box after a
/// geolocation fix.
pub(crate) const PAIR_BOUNDS_PADDING: f64 = 0.35;

/// Central application state container.
///
/// Holds the directory plus all transient UI state. Mutated only by the
/// event handler in response to host events; the host renders from view
/// models computed off state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable branch table; never mutated after construction.
    pub directory: Directory,

    /// The active branch, or `Idle`.
    ///
    /// Changed only by event transitions: set on successful resolution or
    /// manual pick, cleared on reset or failed resolution.
    pub selection: Selection,

    /// The current status line.
    pub status: Status,

    /// Current free-text filter query.
    ///
    /// Narrows `visible_branches` without touching `selection`; cleared on
    /// reset.
    pub filter_query: String,

    /// Branches matching the current filter, active branch first.
    ///
    /// Recomputed by `apply_filter()` after state changes. Used for
    /// rendering the card list and dropdown.
    pub visible_branches: Vec<Branch>,

    /// Zoom level used when centring the map on an active branch.
    pub default_zoom: u8,

    /// Options forwarded with every geolocation request.
    pub geolocation_options: GeolocationOptions,

    /// True while a geolocation request is outstanding.
    ///
    /// At most one request is in flight; further `LocateRequested` events
    /// are ignored until the response arrives.
    pub pending_location: bool,

    /// The most recent position fix, reused while younger than the
    /// configured cache tolerance.
    pub last_fix: Option<PositionFix>,
}

impl AppState {
    /// Creates the coordinator state over `directory` with host configuration.
    ///
    /// Starts in `Idle` with an empty status, no filter, and the full
    /// directory visible in table order.
    #[must_use]
    pub fn new(directory: Directory, config: &Config) -> Self {
        let mut state = Self {
            directory,
            selection: Selection::Idle,
            status: Status::Idle,
            filter_query: String::new(),
            visible_branches: vec![],
            default_zoom: config.default_zoom,
            geolocation_options: config.geolocation_options(),
            pending_location: false,
            last_fix: None,
        };
        state.apply_filter();
        state
    }

    /// Recomputes the visible branch subset from the filter query and
    /// selection.
    ///
    /// The subset is the directory filtered by the current query in table
    /// order; if the active branch survives the filter it is moved to the
    /// front. Filtering never clears the selection: an active branch hidden
    /// by the filter stays active (and reappears, first, once the filter
    /// admits it again).
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            query_len = self.filter_query.len(),
            active = ?self.selection.active_id()
        )
        .entered();

        let mut visible: Vec<Branch> = resolver::filter(&self.directory, &self.filter_query)
            .into_iter()
            .cloned()
            .collect();

        if let Some(active_id) = self.selection.active_id() {
            if let Some(position) = visible.iter().position(|branch| branch.id == active_id) {
                let active = visible.remove(position);
                visible.insert(0, active);
            }
        }

        self.visible_branches = visible;

        tracing::debug!(
            visible_count = self.visible_branches.len(),
            "filter applied"
        );
    }

    /// Returns a reference to the active branch record, if any.
    #[must_use]
    pub fn active_branch(&self) -> Option<&Branch> {
        self.selection
            .active_id()
            .and_then(|id| self.directory.get(id))
    }

    /// Returns the padded default map extent covering every branch.
    ///
    /// `None` only for an empty directory, in which case the host keeps the
    /// map where it is.
    #[must_use]
    pub fn default_map_bounds(&self) -> Option<BoundingBox> {
        self.directory.bounds().map(|b| b.pad(BOUNDS_PADDING))
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Transforms state into the ordered dropdown options, card list, status
    /// line, and active-id flag the presentation collaborator consumes. The
    /// view model carries no business logic, only display-ready data.
    #[must_use]
    pub fn compute_viewmodel(&self) -> LocatorViewModel {
        let active_id = self.selection.active_id();

        let options = self
            .visible_branches
            .iter()
            .map(|branch| SelectOption {
                id: branch.id.clone(),
                label: branch.area_label(),
            })
            .collect();

        let cards = self
            .visible_branches
            .iter()
            .map(|branch| BranchCard {
                id: branch.id.clone(),
                name: branch.name.clone(),
                meta: branch.area_label(),
                order_url: branch.order_url.clone(),
                directions_url: branch.directions_url(),
                is_active: active_id == Some(branch.id.as_str()),
            })
            .collect();

        LocatorViewModel {
            options,
            cards,
            status_line: self.status.to_string(),
            active_id: active_id.map(str::to_string),
            query: self.filter_query.clone(),
        }
    }
}
