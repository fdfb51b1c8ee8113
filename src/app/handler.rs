//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and geolocation callbacks, translating them into state changes and action
//! sequences for the host runtime. It is the primary control flow coordinator
//! for the widget: every external occurrence enters here, and every map or
//! geolocation side effect leaves here.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (dropdown, cards, search box, map markers,
//!    geolocation callback)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods and the pure resolver
//! 4. Actions are collected and returned for execution
//!
//! # Failure semantics
//!
//! Geolocation denial/timeout and "no directory match" are both non-fatal:
//! they terminate in a status transition, never an error to the caller. A
//! manual pick of an unknown id is a silent no-op.

use crate::domain::error::Result;
use crate::geo::{BoundingBox, Coordinate};
use crate::geolocation::{FailureReason, GeolocationResponse, PositionFix};
use crate::resolver;
use serde::{Deserialize, Serialize};

use super::modes::{Selection, Status};
use super::state::PAIR_BOUNDS_PADDING;
use super::{Action, AppState};

/// Events triggered by user input or the geolocation collaborator.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them sequentially, ensuring
/// deterministic transitions. Events are serde-serializable so a web embed
/// can deliver them as JSON across the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The visitor picked a branch from the dropdown or card list.
    BranchPicked {
        /// Id of the picked branch; unknown ids are ignored.
        id: String,
    },

    /// The visitor clicked a branch marker on the map.
    ///
    /// Identical transition to [`Event::BranchPicked`]; kept separate so the
    /// host bridge stays one-to-one with collaborator callbacks.
    MarkerClicked {
        /// Id of the clicked marker's branch.
        id: String,
    },

    /// The search box text changed.
    ///
    /// Narrows the displayed subset only; the active selection is untouched
    /// (filtering and highlighting are orthogonal).
    FilterChanged {
        /// Current search box contents.
        query: String,
    },

    /// The "find nearest" button was pressed.
    ///
    /// A non-empty query resolves by outward-code prefix; an empty query
    /// resolves by distance from the map's current centre.
    FindNearest {
        /// Current search box contents, treated as postcode input.
        query: String,
        /// The map widget's current centre.
        map_center: Coordinate,
    },

    /// The "use my location" button was pressed.
    ///
    /// Ignored while a request is outstanding; answered from the cached fix
    /// when it is still fresh; otherwise emits `Action::RequestLocation`.
    LocateRequested,

    /// The single-shot geolocation callback fired.
    LocationResolved {
        /// Position or classified failure from the provider.
        response: GeolocationResponse,
    },

    /// The reset button was pressed: clear query, selection, status, and the
    /// user marker, and refit the map to all branches.
    Reset,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// Returns `(needs_render, actions)`: the flag tells the host whether the
/// list/dropdown/status views must re-render, and the actions are map and
/// geolocation commands to run in order.
///
/// # Errors
///
/// No transition fails today; the `Result` is the seam for host bridge
/// failures, matching the rest of the crate's signatures.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::BranchPicked { id } | Event::MarkerClicked { id } => {
            match activate(state, id, None) {
                Some(actions) => Ok((true, actions)),
                None => {
                    tracing::debug!(id = %id, "ignoring selection of unknown branch");
                    Ok((false, vec![]))
                }
            }
        }
        Event::FilterChanged { query } => {
            state.filter_query = query.clone();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::FindNearest { query, map_center } => {
            if query.trim().is_empty() {
                // No postcode typed: fall back to distance from the map's
                // current view.
                let found = resolver::nearest(&state.directory, *map_center)
                    .map(|m| m.branch.id.clone());
                match found {
                    Some(id) => {
                        let actions = activate(state, &id, None).unwrap_or_default();
                        Ok((true, actions))
                    }
                    None => Ok((false, vec![])),
                }
            } else {
                let matched =
                    resolver::match_postal_prefix(&state.directory, query).map(|b| b.id.clone());
                match matched {
                    Some(id) => {
                        let actions = activate(state, &id, None).unwrap_or_default();
                        Ok((true, actions))
                    }
                    None => Ok((true, enter_no_match(state))),
                }
            }
        }
        Event::LocateRequested => {
            if state.pending_location {
                tracing::debug!("geolocation request already outstanding, ignoring");
                return Ok((false, vec![]));
            }

            let fresh_fix = state.last_fix.filter(|fix| {
                fix.is_fresh(chrono::Utc::now(), state.geolocation_options.max_cached_age_ms)
            });

            if let Some(fix) = fresh_fix {
                tracing::debug!("reusing cached position fix");
                let actions = resolve_located(state, fix.coordinate);
                Ok((true, actions))
            } else {
                state.pending_location = true;
                state.status = Status::Locating;
                Ok((
                    true,
                    vec![Action::RequestLocation {
                        options: state.geolocation_options,
                    }],
                ))
            }
        }
        Event::LocationResolved { response } => {
            state.pending_location = false;

            match response {
                GeolocationResponse::Position {
                    latitude,
                    longitude,
                } => {
                    let position = Coordinate::new(*latitude, *longitude);
                    state.last_fix = Some(PositionFix::now(position));
                    let actions = resolve_located(state, position);
                    Ok((true, actions))
                }
                GeolocationResponse::Failed { reason } => {
                    tracing::debug!(reason = ?reason, "geolocation failed");
                    state.status = match reason {
                        FailureReason::PermissionDenied => Status::PermissionDenied,
                        FailureReason::Unavailable => Status::PositionUnavailable,
                        FailureReason::Timeout => Status::LocationTimeout,
                    };
                    // Selection is deliberately untouched: a failed request
                    // never disturbs whatever was highlighted before it.
                    Ok((true, vec![]))
                }
            }
        }
        Event::Reset => {
            state.filter_query.clear();
            state.selection = Selection::Idle;
            state.status = Status::Idle;
            state.apply_filter();

            let mut actions = vec![Action::RemoveUserMarker];
            if let Some(bounds) = state.default_map_bounds() {
                actions.push(Action::FitBounds { bounds });
            }
            Ok((true, actions))
        }
    }
}

/// Activates `id`: sets the selection and status, rebuilds the visible list
/// active-first, and returns the map focus actions.
///
/// Entering `Active` consumes any query text: the displayed list becomes the
/// full directory with the active record first, so a postcode left in the
/// search box never hides the branch it just resolved to.
///
/// Returns `None` for an id absent from the directory (the caller treats
/// that as a no-op).
fn activate(state: &mut AppState, id: &str, distance_km: Option<f64>) -> Option<Vec<Action>> {
    let branch = state.directory.get(id)?;
    let center = branch.coordinates;
    let name = branch.name.clone();

    tracing::debug!(branch_id = %id, branch_name = %name, "branch activated");

    state.selection = Selection::Active { id: id.to_string() };
    state.status = Status::Nearest {
        name,
        distance_km,
    };
    state.filter_query.clear();
    state.apply_filter();

    Some(vec![
        Action::SetView {
            center,
            zoom: state.default_zoom,
        },
        Action::OpenPopup { id: id.to_string() },
    ])
}

/// Transition into `Idle` with a distinguishable "not found" status: list
/// reverts to unfiltered table order and the map refits to all branches.
fn enter_no_match(state: &mut AppState) -> Vec<Action> {
    state.selection = Selection::Idle;
    state.status = Status::NoMatch;
    state.filter_query.clear();
    state.apply_filter();

    match state.default_map_bounds() {
        Some(bounds) => vec![Action::FitBounds { bounds }],
        None => vec![],
    }
}

/// Resolves a visitor position: places the user marker, frames the
/// user-plus-branch pair, and activates the nearest branch with its distance.
fn resolve_located(state: &mut AppState, position: Coordinate) -> Vec<Action> {
    let mut actions = vec![Action::ShowUserMarker { position }];

    let found = resolver::nearest(&state.directory, position)
        .map(|m| (m.branch.id.clone(), m.branch.coordinates, m.distance_km));

    match found {
        Some((id, branch_coordinates, distance_km)) => {
            if let Some(pair) = BoundingBox::from_points([position, branch_coordinates]) {
                actions.push(Action::FitBounds {
                    bounds: pair.pad(PAIR_BOUNDS_PADDING),
                });
            }
            if let Some(focus) = activate(state, &id, Some(distance_km)) {
                actions.extend(focus);
            }
        }
        None => {
            state.status = Status::NoMatch;
        }
    }

    actions
}

/// Short event label for tracing spans.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::BranchPicked { .. } => "BranchPicked",
        Event::MarkerClicked { .. } => "MarkerClicked",
        Event::FilterChanged { .. } => "FilterChanged",
        Event::FindNearest { .. } => "FindNearest",
        Event::LocateRequested => "LocateRequested",
        Event::LocationResolved { .. } => "LocationResolved",
        Event::Reset => "Reset",
    }
}
