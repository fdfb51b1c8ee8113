//! Branchfinder: a headless store-locator widget core.
//!
//! Branchfinder owns the logic of a "choose your branch" widget without
//! touching the DOM or the map tiles:
//! - An immutable directory of branch records, compiled in at build time
//! - Pure resolution of postcode, nearest-by-distance, and free-text queries
//! - A view coordinator state machine keeping the card list, dropdown, map,
//!   and status line synchronized
//! - A single-shot geolocation exchange with cache reuse and an
//!   at-most-one-outstanding-request discipline
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Runtime (web embed shim, demo harness)        │  ← Events in, actions out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Selection + status
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Resolver      │   │ Geolocation   │
//! │ (ui/)         │   │ (resolver/)   │   │ (geolocation/)│
//! │ - View models │   │ - Prefix match│   │ - Options     │
//! │ - Marker specs│   │ - Nearest     │   │ - Responses   │
//! │               │   │ - Text filter │   │ - Fix cache   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Directory, Domain & Geo Layers                     │
//! │  - Branch table (directory/)                        │
//! │  - Branch model, errors (domain/)                   │
//! │  - Coordinates, haversine, bounds (geo/)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`directory`]: The immutable branch table
//! - [`domain`]: Core domain types (Branch, errors)
//! - [`geo`]: Coordinates, haversine distance, bounding boxes
//! - [`geolocation`]: Geolocation collaborator message types
//! - [`resolver`]: Pure query resolution
//! - [`ui`]: View models and marker specifications
//! - `observability`: Tracing setup (internal)
//!
//! # Initialization Flow
//!
//! 1. **Startup**: parse [`Config`] from the host's key/value configuration,
//!    optionally call `observability::init_tracing`, then [`initialize`] to
//!    build the [`AppState`] over the compiled-in directory.
//! 2. **Map setup**: place one marker per [`ui::MarkerSpec`], wire the
//!    marker-click callback to [`Event::MarkerClicked`], and fit the map to
//!    `AppState::default_map_bounds()`.
//! 3. **Event loop**: feed every dropdown/card/search/button/geolocation
//!    occurrence through [`handle_event`]; execute the returned actions in
//!    order; re-render from `AppState::compute_viewmodel()` whenever the
//!    render flag is set.
//!
//! # Example
//!
//! ```
//! use branchfinder::{handle_event, initialize, Config, Event};
//! use branchfinder::geo::Coordinate;
//!
//! let mut state = initialize(&Config::default());
//!
//! let (needs_render, actions) = handle_event(
//!     &mut state,
//!     &Event::FindNearest {
//!         query: "SG1 4AB".to_string(),
//!         map_center: Coordinate::new(51.5, 0.1),
//!     },
//! )?;
//!
//! assert!(needs_render);
//! assert!(!actions.is_empty());
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.status_line, "Nearest branch: Cheese Pizza - Stevenage");
//! # Ok::<(), branchfinder::LocatorError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Explicit context, no globals
//!
//! The directory, active selection, and geolocation bookkeeping all live in
//! [`AppState`], constructed once at startup and threaded through every
//! call. Single-instance-per-page semantics come from the host holding one
//! state value, not from module globals.
//!
//! ## Absence is not an error
//!
//! Resolver misses return `None`/empty, and geolocation failures become
//! status variants. Every query path terminates in a state transition; the
//! crate's error type only covers construction (directory validation,
//! configuration).
//!
//! ## Single-threaded, event-driven
//!
//! All transitions are synchronous. The one asynchronous boundary, the
//! geolocation request, is modeled as an action/event pair with a pending
//! flag enforcing at most one outstanding request.

pub mod app;
pub mod directory;
pub mod domain;
pub mod geo;
pub mod geolocation;
pub mod resolver;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Selection, Status};
pub use directory::Directory;
pub use domain::{Branch, LocatorError, Result};
pub use ui::LocatorViewModel;

use geolocation::GeolocationOptions;
use std::collections::BTreeMap;

/// Widget configuration parsed from the host's key/value configuration.
///
/// Configuration values are provided by the embedding page (data attributes,
/// embed options, or similar) and passed to the widget during
/// initialization.
#[derive(Debug, Clone)]
pub struct Config {
    /// Zoom level applied when centring the map on an active branch.
    ///
    /// Leaflet scale; default: 12.
    pub default_zoom: u8,

    /// Bounded wait for a geolocation answer, in milliseconds.
    ///
    /// Default: 10000 (10 seconds).
    pub geolocation_timeout_ms: u64,

    /// Maximum age of a cached position fix to reuse, in milliseconds.
    ///
    /// Default: 60000 (60 seconds).
    pub geolocation_max_age_ms: u64,

    /// Tracing level for console spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_zoom: 12,
            geolocation_timeout_ms: geolocation::DEFAULT_TIMEOUT_MS,
            geolocation_max_age_ms: geolocation::DEFAULT_MAX_CACHED_AGE_MS,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from the host's configuration map.
    ///
    /// The host provides configuration as a `BTreeMap<String, String>`
    /// during initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `default_zoom`: String → `u8` (falls back to 12 on parse error)
    /// - `geolocation_timeout_ms`: String → `u64` (falls back to 10000)
    /// - `geolocation_max_age_ms`: String → `u64` (falls back to 60000)
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use branchfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_zoom".to_string(), "14".to_string());
    /// map.insert("geolocation_timeout_ms".to_string(), "5000".to_string());
    ///
    /// let config = Config::from_host(&map);
    /// assert_eq!(config.default_zoom, 14);
    /// assert_eq!(config.geolocation_timeout_ms, 5000);
    /// ```
    #[must_use]
    pub fn from_host(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        Self {
            default_zoom: config
                .get("default_zoom")
                .and_then(|s| s.parse::<u8>().ok())
                .unwrap_or(defaults.default_zoom),
            geolocation_timeout_ms: config
                .get("geolocation_timeout_ms")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.geolocation_timeout_ms),
            geolocation_max_age_ms: config
                .get("geolocation_max_age_ms")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.geolocation_max_age_ms),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Returns the geolocation options derived from this configuration.
    ///
    /// `high_accuracy` is always requested; the widget's nearest-branch
    /// arithmetic is pointless on a coarse position.
    #[must_use]
    pub fn geolocation_options(&self) -> GeolocationOptions {
        GeolocationOptions {
            high_accuracy: true,
            timeout_ms: self.geolocation_timeout_ms,
            max_cached_age_ms: self.geolocation_max_age_ms,
        }
    }
}

/// Initializes the widget core with configuration.
///
/// Builds an [`AppState`] over the compiled-in branch directory, ready for
/// event processing: selection `Idle`, empty status, full directory visible.
///
/// # Example
///
/// ```
/// use branchfinder::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.selection.is_idle());
/// assert_eq!(state.directory.len(), 5);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing branchfinder widget core");
    AppState::new(Directory::builtin(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_recommended_collaborator_options() {
        let config = Config::default();
        assert_eq!(config.default_zoom, 12);
        let options = config.geolocation_options();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout_ms, 10_000);
        assert_eq!(options.max_cached_age_ms, 60_000);
    }

    #[test]
    fn from_host_falls_back_on_malformed_values() {
        let mut map = BTreeMap::new();
        map.insert("default_zoom".to_string(), "not-a-number".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_host(&map);
        assert_eq!(config.default_zoom, 12);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn initialize_builds_idle_state_over_builtin_directory() {
        let state = initialize(&Config::default());
        assert!(state.selection.is_idle());
        assert_eq!(state.status.to_string(), "");
        assert_eq!(state.visible_branches.len(), 5);
    }
}
