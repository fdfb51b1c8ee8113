//! Application layer coordinating state, events, and actions.
//!
//! This module defines the view coordinator: the layer between the host
//! runtime (web embed shim, demo harness) and the domain/resolver layers.
//! It implements the event-driven architecture that keeps the list view,
//! map view, and status line synchronized.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Map/Geo Side Effects
//!                            ↑                                  ↓
//!                            └──── Geolocation Callback ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Selection and status state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```
//! use branchfinder::{handle_event, AppState, Config, Directory, Event};
//!
//! let mut state = AppState::new(Directory::builtin(), &Config::default());
//! let (needs_render, actions) = handle_event(
//!     &mut state,
//!     &Event::BranchPicked { id: "stevenage".to_string() },
//! )?;
//! assert!(needs_render);
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), branchfinder::LocatorError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Selection, Status};
pub use state::AppState;
