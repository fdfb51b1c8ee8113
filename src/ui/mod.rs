//! Presentation-facing view models.
//!
//! The core never builds markup; it hands the host ordered, display-ready
//! view models and marker specifications and lets the templating collaborator
//! render them.
//!
//! # Organization
//!
//! - [`viewmodel`]: locator view model, cards, dropdown options, marker specs

pub mod viewmodel;

pub use viewmodel::{marker_specs, BranchCard, LocatorViewModel, MarkerSpec, PopupContent, SelectOption};
