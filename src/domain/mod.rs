//! Domain layer for the branchfinder core.
//!
//! This module contains the core domain types for the widget, independent of
//! map-widget APIs or host-page concerns. It follows domain-driven design
//! principles by keeping business rules isolated from external dependencies.
//!
//! # Organization
//!
//! - [`branch`]: Branch record model and display helpers
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use branchfinder::domain::Branch;
//! use branchfinder::Directory;
//!
//! fn first_branch(directory: &Directory) -> Option<&Branch> {
//!     directory.iter().next()
//! }
//! ```

pub mod branch;
pub mod error;

pub use branch::Branch;
pub use error::{LocatorError, Result};
