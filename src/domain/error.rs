//! Error types for the branchfinder core.
//!
//! This module defines the centralized error type [`LocatorError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that "no branch matched" is deliberately *not* an error: resolver absence
//! is a regular return value ([`Option`]), and geolocation failures surface as
//! status text through the view coordinator. The variants here cover conditions
//! that prevent the widget from being constructed at all.

use thiserror::Error;

/// The main error type for branchfinder operations.
///
/// This enum consolidates the error conditions that can occur while building the
/// widget core: an invalid branch directory or malformed host configuration.
/// Runtime queries never produce these; every user-facing query path terminates
/// in a status string instead.
///
/// # Examples
///
/// ```
/// use branchfinder::LocatorError;
///
/// fn validate_config() -> Result<(), LocatorError> {
///     Err(LocatorError::Config("missing required field".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum LocatorError {
    /// The branch directory failed validation.
    ///
    /// Occurs when the directory is constructed with records that violate its
    /// invariants, such as a duplicate branch id. The string names the offending
    /// record.
    #[error("Directory error: {0}")]
    Directory(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for branchfinder operations.
///
/// This is a type alias for `std::result::Result<T, LocatorError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, LocatorError>;
