//! Geolocation collaborator message types.
//!
//! This module defines the request/response protocol between the view
//! coordinator and the host's geolocation provider (the browser API in the
//! web embed). The exchange is single-shot: the coordinator emits one
//! `RequestLocation` action carrying [`GeolocationOptions`], and the host
//! answers with exactly one [`GeolocationResponse`] event.
//!
//! At most one request is outstanding at a time; the pending flag lives in
//! `AppState` and is only touched by the event handler. A fresh fix is cached
//! as a [`PositionFix`] and reused within the configured age window, so
//! repeated "use my location" clicks do not spam the provider.

use crate::geo::Coordinate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default bounded wait for a position, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default tolerance for reusing a previously obtained position, in
/// milliseconds.
pub const DEFAULT_MAX_CACHED_AGE_MS: u64 = 60_000;

/// Options forwarded to the host's geolocation provider.
///
/// Mirrors the browser `PositionOptions` shape so the embed shim can pass
/// them through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeolocationOptions {
    /// Request the most accurate position the device can provide.
    pub high_accuracy: bool,

    /// Bounded wait before the provider must answer with `Timeout`.
    pub timeout_ms: u64,

    /// Maximum age of a provider-cached position the host may return.
    pub max_cached_age_ms: u64,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_cached_age_ms: DEFAULT_MAX_CACHED_AGE_MS,
        }
    }
}

/// Why a geolocation request failed.
///
/// Each reason surfaces as distinct status text; none of them is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// The user declined the location permission prompt.
    PermissionDenied,
    /// The device could not produce a position.
    Unavailable,
    /// No position arrived within the bounded wait.
    Timeout,
}

/// The single-shot answer from the geolocation provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GeolocationResponse {
    /// The provider produced a position.
    Position {
        /// Latitude in WGS-84 degrees.
        latitude: f64,
        /// Longitude in WGS-84 degrees.
        longitude: f64,
    },

    /// The provider failed; `reason` selects the status message.
    Failed {
        /// Classified failure cause.
        reason: FailureReason,
    },
}

/// A successfully obtained position, stamped for cache-age checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    /// The reported position.
    pub coordinate: Coordinate,

    /// When the fix was obtained.
    pub obtained_at: DateTime<Utc>,
}

impl PositionFix {
    /// Stamps `coordinate` with the current time.
    #[must_use]
    pub fn now(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            obtained_at: Utc::now(),
        }
    }

    /// Returns true if the fix is younger than `max_age_ms` as of `now`.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age_ms: u64) -> bool {
        let age = now.signed_duration_since(self.obtained_at);
        age >= chrono::Duration::zero() && (age.num_milliseconds() as u64) < max_age_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn default_options_match_recommended_values() {
        let options = GeolocationOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout_ms, 10_000);
        assert_eq!(options.max_cached_age_ms, 60_000);
    }

    #[test]
    fn fix_is_fresh_within_window() {
        let fix = PositionFix::now(Coordinate::new(51.5, -0.1));
        let now = fix.obtained_at + Duration::seconds(30);
        assert!(fix.is_fresh(now, DEFAULT_MAX_CACHED_AGE_MS));
    }

    #[test]
    fn fix_is_stale_past_window() {
        let fix = PositionFix::now(Coordinate::new(51.5, -0.1));
        let now = fix.obtained_at + Duration::seconds(61);
        assert!(!fix.is_fresh(now, DEFAULT_MAX_CACHED_AGE_MS));
    }

    #[test]
    fn fix_from_the_future_is_not_fresh() {
        let fix = PositionFix::now(Coordinate::new(51.5, -0.1));
        let now = fix.obtained_at - Duration::seconds(1);
        assert!(!fix.is_fresh(now, DEFAULT_MAX_CACHED_AGE_MS));
    }

    #[test]
    fn responses_round_trip_through_host_json() {
        let json = r#"{"Failed":{"reason":"PermissionDenied"}}"#;
        let response: GeolocationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response,
            GeolocationResponse::Failed {
                reason: FailureReason::PermissionDenied
            }
        );
    }
}
