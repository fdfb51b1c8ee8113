//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber for hosts that want the
//! core's spans and events on their console. Embeds with their own
//! subscriber simply skip [`init_tracing`]; every span in the crate degrades
//! to a no-op without one.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with a level filter and console output.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes
/// effect. Never panics if another subscriber is already installed.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
