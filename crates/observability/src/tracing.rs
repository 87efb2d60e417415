//! Tracing subscriber configuration.
//!
//! The library crates emit plain `tracing` events (data-quality warnings on
//! catalog load, unreachable-category rejections); this installs the
//! subscriber that makes them visible.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// JSON lines, `RUST_LOG`-driven filtering, `info` by default. Calling this
/// when a subscriber is already installed is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
