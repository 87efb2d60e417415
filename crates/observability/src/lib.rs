//! Process-wide observability setup (tracing/logging).

/// Tracing configuration (filters, format).
pub mod tracing;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}
