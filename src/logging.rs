//! Structured logging setup for test suites.
//!
//! The harness itself only emits `tracing` events. Call [`init_tracing`] at the top of a test to see them;
//! output goes through libtest's capture, so it only shows up for failing tests (or with `--nocapture`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `TESTIG_LOG=testig=trace`.
pub const LOG_ENV_VAR: &str = "TESTIG_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a fmt subscriber filtered by [`LOG_ENV_VAR`].
///
/// Safe to call from every test: only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with_test_writer()
        .try_init();
}
