//! In-memory test double for testing test helpers.
//!
//! ## Stopping
//!
//! A real test stops when `fail_now` or `skip_now` is called. [`TestDouble`] cannot unwind its caller, so it
//! only records that a stop was requested ([`TestDouble::stopped`]). The outer test checks that flag after
//! running the helper under test; a helper that keeps asserting past a stop is buggy.

use core::fmt::{self, Display};

use testig_core::{TestContext, join_values};

/// Settings for a [`TestDouble`].
#[derive(Debug, Clone)]
pub struct DoubleConfig {
    /// Label attached to the double's tracing events
    pub name: String,
    /// Whether every recorded log line is also emitted as a `trace` event
    pub echo_logs: bool,
}

impl Default for DoubleConfig {
    fn default() -> Self {
        Self {
            name: "test-double".to_string(),
            echo_logs: true,
        }
    }
}

impl DoubleConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tracing label
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Turn echoing of recorded lines on or off
    pub fn with_echo_logs(mut self, echo: bool) -> Self {
        self.echo_logs = echo;
        self
    }
}

/// A [`TestContext`] that records everything and stops nothing.
///
/// Use one per test of a test helper:
///
/// ```rust
/// use testig::{TestContext, TestDouble};
///
/// fn helper(t: &mut impl TestContext) {
///     t.fatal(&[&"uh-oh spaghettio!"]);
/// }
///
/// let mut tt = TestDouble::new();
/// helper(&mut tt);
///
/// assert!(tt.stopped());
/// assert!(tt.failed());
/// assert!(!tt.skipped());
/// assert_eq!(tt.logs(), ["uh-oh spaghettio!"]);
/// ```
#[derive(Debug, Default)]
pub struct TestDouble {
    logs: Vec<String>,
    failed: bool,
    skipped: bool,
    stopped: bool,
    config: DoubleConfig,
}

impl TestDouble {
    /// Create a fresh double with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh double with the given config.
    pub fn with_config(config: DoubleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Every line logged so far, in order.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Whether the test under test asked to stop (`fail_now`, `skip_now`, `fatal*` or `skip*`).
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// The settings this double was built with.
    pub fn config(&self) -> &DoubleConfig {
        &self.config
    }

    fn record(&mut self, line: String) {
        if self.config.echo_logs {
            tracing::trace!(double = %self.config.name, line = %line, "log");
        }
        self.logs.push(line);
    }

    fn stop(&mut self) {
        if !self.stopped {
            tracing::debug!(double = %self.config.name, "stop requested");
        }
        self.stopped = true;
    }
}

impl TestContext for TestDouble {
    fn log(&mut self, values: &[&dyn Display]) {
        self.record(join_values(values));
    }

    fn logf(&mut self, args: fmt::Arguments<'_>) {
        self.record(args.to_string());
    }

    fn fail(&mut self) {
        if !self.failed {
            tracing::debug!(double = %self.config.name, "marked failed");
        }
        self.failed = true;
    }

    fn fail_now(&mut self) {
        self.fail();
        self.stop();
    }

    fn failed(&self) -> bool {
        self.failed
    }

    fn skip_now(&mut self) {
        if !self.skipped {
            tracing::debug!(double = %self.config.name, "marked skipped");
        }
        self.skipped = true;
        self.stop();
    }

    fn skipped(&self) -> bool {
        self.skipped
    }
}
