//! [`TestContext`] on top of Rust's own test harness.
//!
//! libtest has no per-test context object, so [`run_test`] makes one: it runs a test body against a
//! [`LiveTest`] and translates the outcome back into what libtest understands (a panic fails the test,
//! returning passes it). Unlike [`TestDouble`](crate::TestDouble), a `LiveTest` really stops: `fail_now` and
//! `skip_now` unwind out of the body.

use core::fmt::{self, Display};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use testig_core::{TestContext, join_values};

/// Unwind payload used to leave a test body early. Never escapes [`run_test`].
pub(crate) struct StopSignal;

/// Whether an unwind payload is a [`LiveTest`] stop rather than a real panic.
pub(crate) fn is_stop_signal(payload: &(dyn Any + Send)) -> bool {
    payload.is::<StopSignal>()
}

/// The context handed to a test body by [`run_test`].
#[derive(Debug)]
pub struct LiveTest {
    name: String,
    logs: Vec<String>,
    failed: bool,
    skipped: bool,
}

impl LiveTest {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            logs: Vec::new(),
            failed: false,
            skipped: false,
        }
    }

    /// The name given to [`run_test`].
    pub fn name(&self) -> &str {
        &self.name
    }

    fn record(&mut self, line: String) {
        println!("    {}: {}", self.name, line);
        self.logs.push(line);
    }

    fn stop(&self) -> ! {
        tracing::debug!(test = %self.name, failed = self.failed, skipped = self.skipped, "stopping test body");
        // `resume_unwind` skips the panic hook, so a stop prints nothing on its own.
        panic::resume_unwind(Box::new(StopSignal));
    }
}

impl TestContext for LiveTest {
    fn log(&mut self, values: &[&dyn Display]) {
        self.record(join_values(values));
    }

    fn logf(&mut self, args: fmt::Arguments<'_>) {
        self.record(args.to_string());
    }

    fn fail(&mut self) {
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
        self.skipped = true;
        self.stop();
    }

    fn skipped(&self) -> bool {
        self.skipped
    }
}

/// Run `body` as a test named `name`, inside an ordinary `#[test]`.
///
/// # Panics
///
/// Panics (failing the enclosing `#[test]`) if the body failed through the context, and re-raises any
/// panic the body raised on its own. A skipped body returns normally.
///
/// ```rust
/// use testig::{TestContext, run_test};
///
/// run_test("arithmetic", |t| {
///     if 2 + 2 != 4 {
///         t.fatal(&[&"math is broken"]);
///     }
///     t.log(&[&"all good"]);
/// });
/// ```
pub fn run_test<F>(name: &str, body: F)
where
    F: FnOnce(&mut LiveTest),
{
    let mut t = LiveTest::new(name);
    let span = tracing::debug_span!("run_test", test = %name);
    let _enter = span.enter();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(&mut t)));
    if let Err(payload) = outcome {
        if !is_stop_signal(&*payload) {
            panic::resume_unwind(payload);
        }
    }

    if t.failed {
        let mut report = format!("test `{}` failed", t.name);
        for line in &t.logs {
            report.push_str("\n    ");
            report.push_str(line);
        }
        panic!("{report}");
    }
    if t.skipped {
        println!("--- SKIP: {}", t.name);
    }
}
