//! Assertions about panicking code.
//!
//! Both helpers run a procedure, capture whatever it panics with, and report through a [`TestContext`]:
//!
//! - no panic at all is a terminal failure (`fatal`): there is nothing left to inspect;
//! - a panic with the wrong text is a continuing failure (`error`): the caller may still want to look around,
//!   and must stop explicitly if it needs to;
//! - a matching panic reports nothing.
//!
//! Capturing leaves the process panic hook alone, so even an expected panic prints its usual
//! `thread '…' panicked at …` line to stderr. libtest captures it like any other output; it only shows up for
//! failing tests or under `--nocapture`.
//!
//! The macro forms take an optional trailing message in `format!` syntax:
//!
//! ```rust
//! use testig::{TestContext, TestDouble, assert_panics_with};
//!
//! let mut tt = TestDouble::new();
//! assert_panics_with!(&mut tt, || panic!("oh no"), "oh no", "got a scary panic");
//! assert!(!tt.failed());
//!
//! assert_panics_with!(&mut tt, || (), "any panic", "case {}", 2);
//! assert!(tt.failed());
//! ```

use core::fmt;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use regex::Regex;
use testig_core::TestContext;

use crate::errors::{TestigError, TestigResult, raise};
use crate::live::is_stop_signal;

/// Report text used when the procedure returns normally.
pub const NO_PANIC_MESSAGE: &str = "Function did not panic.";

/// Text used for panic payloads that are neither `String` nor `&str`.
pub const OPAQUE_PAYLOAD: &str = "<non-string panic payload>";

/// What a captured panic message must look like.
#[derive(Debug, Clone)]
pub enum PanicMatcher {
    /// The message must equal this text exactly.
    Exact(String),
    /// The message must contain a match of this pattern.
    Regexp(Regex),
}

impl PanicMatcher {
    /// Matcher requiring the message to equal `expected`.
    pub fn exact(expected: impl Into<String>) -> Self {
        PanicMatcher::Exact(expected.into())
    }

    /// Compile `pattern` into a matcher.
    pub fn regexp(pattern: &str) -> TestigResult<Self> {
        Regex::new(pattern)
            .map(PanicMatcher::Regexp)
            .map_err(|source| TestigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Whether `message` satisfies this matcher.
    pub fn matches(&self, message: &str) -> bool {
        match self {
            PanicMatcher::Exact(expected) => message == expected,
            PanicMatcher::Regexp(re) => re.is_match(message),
        }
    }

    /// The "expected" field of a mismatch report.
    pub fn describe(&self) -> String {
        match self {
            PanicMatcher::Exact(expected) => expected.clone(),
            PanicMatcher::Regexp(re) => format!("Regexp /{}/", re.as_str()),
        }
    }
}

/// Render a panic payload as text.
fn payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        OPAQUE_PAYLOAD.to_string()
    }
}

/// Run `f` and return its panic message, or `None` if it returned normally.
///
/// A [`LiveTest`](crate::LiveTest) stop raised inside `f` is not a panic of `f`'s own: it is passed on
/// untouched so the enclosing test still stops.
pub fn capture_panic<F: FnOnce()>(f: F) -> Option<String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => None,
        Err(payload) if is_stop_signal(&*payload) => panic::resume_unwind(payload),
        Err(payload) => Some(payload_text(&*payload)),
    }
}

fn with_messages(report: &str, msg: Option<fmt::Arguments<'_>>) -> String {
    match msg {
        Some(msg) => format!("{report}\nMessages: {msg}"),
        None => report.to_string(),
    }
}

/// Assert that `f` panics with a message accepted by `matcher`.
///
/// Returns `true` on success. On failure the report (plus `msg`, if any) is logged through `t` as one line.
#[tracing::instrument(skip_all, fields(expected = %matcher.describe()))]
pub fn assert_panics<T, F>(t: &mut T, f: F, matcher: &PanicMatcher, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: TestContext + ?Sized,
    F: FnOnce(),
{
    match capture_panic(f) {
        None => {
            tracing::debug!("procedure returned without panicking");
            let report = with_messages(NO_PANIC_MESSAGE, msg);
            t.fatalf(format_args!("{report}"));
            false
        }
        Some(got) if matcher.matches(&got) => true,
        Some(got) => {
            tracing::debug!(actual = %got, "panic message did not match");
            let report = format!(
                "Panic not as expected:\n  expected: {}\n    actual: {}",
                matcher.describe(),
                got
            );
            t.errorf(format_args!("{}", with_messages(&report, msg)));
            false
        }
    }
}

/// Assert that `f` panics with exactly `expected`.
pub fn assert_panics_with<T, F>(t: &mut T, f: F, expected: &str, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: TestContext + ?Sized,
    F: FnOnce(),
{
    assert_panics(t, f, &PanicMatcher::exact(expected), msg)
}

/// Assert that `f` panics with a message matching the regular expression `pattern`.
///
/// # Panics
///
/// Panics before `f` is run if `pattern` does not compile. That is a bug in the test, not a test failure.
#[track_caller]
pub fn assert_panics_regexp<T, F>(t: &mut T, f: F, pattern: &str, msg: Option<fmt::Arguments<'_>>) -> bool
where
    T: TestContext + ?Sized,
    F: FnOnce(),
{
    let matcher = match PanicMatcher::regexp(pattern) {
        Ok(matcher) => matcher,
        Err(err) => raise(err),
    };
    assert_panics(t, f, &matcher, msg)
}

/// Assert that a procedure panics with an exact message.
///
/// `assert_panics_with!(t, f, expected)` or `assert_panics_with!(t, f, expected, "fmt", args...)`.
#[macro_export]
macro_rules! assert_panics_with {
    ($t:expr, $f:expr, $expected:expr $(,)?) => {
        $crate::panics::assert_panics_with($t, $f, $expected, ::core::option::Option::None)
    };
    ($t:expr, $f:expr, $expected:expr, $($msg:tt)+) => {
        $crate::panics::assert_panics_with(
            $t,
            $f,
            $expected,
            ::core::option::Option::Some(::core::format_args!($($msg)+)),
        )
    };
}

/// Assert that a procedure panics with a message matching a regular expression.
///
/// `assert_panics_regexp!(t, f, pattern)` or `assert_panics_regexp!(t, f, pattern, "fmt", args...)`.
#[macro_export]
macro_rules! assert_panics_regexp {
    ($t:expr, $f:expr, $pattern:expr $(,)?) => {
        $crate::panics::assert_panics_regexp($t, $f, $pattern, ::core::option::Option::None)
    };
    ($t:expr, $f:expr, $pattern:expr, $($msg:tt)+) => {
        $crate::panics::assert_panics_regexp(
            $t,
            $f,
            $pattern,
            ::core::option::Option::Some(::core::format_args!($($msg)+)),
        )
    };
}
