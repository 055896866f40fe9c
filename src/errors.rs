//! Usage and configuration errors.
//!
//! Assertion outcomes never show up here: those are reported through the [`TestContext`] the helper was
//! given. `TestigError` covers mistakes in the *test code itself* (a pattern that does not compile, an exit
//! recorded twice). The panicking entry points raise them as faults via [`raise`]; the `try_*` entry points
//! return them.
//!
//! [`TestContext`]: crate::TestContext

use core::fmt::Display;

use thiserror::Error;

/// Errors caused by misusing the harness.
#[derive(Debug, Error)]
pub enum TestigError {
    #[error("invalid panic pattern /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Exit called more than once; last was: {previous}")]
    ExitCalledTwice { previous: String },
}

/// Convenience alias for fallible harness operations.
pub type TestigResult<T> = Result<T, TestigError>;

/// Raise a usage error as a fault (implemented as a panic) with its `Display` text.
#[cold]
#[track_caller]
pub fn raise(err: impl Display) -> ! {
    panic!("{err}");
}
