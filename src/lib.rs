#![forbid(unsafe_code)]
//! Helpers for testing test helpers.
//!
//! A test helper (a function that takes a test context and asserts something) is itself code worth testing,
//! but a real failing test cannot be observed from the inside. testig splits the problem along one trait:
//!
//! - [`TestContext`]: what a helper may do with its context (log, fail, skip, stop, query).
//! - [`TestDouble`]: an in-memory context that records all of it, for testing the helper.
//! - [`LiveTest`] / [`run_test`]: the same trait over Rust's test harness, for using the helper.
//!
//! On top of that sit the panic assertions ([`assert_panics_with!`], [`assert_panics_regexp!`]) and an
//! [`OutputRecorder`] for code that prints and exits.
//!
//! ```rust
//! use testig::{TestContext, TestDouble};
//!
//! fn awesome_testing_helper(t: &mut impl TestContext, deterministic_failure: bool) {
//!     if deterministic_failure {
//!         t.fatal(&[&"uh-oh spaghettio!"]);
//!     } else {
//!         t.log(&[&"Things are looking up!"]);
//!     }
//! }
//!
//! let mut tt = TestDouble::new();
//! awesome_testing_helper(&mut tt, true);
//!
//! assert!(tt.stopped());
//! assert!(tt.failed());
//! assert!(!tt.skipped());
//! assert_eq!(tt.logs(), ["uh-oh spaghettio!"]);
//! ```
//!
//! ## Panic Policy
//!
//! - Assertion outcomes are always reported through the context, never raised.
//! - Mistakes in the test code itself (a regular expression that does not compile, a second recorded exit)
//!   are raised as panics via [`errors::raise`]; `try_*` variants return [`TestigError`] instead.
//! - Production code here does not `unwrap`/`expect`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod double;
pub mod errors;
pub mod live;
pub mod logging;
pub mod panics;
pub mod recorder;

pub use testig_core::{TestContext, join_values};

pub use double::{DoubleConfig, TestDouble};
pub use errors::{TestigError, TestigResult};
pub use live::{LiveTest, run_test};
pub use logging::init_tracing;
pub use panics::{PanicMatcher, assert_panics, assert_panics_regexp, assert_panics_with, capture_panic};
pub use recorder::{ExitHandler, OutputRecorder, ProcessExit};
