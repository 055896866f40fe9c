//! Provide the capability contract that every testig test context implements.
//!
//! Helper functions written against [`TestContext`] run unmodified against an in-memory test double (for
//! testing the helper itself) or against a live test (for normal use).
//!
//! ## Notes
//!
//! - This is a “contract” crate: **no IO**, no global state, and no dependencies.
//! - Implementations provide the primitives (`log`, `logf`, `fail`, `fail_now`, `skip_now` and the two
//!   queries). The composite operations are provided methods, so every context composes them identically.

pub mod contract;

pub use contract::{TestContext, join_values};
