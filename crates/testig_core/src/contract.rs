//! The `TestContext` trait and its message helpers.

use core::fmt::{self, Display, Write as _};

/// The operations a test-execution context supports.
///
/// Helpers should accept `&mut impl TestContext` (or `&mut dyn TestContext`) instead of a concrete
/// context type:
///
/// ```rust
/// use testig_core::TestContext;
///
/// fn check_positive(t: &mut impl TestContext, n: i64) {
///     if n <= 0 {
///         t.fatalf(format_args!("expected a positive number, got {n}"));
///     }
/// }
/// ```
///
/// Logging cannot fail, and no operation reports a status. A stop (`fail_now`, `skip_now` and the
/// composites built on them) may or may not actually end the caller's execution, depending on the
/// implementation; helpers must not make further assertions after one.
pub trait TestContext {
    /// Record the values, `Display`-rendered and joined by single spaces, as one log line.
    ///
    /// An empty list records one empty line.
    fn log(&mut self, values: &[&dyn Display]);

    /// Record one formatted log line.
    fn logf(&mut self, args: fmt::Arguments<'_>);

    /// Mark the test as failed and keep going.
    fn fail(&mut self);

    /// Mark the test as failed and stop it.
    fn fail_now(&mut self);

    /// Report whether the test has failed.
    fn failed(&self) -> bool;

    /// Mark the test as skipped and stop it.
    fn skip_now(&mut self);

    /// Report whether the test was skipped.
    fn skipped(&self) -> bool;

    /// Equivalent to [`log`](Self::log) followed by [`fail`](Self::fail).
    fn error(&mut self, values: &[&dyn Display]) {
        self.log(values);
        self.fail();
    }

    /// Equivalent to [`logf`](Self::logf) followed by [`fail`](Self::fail).
    fn errorf(&mut self, args: fmt::Arguments<'_>) {
        self.logf(args);
        self.fail();
    }

    /// Equivalent to [`log`](Self::log) followed by [`fail_now`](Self::fail_now).
    fn fatal(&mut self, values: &[&dyn Display]) {
        self.log(values);
        self.fail_now();
    }

    /// Equivalent to [`logf`](Self::logf) followed by [`fail_now`](Self::fail_now).
    fn fatalf(&mut self, args: fmt::Arguments<'_>) {
        self.logf(args);
        self.fail_now();
    }

    /// Equivalent to [`log`](Self::log) followed by [`skip_now`](Self::skip_now).
    fn skip(&mut self, values: &[&dyn Display]) {
        self.log(values);
        self.skip_now();
    }

    /// Equivalent to [`logf`](Self::logf) followed by [`skip_now`](Self::skip_now).
    fn skipf(&mut self, args: fmt::Arguments<'_>) {
        self.logf(args);
        self.skip_now();
    }
}

/// Render values the way a print-line call would: `Display` each one, separated by single spaces.
///
/// ## Examples
/// ```rust
/// use testig_core::join_values;
/// assert_eq!(join_values(&[&"answer:", &42]), "answer: 42");
/// assert_eq!(join_values(&[]), "");
/// ```
pub fn join_values(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing to String cannot fail.
        let _ = write!(&mut out, "{value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal context that counts primitive calls, to pin down how the provided methods compose.
    #[derive(Default)]
    struct Counting {
        lines: Vec<String>,
        fails: usize,
        fail_nows: usize,
        skip_nows: usize,
    }

    impl TestContext for Counting {
        fn log(&mut self, values: &[&dyn Display]) {
            self.lines.push(join_values(values));
        }

        fn logf(&mut self, args: fmt::Arguments<'_>) {
            self.lines.push(args.to_string());
        }

        fn fail(&mut self) {
            self.fails += 1;
        }

        fn fail_now(&mut self) {
            self.fail_nows += 1;
        }

        fn failed(&self) -> bool {
            self.fails + self.fail_nows > 0
        }

        fn skip_now(&mut self) {
            self.skip_nows += 1;
        }

        fn skipped(&self) -> bool {
            self.skip_nows > 0
        }
    }

    #[test]
    fn test_join_values_spaces() {
        assert_eq!(join_values(&[&"a", &1, &'c', &2.5]), "a 1 c 2.5");
    }

    #[test]
    fn test_join_values_single() {
        assert_eq!(join_values(&[&"alone"]), "alone");
    }

    #[test]
    fn test_join_values_keeps_inner_spaces() {
        assert_eq!(join_values(&[&"two words", &""]), "two words ");
    }

    #[test]
    fn test_error_is_log_then_fail() {
        let mut t = Counting::default();
        t.error(&[&"bad", &7]);
        assert_eq!(t.lines, vec!["bad 7"]);
        assert_eq!((t.fails, t.fail_nows, t.skip_nows), (1, 0, 0));
    }

    #[test]
    fn test_errorf_is_logf_then_fail() {
        let mut t = Counting::default();
        t.errorf(format_args!("bad {}", 7));
        assert_eq!(t.lines, vec!["bad 7"]);
        assert_eq!((t.fails, t.fail_nows, t.skip_nows), (1, 0, 0));
    }

    #[test]
    fn test_fatal_is_log_then_fail_now() {
        let mut t = Counting::default();
        t.fatal(&[&"boom"]);
        t.fatalf(format_args!("boom {}", 2));
        assert_eq!(t.lines, vec!["boom", "boom 2"]);
        assert_eq!((t.fails, t.fail_nows, t.skip_nows), (0, 2, 0));
    }

    #[test]
    fn test_skip_is_log_then_skip_now() {
        let mut t = Counting::default();
        t.skip(&[]);
        t.skipf(format_args!("later"));
        assert_eq!(t.lines, vec!["", "later"]);
        assert_eq!((t.fails, t.fail_nows, t.skip_nows), (0, 0, 2));
        assert!(t.skipped());
        assert!(!t.failed());
    }

    #[test]
    fn test_contract_is_object_safe() {
        let mut t = Counting::default();
        let ctx: &mut dyn TestContext = &mut t;
        ctx.error(&[&"via dyn"]);
        assert!(ctx.failed());
    }
}
