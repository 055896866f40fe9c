//! Integration tests for `OutputRecorder`, including the panic assertions run through a live test.

use std::io::Write;

use testig::{ExitHandler, OutputRecorder, TestContext, TestDouble, assert_panics_regexp, run_test};

#[test]
fn new_recorder_has_not_exited() {
    let r = OutputRecorder::new();
    assert!(!r.exited());
    assert_eq!(r.exit_code(), None);
    assert_eq!(r.exit_string(), "did not exit");
}

#[test]
fn exit_string_after_exit() {
    let mut r = OutputRecorder::new();
    r.exit(123);

    let s = r.exit_string();
    let re = regex::Regex::new(r"^exit code 123 at \S+$").unwrap();
    assert!(re.is_match(&s), "post-exit state stringified: {s}");
}

#[test]
fn exit_panics_on_second_call() {
    let mut r = OutputRecorder::new();
    r.exit(123);

    run_test("exit_panics_on_second_call", |t| {
        assert_panics_regexp!(
            t,
            || r.exit(321),
            r"^Exit called more than once; last was: exit code 123 at \S+"
        );
    });
    assert_eq!(r.exit_code(), Some(123), "first exit wins");
}

#[test]
fn stdout_string_collects_writes() {
    let mut r = OutputRecorder::new();

    writeln!(r.stdout(), "first line").unwrap();
    write!(r.stdout(), "{} {}", "second", "line").unwrap();
    writeln!(r.stdout()).unwrap();

    assert_eq!(r.stdout_string(), "first line\nsecond line\n");
    assert_eq!(r.stderr_string(), "");
}

#[test]
fn stderr_string_collects_writes() {
    let mut r = OutputRecorder::new();

    writeln!(r.stderr(), "first line").unwrap();
    write!(r.stderr(), "{} {}", "second", "line").unwrap();
    writeln!(r.stderr()).unwrap();

    assert_eq!(r.stderr_string(), "first line\nsecond line\n");
    assert_eq!(r.stdout_string(), "");
}

/// A tiny "main" written against injected output and exit, the way code under test should be.
fn greet(args: &[&str], out: &mut impl Write, err: &mut impl Write, exit: &mut impl ExitHandler) {
    match args {
        [name] => {
            let _ = writeln!(out, "hello, {name}");
            exit.exit(0);
        }
        _ => {
            let _ = writeln!(err, "usage: greet NAME");
            exit.exit(2);
        }
    }
}

fn run_greet(args: &[&str]) -> OutputRecorder {
    let mut r = OutputRecorder::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    greet(args, &mut out, &mut err, &mut r);
    r.stdout().write_all(&out).unwrap();
    r.stderr().write_all(&err).unwrap();
    r
}

#[test]
fn injected_exit_is_recorded() {
    let mut ok = run_greet(&["ferris"]);
    assert_eq!(ok.exit_code(), Some(0));
    assert_eq!(ok.stdout_string(), "hello, ferris\n");

    let mut usage = run_greet(&[]);
    assert_eq!(usage.exit_code(), Some(2));
    assert_eq!(usage.stderr_string(), "usage: greet NAME\n");
}

#[test]
fn helper_checking_exit_code_on_double() {
    fn expect_exit(t: &mut impl TestContext, r: &OutputRecorder, code: i32) {
        match r.exit_code() {
            Some(got) if got == code => {}
            Some(got) => t.errorf(format_args!("exit code {got}, want {code}")),
            None => t.fatal(&[&"did not exit"]),
        }
    }

    let r = run_greet(&[]);

    let mut tt = TestDouble::new();
    expect_exit(&mut tt, &r, 2);
    assert!(!tt.failed());

    expect_exit(&mut tt, &r, 0);
    assert!(tt.failed());
    assert!(!tt.stopped());
    assert_eq!(tt.logs(), ["exit code 2, want 0"]);

    let mut tt = TestDouble::new();
    expect_exit(&mut tt, &OutputRecorder::new(), 0);
    assert!(tt.stopped());
    assert_eq!(tt.logs(), ["did not exit"]);
}
