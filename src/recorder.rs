//! Recording of program output and exit status.
//!
//! Code that prints and exits is hard to test as-is. Written against an [`ExitHandler`] and a pair of
//! `io::Write` targets instead, it can be handed an [`OutputRecorder`] in tests and [`ProcessExit`] plus the
//! real streams in production.

use std::io::{self, BufWriter, Write};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::{TestigError, TestigResult, raise};

/// Something that ends the program with an exit code.
pub trait ExitHandler {
    /// End the program (or record that it would have ended) with `code`.
    fn exit(&mut self, code: i32);
}

/// Exits the real process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl ExitHandler for ProcessExit {
    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExitRecord {
    code: i32,
    at: DateTime<Utc>,
}

/// Captures standard output, standard error and the exit code of the code under test.
///
/// Exit is only *recorded*; execution continues afterwards. Code under test must therefore not assume an
/// exit ends the program, and a second exit on the same recorder is treated as a bug.
#[derive(Debug)]
pub struct OutputRecorder {
    stdout: BufWriter<Vec<u8>>,
    stderr: BufWriter<Vec<u8>>,
    exit: Option<ExitRecord>,
}

impl Default for OutputRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRecorder {
    /// Create a recorder with empty channels and no exit.
    pub fn new() -> Self {
        Self {
            stdout: BufWriter::new(Vec::new()),
            stderr: BufWriter::new(Vec::new()),
            exit: None,
        }
    }

    /// Writer standing in for standard output.
    pub fn stdout(&mut self) -> &mut impl Write {
        &mut self.stdout
    }

    /// Writer standing in for standard error.
    pub fn stderr(&mut self) -> &mut impl Write {
        &mut self.stderr
    }

    /// Everything written to [`stdout`](Self::stdout) so far.
    pub fn stdout_string(&mut self) -> String {
        drain_text(&mut self.stdout)
    }

    /// Everything written to [`stderr`](Self::stderr) so far.
    pub fn stderr_string(&mut self) -> String {
        drain_text(&mut self.stderr)
    }

    /// Record an exit, failing if one was already recorded.
    pub fn try_exit(&mut self, code: i32) -> TestigResult<()> {
        if self.exit.is_some() {
            return Err(TestigError::ExitCalledTwice {
                previous: self.exit_string(),
            });
        }
        tracing::debug!(code, "exit recorded");
        self.exit = Some(ExitRecord { code, at: Utc::now() });
        Ok(())
    }

    /// Whether an exit has been recorded.
    pub fn exited(&self) -> bool {
        self.exit.is_some()
    }

    /// The recorded exit code, if any.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit.map(|e| e.code)
    }

    /// When the exit was recorded, if it was.
    pub fn exit_time(&self) -> Option<DateTime<Utc>> {
        self.exit.map(|e| e.at)
    }

    /// Human-readable exit status: `did not exit` or `exit code N at <RFC 3339 time>`.
    pub fn exit_string(&self) -> String {
        match self.exit {
            None => "did not exit".to_string(),
            Some(ExitRecord { code, at }) => {
                format!("exit code {} at {}", code, at.to_rfc3339_opts(SecondsFormat::Micros, true))
            }
        }
    }
}

impl ExitHandler for OutputRecorder {
    /// Record an exit.
    ///
    /// # Panics
    ///
    /// Panics if an exit was already recorded.
    #[track_caller]
    fn exit(&mut self, code: i32) {
        if let Err(err) = self.try_exit(code) {
            raise(err);
        }
    }
}

fn drain_text(writer: &mut BufWriter<Vec<u8>>) -> String {
    // Flushing into a Vec cannot fail.
    let _: io::Result<()> = writer.flush();
    String::from_utf8_lossy(writer.get_ref()).into_owned()
}
