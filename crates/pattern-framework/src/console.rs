//! # Console Sink
//!
//! Observers and commands never call `println!` directly. They write through a
//! [`Console`] injected at construction, so the binary can print to standard
//! output while tests capture every line (see
//! [`RecordingConsole`](crate::mock::RecordingConsole)).

use std::io::{self, Write};

/// Line-oriented text output.
pub trait Console {
    /// Writes `line` followed by a newline, immediately.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Console backed by the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}
