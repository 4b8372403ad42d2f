//! # Mock Framework & Testing Guide
//!
//! Test doubles for the two seams of the framework: observers and consoles.
//! They are plain in-memory types, so tests stay fast and deterministic.
//!
//! | Double | Stands in for | Use it to |
//! |--------|---------------|-----------|
//! | [`MockObserver`] | any [`Observer`] | assert how often and with what a subject notifies, inject failures |
//! | [`RecordingConsole`] | [`StdoutConsole`](crate::StdoutConsole) | assert the exact lines a scenario prints |
//! | [`BrokenConsole`] | any [`Console`] | exercise the I/O failure path |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Subject Logic Test (Pure Mock)</b></summary>
//!
//! **When to use**: checking that a subject notifies at the right time, without
//! any real observer.
//!
//! ```rust
//! use pattern_framework::mock::MockObserver;
//! use pattern_framework::ObserverRegistry;
//! use std::rc::Rc;
//!
//! struct Door { open: bool, registry: ObserverRegistry<Door> }
//!
//! let mock = Rc::new(MockObserver::with_snapshot(|door: &Door| door.open));
//! mock.expect_update().return_ok();
//!
//! let mut door = Door { open: false, registry: ObserverRegistry::new() };
//! door.registry.add(mock.clone());
//! door.open = true;
//! door.registry.notify(&door).unwrap();
//!
//! assert_eq!(mock.calls(), vec![true]);
//! mock.verify();
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Transcript Test</b></summary>
//!
//! **When to use**: checking console output of real observers and commands.
//! Hand a [`RecordingConsole`] to the code under test, keep a clone, and compare
//! [`RecordingConsole::lines`] against the expected transcript.
//! </details>
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use pattern_framework::mock::MockObserver;
//! use pattern_framework::{NotifyError, Observer};
//!
//! let mock = MockObserver::<str>::new();
//! mock.expect_update().return_err(NotifyError::Rejected("busy".into()));
//!
//! assert!(matches!(mock.update("ping"), Err(NotifyError::Rejected(_))));
//! mock.verify();
//! ```

use crate::console::Console;
use crate::error::NotifyError;
use crate::observer::Observer;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::rc::Rc;

// =============================================================================
// MOCK OBSERVER
// =============================================================================

/// An observer with expectation tracking for fluent testing.
///
/// Every `update` consumes one expectation, in the order they were declared, and
/// records a snapshot of the subject taken by the closure given to
/// [`MockObserver::with_snapshot`]. An `update` with no expectation left panics.
///
/// # Example
/// ```ignore
/// let mock = Rc::new(MockObserver::with_snapshot(|o: &Order| o.status().map(str::to_owned)));
/// mock.expect_update().return_ok();
///
/// order.add_observer(mock.clone());
/// order.set_status("Placed")?;
///
/// assert_eq!(mock.calls(), vec![Some("Placed".to_string())]);
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockObserver<S: ?Sized, T = ()> {
    snapshot: Box<dyn Fn(&S) -> T>,
    calls: RefCell<Vec<T>>,
    expectations: RefCell<VecDeque<Result<(), NotifyError>>>,
}

impl<S: ?Sized> MockObserver<S> {
    /// Creates a mock that records nothing but the number of calls.
    pub fn new() -> Self {
        Self::with_snapshot(|_| ())
    }
}

impl<S: ?Sized> Default for MockObserver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized, T> MockObserver<S, T> {
    /// Creates a mock that records `snapshot(subject)` on every update.
    pub fn with_snapshot(snapshot: impl Fn(&S) -> T + 'static) -> Self {
        Self {
            snapshot: Box::new(snapshot),
            calls: RefCell::new(Vec::new()),
            expectations: RefCell::new(VecDeque::new()),
        }
    }

    /// Expects one more `update` call.
    pub fn expect_update(&self) -> UpdateExpectationBuilder<'_> {
        UpdateExpectationBuilder {
            expectations: &self.expectations,
        }
    }

    /// Snapshots recorded so far, oldest first.
    pub fn calls(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.borrow().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<S: ?Sized, T> Observer<S> for MockObserver<S, T> {
    fn update(&self, subject: &S) -> Result<(), NotifyError> {
        let Some(response) = self.expectations.borrow_mut().pop_front() else {
            panic!("Unexpected update: no expectation left");
        };
        self.calls.borrow_mut().push((self.snapshot)(subject));
        response
    }
}

impl<S: ?Sized, T> fmt::Debug for MockObserver<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockObserver")
            .field("calls", &self.calls.borrow().len())
            .field("expectations", &self.expectations.borrow().len())
            .finish()
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<'a> {
    expectations: &'a RefCell<VecDeque<Result<(), NotifyError>>>,
}

impl UpdateExpectationBuilder<'_> {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        self.expectations.borrow_mut().push_back(Ok(()));
    }

    /// Sets the expectation to fail with `error`.
    pub fn return_err(self, error: NotifyError) {
        self.expectations.borrow_mut().push_back(Err(error));
    }
}

// =============================================================================
// CONSOLES
// =============================================================================

/// A console that keeps every line in memory.
///
/// Clones share the same buffer: give one clone to the code under test and read
/// the lines back through another.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// All lines joined as they would appear on a terminal.
    pub fn transcript(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }
}

impl Console for RecordingConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

/// A console whose every write fails with [`io::ErrorKind::BrokenPipe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenConsole;

impl Console for BrokenConsole {
    fn write_line(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_observer_with_expectations() {
        let mock = MockObserver::with_snapshot(|s: &str| s.len());
        mock.expect_update().return_ok();
        mock.expect_update().return_ok();

        mock.update("abc").unwrap();
        mock.update("").unwrap();

        assert_eq!(mock.calls(), vec![3, 0]);
        assert_eq!(mock.call_count(), 2);
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected update")]
    fn test_mock_observer_panics_without_expectation() {
        let mock = MockObserver::<str>::new();
        let _ = mock.update("surprise");
    }

    #[test]
    #[should_panic(expected = "1 remaining")]
    fn test_verify_reports_unmet_expectations() {
        let mock = MockObserver::<str>::new();
        mock.expect_update().return_ok();
        mock.verify();
    }

    #[test]
    fn test_recording_console_clones_share_lines() {
        let console = RecordingConsole::new();
        let handle = console.clone();

        console.write_line("one").unwrap();
        console.write_line("two").unwrap();

        assert_eq!(handle.lines(), vec!["one", "two"]);
        assert_eq!(handle.transcript(), "one\ntwo\n");
    }

    #[test]
    fn test_broken_console_fails() {
        let err = BrokenConsole.write_line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
