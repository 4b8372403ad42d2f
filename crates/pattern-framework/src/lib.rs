//! # Pattern Framework
//!
//! This crate provides the reusable building blocks behind the ice cream shop:
//! the plumbing of the Observer, Command and Decorator patterns, separated from
//! any particular domain.
//!
//! ## Why a Separate Framework?
//!
//! Every pattern has two halves:
//!
//! - **The mechanism**: who keeps the list of listeners, how a command is run and
//!   logged, what a decorator is allowed to assume about the value it wraps.
//! - **The domain**: *which* listeners, *which* command, *which* surcharge.
//!
//! The mechanism is written **once** here and is generic over the domain. The
//! `ice-cream-shop` crate only supplies the domain halves.
//!
//! ## Architecture Overview
//!
//! 1. **Observer Layer** ([`Observer`], [`ObserverRegistry`]) - synchronous,
//!    ordered fan-out of state changes
//! 2. **Command Layer** ([`Command`], [`invoke`]) - one-shot actions with a
//!    per-command error type
//! 3. **Decorator Layer** ([`Priced`]) - the capability decorators wrap
//! 4. **Output Layer** ([`Console`]) - injected line sink, swappable in tests
//!
//! ## Core Abstractions
//!
//! ### [`Observer`] - The Listener
//!
//! ```rust
//! use pattern_framework::{NotifyError, Observer, ObserverRegistry};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! struct Thermostat {
//!     celsius: i32,
//!     observers: ObserverRegistry<Thermostat>,
//! }
//!
//! impl Thermostat {
//!     fn set(&mut self, celsius: i32) -> Result<(), NotifyError> {
//!         self.celsius = celsius;
//!         self.observers.notify(self)
//!     }
//! }
//!
//! struct MaxSeen(Cell<i32>);
//!
//! impl Observer<Thermostat> for MaxSeen {
//!     fn update(&self, t: &Thermostat) -> Result<(), NotifyError> {
//!         self.0.set(self.0.get().max(t.celsius));
//!         Ok(())
//!     }
//! }
//!
//! let max = Rc::new(MaxSeen(Cell::new(i32::MIN)));
//! let mut thermostat = Thermostat { celsius: 0, observers: ObserverRegistry::new() };
//! thermostat.observers.add(max.clone());
//!
//! thermostat.set(21).unwrap();
//! thermostat.set(18).unwrap();
//! assert_eq!(max.0.get(), 21);
//! ```
//!
//! ## Error Handling
//!
//! Observers report failures as [`NotifyError`]. Commands pick their own error
//! type through [`Command::Error`], so a command that only prints can surface an
//! I/O error while a command that mutates a subject can surface its observers'
//! failures too.
//!
//! ## Observability
//!
//! The framework emits `tracing` events but never installs a subscriber; that is
//! the binary's job. [`invoke`] opens a `command` span for every command it runs.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockObserver`, `RecordingConsole` and
//! `BrokenConsole`. See its module docs for the testing patterns.

pub mod command;
pub mod console;
pub mod error;
pub mod mock;
pub mod observer;
pub mod priced;

// Re-export core types for convenience
pub use command::{invoke, Command};
pub use console::{Console, StdoutConsole};
pub use error::NotifyError;
pub use observer::{Observer, ObserverRegistry};
pub use priced::{format_amount, Priced};
