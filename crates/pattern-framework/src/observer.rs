//! # Observer & Registry
//!
//! The subject side of the Observer pattern. A subject embeds an
//! [`ObserverRegistry`] and calls [`ObserverRegistry::notify`] whenever its state
//! changes; every registered [`Observer`] then sees the subject as it is *after*
//! the change.
//!
//! ## Notification Model
//!
//! - **Synchronous**: `notify` returns only after every observer has run.
//! - **Ordered**: observers run in registration order.
//! - **No isolation**: the first observer that returns an error stops the fan-out,
//!   and the error is handed back to the subject's caller.
//!
//! Observers are held as `Rc<dyn Observer<S>>`. The registry shares them with
//! whoever registered them, so the caller keeps a handle and can later pass it to
//! [`ObserverRegistry::remove`]. Removal matches on handle identity
//! ([`Rc::ptr_eq`]), never on value equality.

use crate::error::NotifyError;
use std::fmt;
use std::rc::Rc;
use tracing::{trace, warn};

/// A listener notified whenever a subject of type `S` changes.
///
/// The observer has no back-reference to its subject: the subject passes itself
/// in at call time.
pub trait Observer<S: ?Sized> {
    /// Handle a state change of `subject`.
    fn update(&self, subject: &S) -> Result<(), NotifyError>;
}

/// Ordered list of observers interested in a subject of type `S`.
pub struct ObserverRegistry<S: ?Sized> {
    observers: Vec<Rc<dyn Observer<S>>>,
}

impl<S: ?Sized> ObserverRegistry<S> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Appends `observer`. Registering the same handle twice notifies it twice.
    pub fn add(&mut self, observer: Rc<dyn Observer<S>>) {
        self.observers.push(observer);
        trace!(observers = self.observers.len(), "Observer registered");
    }

    /// Removes the first registration of `observer`.
    ///
    /// Returns `false` (and changes nothing) when the handle was never registered.
    pub fn remove(&mut self, observer: &Rc<dyn Observer<S>>) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                trace!(observers = self.observers.len(), "Observer removed");
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Calls every observer in registration order.
    ///
    /// Stops at the first failure; observers after it are not called.
    pub fn notify(&self, subject: &S) -> Result<(), NotifyError> {
        for (index, observer) in self.observers.iter().enumerate() {
            trace!(index, "Notifying observer");
            if let Err(e) = observer.update(subject) {
                warn!(
                    index,
                    skipped = self.observers.len() - index - 1,
                    error = %e,
                    "Observer failed"
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

impl<S: ?Sized> Default for ObserverRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> fmt::Debug for ObserverRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
