//! # Command Trait
//!
//! A command bundles an operation with everything it needs to run, so callers
//! only ever say "execute". Each command defines its own error type, the same way
//! each resource defines its own error enum, which keeps pattern matching on
//! failures specific to the command family.
//!
//! Run commands through [`invoke`] rather than calling
//! [`Command::execute`] directly: it wraps the execution in a span named after
//! the command and logs the outcome.

use tracing::{info, info_span, warn};

/// A one-shot action object.
pub trait Command {
    /// The error type for this command.
    type Error: std::error::Error + 'static;

    /// Short, stable name used in logs (e.g. `"place_order"`).
    fn name(&self) -> &'static str;

    /// Perform the action.
    fn execute(&mut self) -> Result<(), Self::Error>;
}

/// Executes `command` inside a `command` span and logs the result.
pub fn invoke<C: Command + ?Sized>(command: &mut C) -> Result<(), C::Error> {
    let span = info_span!("command", name = command.name());
    let _guard = span.enter();

    match command.execute() {
        Ok(()) => {
            info!("Command executed");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Command failed");
            Err(e)
        }
    }
}
