//! # Framework Errors
//!
//! This module defines the error type shared by every observer. Centralizing it
//! keeps the subject side (`ObserverRegistry::notify`) independent of the
//! concrete observers it fans out to.

/// Errors an [`Observer`](crate::Observer) can report while handling a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Writing the notification to its output sink failed.
    #[error("Observer output failed: {0}")]
    Output(#[from] std::io::Error),
    /// The observer refused the notification.
    #[error("Observer rejected notification: {0}")]
    Rejected(String),
}
