//! Error types for the shop.

use pattern_framework::NotifyError;
use thiserror::Error;

/// Errors that can occur while running shop commands or the demo.
#[derive(Debug, Error)]
pub enum ShopError {
    /// An order observer failed while being notified of a status change.
    #[error("Order notification failed: {0}")]
    Notify(#[from] NotifyError),

    /// Writing to the console failed.
    #[error("Console output failed: {0}")]
    Output(#[from] std::io::Error),
}
