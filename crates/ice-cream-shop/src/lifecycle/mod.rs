//! # Shop Lifecycle & Orchestration
//!
//! The individual patterns are small; this module wires them into the scenario
//! the binary runs.
//!
//! - [`IceCreamShop`] owns the console and plays the demo from the first order
//!   to the printed receipt.
//! - [`setup_tracing`] initializes logging for the process.

pub mod shop;
pub mod tracing;

pub use self::shop::*;
pub use self::tracing::*;
