//! # Ice Cream Shop
//!
//! An "order an ice cream" scenario built from classic design patterns on top of
//! the [`pattern_framework`] crate.
//!
//! ## 🍨 Core Components
//!
//! - **[model]**: [`IceCream`](model::IceCream), the [`Order`](model::Order)
//!   aggregate (also the Observer subject) and the printed
//!   [`OrderSummary`](model::OrderSummary).
//! - **[observers]**: [`CustomerOrderObserver`](observers::CustomerOrderObserver)
//!   greets the customer on every status change.
//! - **[decorators]**: gift wrapping and special packaging around anything
//!   [`Priced`].
//! - **[builder]**: fluent [`OrderBuilder`](builder::OrderBuilder).
//! - **[commands]**: place-order and feedback commands.
//! - **[lifecycle]**: the [`IceCreamShop`](lifecycle::IceCreamShop) demo and
//!   tracing setup.
//!
//! ## 📚 Quick Start
//!
//! The binary plays the demo and prints:
//!
//! ```text
//! Placing order...
//! Dear Alice, your order status is now: Placed
//! Providing feedback: Great service!
//! Final order details:
//! Description: null, Gift Wrapping
//! Total Cost: $4.0
//! ```
//!
//! ```bash
//! cargo run -p ice-cream-shop
//! RUST_LOG=debug cargo run -p ice-cream-shop   # logs go to stderr
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`pattern_framework::mock`] for `MockObserver` and `RecordingConsole`.

pub mod builder;
pub mod commands;
pub mod decorators;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod observers;

pub use error::ShopError;
pub use pattern_framework::Priced;
