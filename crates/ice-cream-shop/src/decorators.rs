//! # Order Decorators
//!
//! Add-ons that change what an order costs and how it is described without
//! touching the order itself. Each decorator wraps any [`Priced`] value,
//! including another decorator, and contributes a fixed suffix and surcharge:
//!
//! | Decorator | Suffix | Surcharge |
//! |-----------|--------|-----------|
//! | [`GiftWrapping`] | `", Gift Wrapping"` | `2.0` |
//! | [`SpecialPackaging`] | `", Special Packaging"` | `1.5` |
//!
//! Chains accumulate innermost first:
//!
//! ```rust
//! use ice_cream_shop::decorators::{GiftWrapping, SpecialPackaging};
//! use ice_cream_shop::model::{BasicIceCream, Order};
//! use ice_cream_shop::Priced;
//!
//! let mut order = Order::new();
//! order.add_item(Box::new(BasicIceCream::new()));
//!
//! let boxed = SpecialPackaging::new(GiftWrapping::new(&order));
//! assert_eq!(boxed.description(), "null, Gift Wrapping, Special Packaging");
//! assert_eq!(boxed.calculate_total(), 5.5);
//! ```

use pattern_framework::Priced;

/// Wraps the order in gift paper.
#[derive(Debug, Clone)]
pub struct GiftWrapping<T: Priced> {
    inner: T,
}

impl<T: Priced> GiftWrapping<T> {
    pub const SUFFIX: &'static str = ", Gift Wrapping";
    pub const SURCHARGE: f64 = 2.0;

    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// The decorated value.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Priced> Priced for GiftWrapping<T> {
    fn description(&self) -> String {
        self.inner.description() + Self::SUFFIX
    }

    fn calculate_total(&self) -> f64 {
        self.inner.calculate_total() + Self::SURCHARGE
    }
}

/// Packs the order in an insulated box.
#[derive(Debug, Clone)]
pub struct SpecialPackaging<T: Priced> {
    inner: T,
}

impl<T: Priced> SpecialPackaging<T> {
    pub const SUFFIX: &'static str = ", Special Packaging";
    pub const SURCHARGE: f64 = 1.5;

    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Priced> Priced for SpecialPackaging<T> {
    fn description(&self) -> String {
        self.inner.description() + Self::SUFFIX
    }

    fn calculate_total(&self) -> f64 {
        self.inner.calculate_total() + Self::SURCHARGE
    }
}
