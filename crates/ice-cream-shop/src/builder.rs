//! # Order Builder
//!
//! Fluent construction of an [`Order`]:
//!
//! ```rust
//! use ice_cream_shop::builder::OrderBuilder;
//! use ice_cream_shop::model::BasicIceCream;
//! use ice_cream_shop::Priced;
//!
//! let order = OrderBuilder::new()
//!     .add_item(BasicIceCream::new().with_flavor("Vanilla"))
//!     .add_item(BasicIceCream::new())
//!     .build();
//!
//! assert_eq!(order.len(), 2);
//! assert_eq!(order.calculate_total(), 4.0);
//! ```
//!
//! `build` consumes the builder, so the finished order can never be changed
//! through a builder handle afterwards.

use crate::model::{IceCream, Order, OrderObserver};
use std::rc::Rc;
use tracing::{debug, instrument};

#[derive(Debug, Default)]
#[must_use = "an OrderBuilder does nothing until `build` is called"]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(mut self, item: impl IceCream + 'static) -> Self {
        self.order.add_item(Box::new(item));
        self
    }

    pub fn add_observer(mut self, observer: Rc<OrderObserver>) -> Self {
        self.order.add_observer(observer);
        self
    }

    /// Sets the base description that decorators append to.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.order.set_description(description.into());
        self
    }

    #[instrument(skip(self), fields(items = self.order.len(), observers = self.order.observer_count()))]
    pub fn build(self) -> Order {
        debug!("Order built");
        self.order
    }
}
