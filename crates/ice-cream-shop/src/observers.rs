//! Order observers.

use crate::model::Order;
use pattern_framework::{Console, NotifyError, Observer};
use std::rc::Rc;
use tracing::debug;

/// Tells a customer, by name, that their order changed status.
///
/// Writes `Dear <name>, your order status is now: <status>` to its console.
/// An order whose status was never set prints `null` in place of the status.
pub struct CustomerOrderObserver {
    customer_name: String,
    console: Rc<dyn Console>,
}

impl CustomerOrderObserver {
    pub fn new(customer_name: impl Into<String>, console: Rc<dyn Console>) -> Self {
        Self {
            customer_name: customer_name.into(),
            console,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }
}

impl Observer<Order> for CustomerOrderObserver {
    fn update(&self, order: &Order) -> Result<(), NotifyError> {
        let status = order.status().unwrap_or("null");
        debug!(customer = %self.customer_name, status, "Notifying customer");
        self.console.write_line(&format!(
            "Dear {}, your order status is now: {}",
            self.customer_name, status
        ))?;
        Ok(())
    }
}
