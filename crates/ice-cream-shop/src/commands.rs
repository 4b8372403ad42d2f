//! # Shop Commands
//!
//! The two actions a customer can trigger. Both implement
//! [`Command`](pattern_framework::Command) with [`ShopError`] as their error
//! type and are meant to be run through [`invoke`](pattern_framework::invoke).

use crate::error::ShopError;
use crate::model::Order;
use pattern_framework::{Command, Console};
use std::rc::Rc;

/// Places an order: announces it, then moves the order to [`PlaceOrderCommand::STATUS`].
///
/// Setting the status notifies the order's observers, so their failures surface
/// as [`ShopError::Notify`].
pub struct PlaceOrderCommand<'a> {
    order: &'a mut Order,
    console: Rc<dyn Console>,
}

impl<'a> PlaceOrderCommand<'a> {
    pub const STATUS: &'static str = "Placed";

    pub fn new(order: &'a mut Order, console: Rc<dyn Console>) -> Self {
        Self { order, console }
    }
}

impl Command for PlaceOrderCommand<'_> {
    type Error = ShopError;

    fn name(&self) -> &'static str {
        "place_order"
    }

    fn execute(&mut self) -> Result<(), ShopError> {
        self.console.write_line("Placing order...")?;
        self.order.set_status(Self::STATUS)?;
        Ok(())
    }
}

/// Records customer feedback. Only prints; nothing else changes.
pub struct ProvideFeedbackCommand {
    feedback: String,
    console: Rc<dyn Console>,
}

impl ProvideFeedbackCommand {
    pub fn new(feedback: impl Into<String>, console: Rc<dyn Console>) -> Self {
        Self {
            feedback: feedback.into(),
            console,
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

impl Command for ProvideFeedbackCommand {
    type Error = ShopError;

    fn name(&self) -> &'static str {
        "provide_feedback"
    }

    fn execute(&mut self) -> Result<(), ShopError> {
        self.console
            .write_line(&format!("Providing feedback: {}", self.feedback))?;
        Ok(())
    }
}
