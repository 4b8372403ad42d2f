use crate::builder::OrderBuilder;
use crate::commands::{PlaceOrderCommand, ProvideFeedbackCommand};
use crate::decorators::GiftWrapping;
use crate::error::ShopError;
use crate::model::{BasicIceCream, OrderSummary};
use crate::observers::CustomerOrderObserver;
use pattern_framework::{invoke, Console};
use std::rc::Rc;
use tracing::info;

/// The shop front: owns the console every observer and command writes to.
///
/// # Example
///
/// ```rust
/// use ice_cream_shop::lifecycle::IceCreamShop;
/// use pattern_framework::mock::RecordingConsole;
/// use std::rc::Rc;
///
/// let console = RecordingConsole::new();
/// let shop = IceCreamShop::new(Rc::new(console.clone()));
///
/// let summary = shop.run_demo().unwrap();
/// assert_eq!(summary.total, 4.0);
/// assert_eq!(console.lines().last().unwrap(), "Total Cost: $4.0");
/// ```
pub struct IceCreamShop {
    console: Rc<dyn Console>,
}

impl IceCreamShop {
    pub const CUSTOMER: &'static str = "Alice";
    pub const FEEDBACK: &'static str = "Great service!";

    pub fn new(console: Rc<dyn Console>) -> Self {
        Self { console }
    }

    /// Plays the demo scenario end to end:
    ///
    /// 1. Build an order with one basic ice cream, watched by the customer
    /// 2. Place it (the customer is notified)
    /// 3. Leave feedback
    /// 4. Gift wrap it and print the receipt
    ///
    /// Returns the printed summary.
    pub fn run_demo(&self) -> Result<OrderSummary, ShopError> {
        info!("Starting ice cream shop demo");

        let mut order = OrderBuilder::new()
            .add_item(BasicIceCream::new())
            .add_observer(Rc::new(CustomerOrderObserver::new(
                Self::CUSTOMER,
                self.console.clone(),
            )))
            .build();

        invoke(&mut PlaceOrderCommand::new(&mut order, self.console.clone()))?;
        invoke(&mut ProvideFeedbackCommand::new(
            Self::FEEDBACK,
            self.console.clone(),
        ))?;

        let wrapped = GiftWrapping::new(&order);
        let summary = OrderSummary::for_order(&wrapped, &order);
        self.print(&summary)?;

        info!(total = summary.total, status = ?summary.status, "Demo finished");
        Ok(summary)
    }

    /// Writes the receipt block of `summary`, one console line per line.
    pub fn print(&self, summary: &OrderSummary) -> Result<(), ShopError> {
        for line in summary.to_string().lines() {
            self.console.write_line(line)?;
        }
        Ok(())
    }
}
