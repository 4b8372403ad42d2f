use crate::model::Order;
use pattern_framework::{format_amount, Priced};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A snapshot of what the customer is charged for.
///
/// Built from any [`Priced`] value, typically the outermost decorator, so the
/// description and total include every surcharge. `Display` renders the
/// receipt block printed at the end of the demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub description: String,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub item_count: usize,
}

impl OrderSummary {
    /// Summarizes `priced` on its own; status and item count are left empty.
    pub fn of(priced: &impl Priced) -> Self {
        Self {
            description: priced.description(),
            total: priced.calculate_total(),
            status: None,
            item_count: 0,
        }
    }

    /// Summarizes `priced` (an order or a decorator around it) and copies status
    /// and item count from the underlying `order`.
    pub fn for_order(priced: &impl Priced, order: &Order) -> Self {
        Self {
            status: order.status().map(str::to_owned),
            item_count: order.len(),
            ..Self::of(priced)
        }
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final order details:")?;
        writeln!(f, "Description: {}", self.description)?;
        write!(f, "Total Cost: ${}", format_amount(self.total))
    }
}
