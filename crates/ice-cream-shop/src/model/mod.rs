//! Domain data: the products, the order that aggregates them, and the summary
//! printed at checkout.

pub mod ice_cream;
pub mod order;
pub mod summary;

pub use ice_cream::*;
pub use order::*;
pub use summary::*;
