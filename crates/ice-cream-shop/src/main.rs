use ice_cream_shop::lifecycle::{setup_tracing, IceCreamShop};
use ice_cream_shop::ShopError;
use pattern_framework::StdoutConsole;
use std::rc::Rc;
use tracing::{error, info};

fn main() -> Result<(), ShopError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let shop = IceCreamShop::new(Rc::new(StdoutConsole));

    match shop.run_demo() {
        Ok(summary) => {
            info!(item_count = summary.item_count, "Application completed successfully");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Demo failed");
            Err(e)
        }
    }
}
