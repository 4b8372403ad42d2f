//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the binary.
//!
//! ## Configuration
//!
//! - **Filtering** comes from the `RUST_LOG` environment variable. With no
//!   variable set only errors are shown.
//! - **Compact format** without the module prefix (`with_target(false)`), so the
//!   `command{name=place_order}` span shows up inline.
//! - **Standard error only**. Standard output belongs to the customer-facing
//!   transcript and must stay byte-for-byte stable.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle events and commands
//! RUST_LOG=info cargo run -p ice-cream-shop
//!
//! # Items, observers and status changes with their fields
//! RUST_LOG=debug cargo run -p ice-cream-shop
//!
//! # Every observer call
//! RUST_LOG=pattern_framework=trace cargo run -p ice-cream-shop
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=debug`**:
//!
//! ```text
//! INFO Starting ice cream shop demo
//! DEBUG Item added item_id=item_1 description="Basic Ice Cream"
//! DEBUG build: Order built items=1 observers=1
//! DEBUG command: Status changed name="place_order" status=Placed observers=1
//! DEBUG command: Notifying customer name="place_order" customer=Alice status="Placed"
//! INFO command: Command executed name="place_order"
//! INFO command: Command executed name="provide_feedback"
//! INFO Demo finished total=4.0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
