//! # Cart observer & shipping strategy
//!
//! Two small, independent behavioral pattern examples:
//!
//! ## Observer Pattern
//! - [`observer::Cart`] notifies attached [`observer::CartObserver`]s each
//!   time its item count changes
//! - every subject owns its own observer set, unique by identity
//!
//! ## Strategy Pattern
//! - [`shipping::ShippingCoster`] delegates pricing to a boxed
//!   [`shipping::ShippingStrategy`] (FedEx, UPS, USPS)
//!
//! Run the examples with:
//! ```bash
//! cargo run --bin cart_observer [config.toml]
//! cargo run --bin shipping_strategy [config.toml]
//! ```

pub mod config;
pub mod observer;
pub mod shipping;

pub use config::{ConfigError, DemoConfig};

/// Installs the `tracing` subscriber used by both binaries.
///
/// Diagnostics go to stderr and default to `warn`; set `RUST_LOG` to see the
/// attach/detach/notify events.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
