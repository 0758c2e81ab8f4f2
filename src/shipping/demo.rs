use colored::Colorize;
use tracing::info;

use super::{Carrier, Order, ShippingCoster};
use crate::config::{ConfigError, DemoConfig};

/// One priced line of the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub carrier: String,
    pub cost: u64,
}

/// Prices `order` with every carrier in `carriers`, in order.
pub fn quotes(order: &Order, carriers: &[Carrier]) -> Vec<Quote> {
    carriers
        .iter()
        .map(|&carrier| {
            let coster = ShippingCoster::from(carrier);
            Quote {
                carrier: coster.strategy_name().to_string(),
                cost: coster.cost(order),
            }
        })
        .collect()
}

/// Entry point for the shipping example.
pub fn run(config: &DemoConfig) -> Result<Vec<Quote>, ConfigError> {
    let order = Order::new(config.shipping.item_count);
    let carriers = config.shipping.carriers()?;
    info!(items = order.item_count(), carriers = carriers.len(), "pricing order");

    let quotes = quotes(&order, &carriers);
    for quote in &quotes {
        let line = format!(
            "{} shipping for {} items: {}",
            quote.carrier,
            order.item_count(),
            quote.cost
        );
        if config.output.color {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
    Ok(quotes)
}
