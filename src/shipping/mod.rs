// Strategy Pattern - shipping cost calculation
// A coster delegates the cost of an order to an interchangeable strategy.

pub mod demo;

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

// ============================================================================
// Order
// ============================================================================

/// Order details a strategy prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    item_count: u32,
}

impl Order {
    pub fn new(item_count: u32) -> Self {
        Self { item_count }
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }
}

// ============================================================================
// Strategies
// ============================================================================

pub trait ShippingStrategy {
    /// Shipping cost of `order`.
    fn calculate(&self, order: &Order) -> u64;
    fn name(&self) -> &str;
}

pub struct FedExShippingStrategy;

impl FedExShippingStrategy {
    pub const COST_PER_ITEM: u64 = 3;
}

impl ShippingStrategy for FedExShippingStrategy {
    fn calculate(&self, order: &Order) -> u64 {
        Self::COST_PER_ITEM * u64::from(order.item_count())
    }

    fn name(&self) -> &str {
        "FedEx"
    }
}

pub struct UpsShippingStrategy;

impl UpsShippingStrategy {
    pub const COST_PER_ITEM: u64 = 4;
}

impl ShippingStrategy for UpsShippingStrategy {
    fn calculate(&self, order: &Order) -> u64 {
        Self::COST_PER_ITEM * u64::from(order.item_count())
    }

    fn name(&self) -> &str {
        "UPS"
    }
}

pub struct UspsShippingStrategy;

impl UspsShippingStrategy {
    pub const COST_PER_ITEM: u64 = 5;
}

impl ShippingStrategy for UspsShippingStrategy {
    fn calculate(&self, order: &Order) -> u64 {
        Self::COST_PER_ITEM * u64::from(order.item_count())
    }

    fn name(&self) -> &str {
        "USPS"
    }
}

// ============================================================================
// Carrier selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carrier {
    FedEx,
    Ups,
    Usps,
}

impl Carrier {
    pub const ALL: [Carrier; 3] = [Carrier::FedEx, Carrier::Ups, Carrier::Usps];

    pub fn strategy(self) -> Box<dyn ShippingStrategy> {
        match self {
            Carrier::FedEx => Box::new(FedExShippingStrategy),
            Carrier::Ups => Box::new(UpsShippingStrategy),
            Carrier::Usps => Box::new(UspsShippingStrategy),
        }
    }
}

impl FromStr for Carrier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fedex" => Ok(Carrier::FedEx),
            "ups" => Ok(Carrier::Ups),
            "usps" => Ok(Carrier::Usps),
            _ => Err(ConfigError::UnknownCarrier { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Carrier::FedEx => "fedex",
            Carrier::Ups => "ups",
            Carrier::Usps => "usps",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct ShippingCoster {
    strategy: Box<dyn ShippingStrategy>,
}

impl ShippingCoster {
    pub fn new(strategy: Box<dyn ShippingStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn ShippingStrategy>) {
        self.strategy = strategy;
    }

    pub fn cost(&self, order: &Order) -> u64 {
        self.strategy.calculate(order)
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

impl From<Carrier> for ShippingCoster {
    fn from(carrier: Carrier) -> Self {
        Self::new(carrier.strategy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn order() -> Order {
        Order::new(5)
    }

    #[test]
    fn test_fed_ex() {
        let fed_ex = ShippingCoster::new(Box::new(FedExShippingStrategy));
        assert_eq!(fed_ex.cost(&order()), 15);
    }

    #[test]
    fn test_ups() {
        let ups = ShippingCoster::new(Box::new(UpsShippingStrategy));
        assert_eq!(ups.cost(&order()), 20);
    }

    #[test]
    fn test_usps() {
        let usps = ShippingCoster::new(Box::new(UspsShippingStrategy));
        assert_eq!(usps.cost(&order()), 25);
    }

    #[test]
    fn test_empty_order_is_free() {
        for carrier in Carrier::ALL {
            assert_eq!(ShippingCoster::from(carrier).cost(&Order::new(0)), 0);
        }
    }

    #[test]
    fn test_swap_strategy() {
        let mut coster = ShippingCoster::from(Carrier::FedEx);
        assert_eq!(coster.strategy_name(), "FedEx");

        coster.set_strategy(Carrier::Usps.strategy());
        assert_eq!(coster.strategy_name(), "USPS");
        assert_eq!(coster.cost(&order()), 25);
    }

    #[test]
    fn test_carrier_parse() {
        assert_eq!("FedEx".parse::<Carrier>().unwrap(), Carrier::FedEx);
        assert_eq!(" ups ".parse::<Carrier>().unwrap(), Carrier::Ups);
        assert_eq!("USPS".parse::<Carrier>().unwrap(), Carrier::Usps);
        assert!(matches!(
            "dhl".parse::<Carrier>(),
            Err(ConfigError::UnknownCarrier { .. })
        ));
    }

    #[test]
    fn test_carrier_display_parses_back() {
        for carrier in Carrier::ALL {
            assert_eq!(carrier.to_string().parse::<Carrier>().unwrap(), carrier);
        }
    }

    #[test]
    fn test_max_order_does_not_overflow() {
        let order = Order::new(u32::MAX);
        let usps = ShippingCoster::from(Carrier::Usps);
        assert_eq!(usps.cost(&order), 5 * u64::from(u32::MAX));
    }

    proptest! {
        #[test]
        fn cost_is_rate_times_items(k: u32) {
            let order = Order::new(k);
            let k = u64::from(k);
            prop_assert_eq!(ShippingCoster::from(Carrier::FedEx).cost(&order), 3 * k);
            prop_assert_eq!(ShippingCoster::from(Carrier::Ups).cost(&order), 4 * k);
            prop_assert_eq!(ShippingCoster::from(Carrier::Usps).cost(&order), 5 * k);
        }
    }
}
