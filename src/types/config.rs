//! Machine configuration
//!
//! Describes the initial state a [`MachineState`](crate::core::MachineState)
//! is created with.

use super::coin::Coins;
use super::error::ServerError;
use super::item::Quantity;

/// Default price per item, in quarters
pub const DEFAULT_PRICE: u32 = 2;

/// Default initial stock: three items with five of each
pub const DEFAULT_STOCK: [Quantity; 3] = [5, 5, 5];

/// Initial configuration of a vending machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Quarters required per item (uniform across items)
    pub price: u32,

    /// Initial stock per item; its length fixes the number of items
    pub stock: Vec<Quantity>,
}

impl MachineConfig {
    /// Create a configuration from a price and initial stock
    pub fn new(price: u32, stock: Vec<Quantity>) -> Self {
        MachineConfig { price, stock }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ServerError::InvalidConfig` if the price is zero or the
    /// machine would stock no items.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.price == 0 {
            return Err(ServerError::invalid_config("price must be greater than zero"));
        }
        if self.stock.is_empty() {
            return Err(ServerError::invalid_config(
                "machine must stock at least one item",
            ));
        }
        Ok(())
    }

    /// Price as a coin amount
    pub fn price_in_coins(&self) -> Coins {
        Coins::from(self.price)
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig::new(DEFAULT_PRICE, DEFAULT_STOCK.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_matches_reference_machine() {
        let config = MachineConfig::default();
        assert_eq!(config.price, 2);
        assert_eq!(config.stock, vec![5, 5, 5]);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case::zero_price(MachineConfig::new(0, vec![5]), "price must be greater than zero")]
    #[case::no_items(MachineConfig::new(2, vec![]), "machine must stock at least one item")]
    fn test_validate_rejects(#[case] config: MachineConfig, #[case] message: &str) {
        let error = config.validate().unwrap_err();
        assert_eq!(error, ServerError::invalid_config(message));
    }

    #[test]
    fn test_empty_stock_slots_are_valid() {
        let config = MachineConfig::new(1, vec![0, 0]);
        assert!(config.validate().is_ok());
    }
}
