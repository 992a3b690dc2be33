//! Core trait for vending machine operations
//!
//! The HTTP layer depends on this trait rather than on a concrete machine, so
//! the router can be built over any implementation.

use crate::types::{Coin, Coins, ItemId, Purchase, Quantity, VendingError};

/// Transactional operations on a vending machine
///
/// Every method is atomic: its observable effect is as if all calls ran in
/// some total order, even when they are made concurrently from many threads.
/// No ordering between waiting callers is promised.
pub trait VendingMachine: Send + Sync {
    /// Add an inserted coin to the balance and return the new total
    fn insert_coin(&self, coin: Coin) -> Coins;

    /// Reset the balance to zero and return what it was before
    fn cancel_transaction(&self) -> Coins;

    /// Copy of the stock for every item, taken at a single point in time
    fn inventory(&self) -> Vec<Quantity>;

    /// Stock for a single item
    fn item_quantity(&self, item: ItemId) -> Quantity;

    /// Buy one unit of an item
    ///
    /// Checks run in a fixed order: out of stock first, then insufficient
    /// funds. On failure the machine state is unchanged.
    fn purchase(&self, item: ItemId) -> Result<Purchase, VendingError>;

    /// Current coin balance
    fn coins(&self) -> Coins;

    /// Number of items the machine stocks (fixed for its lifetime)
    fn item_count(&self) -> usize;

    /// Price of every item, in quarters
    fn price(&self) -> Coins;
}
