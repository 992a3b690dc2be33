//! Item-related types for the vending machine
//!
//! This module defines item identifiers, stock quantities and the receipt
//! returned by a successful purchase.

use super::coin::Coins;
use super::error::RequestError;

/// Stock count for a single item
pub type Quantity = u32;

/// Validated item identifier
///
/// A zero-based index into the machine's inventory. Values are only created
/// through [`ItemId::parse`], which checks the index against the number of
/// items the machine was configured with, so the core never re-validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(usize);

impl ItemId {
    /// Parse a path segment into an item ID for a machine with `item_count` items
    ///
    /// # Arguments
    ///
    /// * `raw` - The `{id}` segment taken from the request path
    /// * `item_count` - Number of items the machine stocks (N)
    ///
    /// # Returns
    ///
    /// * `Ok(ItemId)` if `raw` is a non-negative integer below `item_count`
    /// * `Err(RequestError::InvalidItemId)` otherwise
    pub fn parse(raw: &str, item_count: usize) -> Result<Self, RequestError> {
        match raw.parse::<usize>() {
            Ok(index) if index < item_count => Ok(ItemId(index)),
            _ => Err(RequestError::invalid_item_id(raw)),
        }
    }

    /// Position of this item in the inventory sequence
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receipt for a successful purchase
///
/// The machine never refunds change on its own: `coins` is what stays on
/// account for a further purchase or a later cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    /// The item that was vended
    pub item: ItemId,

    /// Number of items dispensed (always 1)
    pub quantity: Quantity,

    /// Stock left for `item` after the purchase
    pub remaining: Quantity,

    /// Coins left on account after the price was debited
    pub coins: Coins,
}
