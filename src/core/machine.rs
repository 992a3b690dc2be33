//! Vending machine state
//!
//! This module provides [`MachineState`], the single mutable record of coin
//! balance and stock shared by every request the service handles.
//!
//! # Thread Safety
//!
//! All state lives behind one `parking_lot::Mutex`. Each operation takes the
//! lock once, performs its whole read-modify-write span, and releases it
//! before returning. Nothing inside a critical section blocks or awaits, so
//! hold times are short and bounded.

use crate::core::traits::VendingMachine;
use crate::types::{
    Coin, Coins, ItemId, MachineConfig, Purchase, Quantity, ServerError, VendingError,
};
use parking_lot::Mutex;
use tracing::debug;

/// Coin balance and stock, only ever accessed under the machine lock
#[derive(Debug)]
struct Holdings {
    /// Quarters inserted for the current transaction
    coins: Coins,

    /// Stock per item, indexed by item ID
    inventory: Vec<Quantity>,
}

/// Thread-safe vending machine state
///
/// Owned by whoever creates it and shared explicitly (typically as an
/// `Arc<dyn VendingMachine>`); there is no global instance. Tests create a
/// fresh machine each.
#[derive(Debug)]
pub struct MachineState {
    /// Quarters required per item; fixed at construction
    price: Coins,

    /// Number of items; fixed at construction
    item_count: usize,

    holdings: Mutex<Holdings>,
}

impl MachineState {
    /// Create a machine from a validated configuration
    ///
    /// The machine starts with no coins and the configured stock.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::InvalidConfig` if the configuration has a zero
    /// price or no items.
    pub fn new(config: MachineConfig) -> Result<Self, ServerError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: MachineConfig) -> Self {
        MachineState {
            price: config.price_in_coins(),
            item_count: config.stock.len(),
            holdings: Mutex::new(Holdings {
                coins: 0,
                inventory: config.stock,
            }),
        }
    }
}

impl Default for MachineState {
    /// The reference machine: price 2, three items with five of each
    fn default() -> Self {
        Self::from_validated(MachineConfig::default())
    }
}

impl VendingMachine for MachineState {
    fn insert_coin(&self, coin: Coin) -> Coins {
        let mut holdings = self.holdings.lock();
        holdings.coins = holdings.coins.saturating_add(coin.value());
        holdings.coins
    }

    fn cancel_transaction(&self) -> Coins {
        let mut holdings = self.holdings.lock();
        std::mem::take(&mut holdings.coins)
    }

    fn inventory(&self) -> Vec<Quantity> {
        self.holdings.lock().inventory.clone()
    }

    /// An ID that does not index this machine reads as zero stock
    fn item_quantity(&self, item: ItemId) -> Quantity {
        let holdings = self.holdings.lock();
        holdings.inventory.get(item.index()).copied().unwrap_or(0)
    }

    fn purchase(&self, item: ItemId) -> Result<Purchase, VendingError> {
        let mut guard = self.holdings.lock();
        let holdings = &mut *guard;
        let coins = holdings.coins;

        // Stock is checked before funds
        let stock = match holdings.inventory.get_mut(item.index()) {
            Some(stock) if *stock > 0 => stock,
            _ => return Err(VendingError::out_of_stock(item, coins)),
        };
        if coins < self.price {
            return Err(VendingError::insufficient_funds(item, coins, self.price));
        }

        *stock -= 1;
        holdings.coins -= self.price;

        let purchase = Purchase {
            item,
            quantity: 1,
            remaining: *stock,
            coins: holdings.coins,
        };
        drop(guard);

        debug!(
            item = %item,
            remaining = purchase.remaining,
            coins = purchase.coins,
            "Item vended"
        );
        Ok(purchase)
    }

    fn coins(&self) -> Coins {
        self.holdings.lock().coins
    }

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn price(&self) -> Coins {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::thread;

    fn item(index: usize) -> ItemId {
        ItemId::parse(&index.to_string(), 3).unwrap()
    }

    fn machine_with(price: u32, stock: Vec<Quantity>) -> MachineState {
        MachineState::new(MachineConfig::new(price, stock)).unwrap()
    }

    fn insert_quarters(machine: &MachineState, count: usize) {
        for _ in 0..count {
            machine.insert_coin(Coin::Quarter);
        }
    }

    #[test]
    fn test_new_machine_starts_empty_handed() {
        let machine = MachineState::default();

        assert_eq!(machine.coins(), 0);
        assert_eq!(machine.inventory(), vec![5, 5, 5]);
        assert_eq!(machine.item_count(), 3);
        assert_eq!(machine.price(), 2);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = MachineState::new(MachineConfig::new(0, vec![5]));
        assert!(matches!(result, Err(ServerError::InvalidConfig { .. })));
    }

    #[rstest]
    #[case::quarter(Coin::Quarter, 1)]
    #[case::empty_insert(Coin::None, 0)]
    fn test_insert_coin_returns_new_total(#[case] coin: Coin, #[case] expected: Coins) {
        let machine = MachineState::default();
        assert_eq!(machine.insert_coin(coin), expected);
        assert_eq!(machine.coins(), expected);
    }

    #[test]
    fn test_insert_coins_accumulate_without_touching_inventory() {
        let machine = MachineState::default();

        machine.insert_coin(Coin::Quarter);
        let total = machine.insert_coin(Coin::Quarter);

        assert_eq!(total, 2);
        assert_eq!(machine.inventory(), vec![5, 5, 5]);
    }

    #[test]
    fn test_cancel_returns_and_resets_coins() {
        let machine = MachineState::default();
        insert_quarters(&machine, 2);

        assert_eq!(machine.cancel_transaction(), 2);
        assert_eq!(machine.coins(), 0);
        assert_eq!(machine.cancel_transaction(), 0);
    }

    #[test]
    fn test_cancel_on_empty_machine_is_noop() {
        let machine = MachineState::default();

        assert_eq!(machine.cancel_transaction(), 0);
        assert_eq!(machine.coins(), 0);
        assert_eq!(machine.inventory(), vec![5, 5, 5]);
    }

    #[test]
    fn test_inventory_is_independent_copy() {
        let machine = MachineState::default();
        let mut snapshot = machine.inventory();
        snapshot[0] = 0;

        assert_eq!(machine.inventory(), vec![5, 5, 5]);
    }

    #[test]
    fn test_item_quantity() {
        let machine = machine_with(2, vec![1, 2, 3]);

        assert_eq!(machine.item_quantity(item(0)), 1);
        assert_eq!(machine.item_quantity(item(2)), 3);
    }

    #[test]
    fn test_item_quantity_for_foreign_id_reads_zero() {
        let machine = machine_with(2, vec![4]);
        assert_eq!(machine.item_quantity(item(2)), 0);
    }

    #[test]
    fn test_purchase_exact_change() {
        let machine = MachineState::default();
        insert_quarters(&machine, 2);

        let purchase = machine.purchase(item(0)).unwrap();

        assert_eq!(purchase.quantity, 1);
        assert_eq!(purchase.remaining, 4);
        assert_eq!(purchase.coins, 0);
        assert_eq!(machine.coins(), 0);
        assert_eq!(machine.inventory(), vec![4, 5, 5]);
    }

    #[test]
    fn test_purchase_keeps_change_on_account() {
        let machine = MachineState::default();
        insert_quarters(&machine, 3);

        let purchase = machine.purchase(item(2)).unwrap();

        assert_eq!(purchase.coins, 1);
        assert_eq!(purchase.remaining, 4);
        assert_eq!(machine.coins(), 1);
        assert_eq!(machine.cancel_transaction(), 1);
    }

    #[rstest]
    #[case::no_coins(0)]
    #[case::one_short(1)]
    fn test_purchase_insufficient_funds(#[case] quarters: usize) {
        let machine = MachineState::default();
        insert_quarters(&machine, quarters);

        let result = machine.purchase(item(0));

        assert_eq!(
            result,
            Err(VendingError::insufficient_funds(item(0), quarters as Coins, 2))
        );
        assert_eq!(machine.coins(), quarters as Coins);
        assert_eq!(machine.inventory(), vec![5, 5, 5]);
    }

    #[test]
    fn test_purchase_out_of_stock_keeps_coins() {
        let machine = machine_with(2, vec![0, 5, 5]);
        insert_quarters(&machine, 2);

        let result = machine.purchase(item(0));

        assert_eq!(result, Err(VendingError::out_of_stock(item(0), 2)));
        assert_eq!(machine.coins(), 2);
        assert_eq!(machine.inventory(), vec![0, 5, 5]);
    }

    #[rstest]
    #[case::no_coins(0)]
    #[case::one_coin(1)]
    fn test_out_of_stock_takes_priority_over_funds(#[case] quarters: usize) {
        let machine = machine_with(2, vec![5, 0, 5]);
        insert_quarters(&machine, quarters);

        let result = machine.purchase(item(1));

        assert!(matches!(result, Err(VendingError::OutOfStock { .. })));
    }

    #[test]
    fn test_deplete_item_then_purchase_is_out_of_stock() {
        let machine = MachineState::default();
        for _ in 0..5 {
            insert_quarters(&machine, 2);
            machine.purchase(item(1)).unwrap();
        }
        insert_quarters(&machine, 1);

        let result = machine.purchase(item(1));

        assert_eq!(result, Err(VendingError::out_of_stock(item(1), 1)));
        assert_eq!(machine.inventory(), vec![5, 0, 5]);
    }

    #[test]
    fn test_purchase_for_foreign_id_is_out_of_stock() {
        let machine = machine_with(1, vec![4]);
        machine.insert_coin(Coin::Quarter);

        let result = machine.purchase(item(2));

        assert!(matches!(result, Err(VendingError::OutOfStock { .. })));
        assert_eq!(machine.coins(), 1);
    }

    #[test]
    fn test_concurrent_purchases_never_oversell() {
        const STOCK: Quantity = 7;
        const BUYERS: usize = 32;

        let machine = Arc::new(machine_with(1, vec![STOCK]));
        for _ in 0..BUYERS {
            machine.insert_coin(Coin::Quarter);
        }

        let handles: Vec<_> = (0..BUYERS)
            .map(|_| {
                let machine = Arc::clone(&machine);
                thread::spawn(move || machine.purchase(item(0)))
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let successes = results.iter().filter(|r| r.is_ok()).count();
        let out_of_stock = results
            .iter()
            .filter(|r| matches!(r, Err(VendingError::OutOfStock { .. })))
            .count();

        assert_eq!(successes, STOCK as usize);
        assert_eq!(out_of_stock, BUYERS - STOCK as usize);
        assert_eq!(machine.item_quantity(item(0)), 0);
        assert_eq!(machine.coins(), (BUYERS - STOCK as usize) as Coins);
    }

    #[test]
    fn test_concurrent_inserts_are_not_lost() {
        let machine = Arc::new(MachineState::default());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let machine = Arc::clone(&machine);
                thread::spawn(move || {
                    for _ in 0..100 {
                        machine.insert_coin(Coin::Quarter);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(machine.coins(), 800);
    }

    #[test]
    fn test_snapshots_stay_consistent_with_purchases() {
        let machine = Arc::new(machine_with(1, vec![50, 50, 50]));
        for _ in 0..150 {
            machine.insert_coin(Coin::Quarter);
        }

        let buyer = {
            let machine = Arc::clone(&machine);
            thread::spawn(move || {
                for round in 0..150 {
                    machine.purchase(item(round % 3)).unwrap();
                }
            })
        };

        // Every sold item is paid for: stock sold always equals coins spent
        for _ in 0..200 {
            let (coins, sold) = {
                let holdings = machine.holdings.lock();
                let sold: u64 = holdings.inventory.iter().map(|q| u64::from(50 - q)).sum();
                (holdings.coins, sold)
            };
            assert_eq!(coins + sold, 150);
        }

        buyer.join().unwrap();
        assert_eq!(machine.inventory(), vec![0, 0, 0]);
        assert_eq!(machine.coins(), 0);
    }
}
