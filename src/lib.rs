//! Vending Machine Service Library
//! # Overview
//!
//! This library provides an HTTP service simulating a vending machine: it
//! tracks the coin balance of the current transaction and the stock of each
//! item, and serves requests concurrently against a single shared machine.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (coins, item IDs, purchases, errors)
//! - [`core`] - Business logic:
//!   - [`core::traits`] - The `VendingMachine` trait
//!   - [`core::machine`] - `MachineState`, the lock-guarded machine record
//! - [`http`] - Request validation, dispatch, response mapping and serving
//! - [`cli`] - CLI arguments parsing
//! - [`telemetry`] - Logging setup
//!
//! # Purchases
//!
//! A purchase is one atomic step with its checks in a fixed order:
//!
//! 1. **Out of stock**: the item has no stock left (coins are kept)
//! 2. **Insufficient funds**: fewer coins than the price (coins are kept)
//! 3. **Success**: one item is dispensed and the price debited; any change
//!    stays on account until spent or cancelled
//!
//! # Machine State
//!
//! The machine maintains:
//! - `coins`: Quarters inserted for the current transaction
//! - `inventory`: Stock per item, fixed in length, never negative
//! - `price`: Quarters per item, uniform and constant

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod telemetry;
pub mod types;

pub use self::core::{MachineState, VendingMachine};
pub use http::create_router;
pub use types::{
    Coin, Coins, ItemId, MachineConfig, Purchase, Quantity, RequestError, ServerError,
    VendingError,
};
