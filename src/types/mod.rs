//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `coin`: Coin values and balances
//! - `item`: Item identifiers, quantities and purchase receipts
//! - `config`: Initial machine configuration
//! - `error`: Error types for the vending machine service

pub mod coin;
pub mod config;
pub mod error;
pub mod item;

pub use coin::{Coin, Coins};
pub use config::MachineConfig;
pub use error::{RequestError, ServerError, VendingError};
pub use item::{ItemId, Purchase, Quantity};
