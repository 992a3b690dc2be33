//! Error types for the vending machine service
//!
//! This module defines every error that can occur while serving requests.
//! Errors are split by the layer that produces them.
//!
//! # Error Categories
//!
//! - **Vending Errors** ([`VendingError`]): a purchase the machine refuses.
//!   These are the only errors the core returns.
//! - **Request Errors** ([`RequestError`]): malformed bodies, bad coin values,
//!   invalid item IDs and unknown routes. Raised by the HTTP layer before the
//!   core is invoked.
//! - **Server Errors** ([`ServerError`]): configuration, bind and I/O failures
//!   that stop the process.

use super::coin::Coins;
use super::item::ItemId;
use thiserror::Error;

/// Purchase rejections returned by the machine core
///
/// Both variants leave the machine state unchanged; the coins already
/// inserted stay on account. Each variant records the balance observed under
/// the same lock as the failed check, so callers can report it without a
/// second read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VendingError {
    /// The requested item has no stock left
    ///
    /// Checked before funds: a customer who underpaid for an unavailable
    /// item is told the item is unavailable.
    #[error("Item {item} is out of stock ({coins} coins held)")]
    OutOfStock {
        /// The requested item
        item: ItemId,
        /// Coins held when the purchase was refused
        coins: Coins,
    },

    /// Not enough coins have been inserted to pay for the item
    #[error("Insufficient funds for item {item}: {coins} coins held, price {price}")]
    InsufficientFunds {
        /// The requested item
        item: ItemId,
        /// Coins held when the purchase was refused
        coins: Coins,
        /// Price of the item
        price: Coins,
    },
}

impl VendingError {
    /// Create an OutOfStock error
    pub fn out_of_stock(item: ItemId, coins: Coins) -> Self {
        VendingError::OutOfStock { item, coins }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(item: ItemId, coins: Coins, price: Coins) -> Self {
        VendingError::InsufficientFunds { item, coins, price }
    }

    /// Coins held by the machine when the purchase was refused
    pub fn coins(&self) -> Coins {
        match self {
            VendingError::OutOfStock { coins, .. } => *coins,
            VendingError::InsufficientFunds { coins, .. } => *coins,
        }
    }
}

/// Validation failures detected before a request reaches the core
///
/// None of these have side effects on the machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request body is empty, is not JSON, or lacks a usable `coin` field
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Description of the parse failure
        message: String,
    },

    /// The `coin` field holds a value other than 0 or 1
    #[error("Invalid coin value {value}: the machine accepts one quarter at a time")]
    InvalidCoin {
        /// The rejected value
        value: u64,
    },

    /// The `{id}` path segment is not a valid item index
    #[error("Invalid item id '{raw}'")]
    InvalidItemId {
        /// The raw path segment
        raw: String,
    },

    /// No route matches the method and path
    #[error("No route for {method} {path}")]
    RouteNotFound {
        /// HTTP method of the request
        method: String,
        /// Request path as received
        path: String,
    },
}

impl RequestError {
    /// Create a MalformedBody error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        RequestError::MalformedBody {
            message: message.into(),
        }
    }

    /// Create an InvalidCoin error
    pub fn invalid_coin(value: u64) -> Self {
        RequestError::InvalidCoin { value }
    }

    /// Create an InvalidItemId error
    pub fn invalid_item_id(raw: &str) -> Self {
        RequestError::InvalidItemId {
            raw: raw.to_string(),
        }
    }

    /// Create a RouteNotFound error
    pub fn route_not_found(method: &str, path: &str) -> Self {
        RequestError::RouteNotFound {
            method: method.to_string(),
            path: path.to_string(),
        }
    }
}

// Conversion from serde_json::Error to RequestError
impl From<serde_json::Error> for RequestError {
    fn from(error: serde_json::Error) -> Self {
        RequestError::malformed_body(error.to_string())
    }
}

/// Fatal errors that prevent the service from starting or keep it from serving
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    /// The machine configuration is unusable
    #[error("Invalid machine configuration: {message}")]
    InvalidConfig {
        /// Why the configuration was rejected
        message: String,
    },

    /// The listening socket could not be bound
    #[error("Failed to bind {addr}: {message}")]
    Bind {
        /// The address that could not be bound
        addr: String,
        /// Description of the I/O error
        message: String,
    },

    /// I/O error while serving connections
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The logging subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    Telemetry {
        /// Description of the failure
        message: String,
    },
}

// Conversion from io::Error to ServerError
impl From<std::io::Error> for ServerError {
    fn from(error: std::io::Error) -> Self {
        ServerError::IoError {
            message: error.to_string(),
        }
    }
}

impl ServerError {
    /// Create an InvalidConfig error
    pub fn invalid_config(message: &str) -> Self {
        ServerError::InvalidConfig {
            message: message.to_string(),
        }
    }

    /// Create a Bind error
    pub fn bind(addr: impl std::fmt::Display, error: &std::io::Error) -> Self {
        ServerError::Bind {
            addr: addr.to_string(),
            message: error.to_string(),
        }
    }

    /// Create a Telemetry error
    pub fn telemetry(message: impl std::fmt::Display) -> Self {
        ServerError::Telemetry {
            message: message.to_string(),
        }
    }
}
