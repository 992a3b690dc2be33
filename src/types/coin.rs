//! Coin-related types for the vending machine
//!
//! The machine only deals in quarters and accepts at most one per insert.

use super::error::RequestError;

/// Number of quarters held by the machine
pub type Coins = u64;

/// A single insert accepted by the coin slot
///
/// Only two values ever reach the core: an empty insert and a single quarter.
/// Anything else is rejected while the request is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    /// An insert carrying no coin (`{"coin": 0}`); leaves the balance unchanged
    None,

    /// One quarter (`{"coin": 1}`)
    Quarter,
}

impl Coin {
    /// Number of quarters this insert adds to the balance
    pub fn value(self) -> Coins {
        match self {
            Coin::None => 0,
            Coin::Quarter => 1,
        }
    }
}

impl TryFrom<u64> for Coin {
    type Error = RequestError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Coin::None),
            1 => Ok(Coin::Quarter),
            other => Err(RequestError::invalid_coin(other)),
        }
    }
}
