//! Core business logic module
//!
//! This module contains the vending machine core:
//! - `traits` - The `VendingMachine` trait the HTTP layer is written against
//! - `machine` - `MachineState`, the lock-guarded coin balance and stock

pub mod machine;
pub mod traits;

pub use machine::MachineState;
pub use traits::VendingMachine;
