#![no_std]

mod contract;
mod events;
pub mod interfaces;
mod storage;

pub use contract::{ VaultStrategy, VaultStrategyClient };
pub use storage::Config;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;
