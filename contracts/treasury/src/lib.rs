#![no_std]

mod contract;
mod events;
mod storage;

pub use contract::{ Treasury, TreasuryClient };
pub use storage::Config;
