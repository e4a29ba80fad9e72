#![no_std]

mod contract;
mod events;
mod storage;

pub use contract::{ AddressManager, AddressManagerClient };
