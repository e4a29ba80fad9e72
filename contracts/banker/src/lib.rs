#![no_std]

mod banker;
mod contract;
mod controller;
mod events;
mod storage;

pub use banker::BankerTrait;
pub use contract::{ Banker, BankerClient };
pub use storage::{
    CircuitBreaker,
    Config,
    InterestRate,
    RedemptionRequest,
    StrategyEntry,
    StrategySettings,
    MAX_REDEMPTIONS_PAGE,
};
