pub mod address_manager;
pub mod strategy;
pub mod token_allowlist;
