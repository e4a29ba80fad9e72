use maxos::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::ErrorCode,
};
use soroban_sdk::{ contracttype, log, panic_with_error, Address, Env, Vec };

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Initialized,
    Config,
    AllowedTokens,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Registry resolving the manager and the banker
    pub address_manager: Address,
    /// Token held 1:1 against treasury shares
    pub base_asset: Address,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().instance().set(&DataKey::Config, &config);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| {
            log!(env, "Treasury: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    config
}

pub fn get_allowed_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::AllowedTokens)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn save_allowed_tokens(env: &Env, tokens: &Vec<Address>) {
    env.storage().instance().set(&DataKey::AllowedTokens, tokens);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub mod utils {
    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
