use maxos::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::ErrorCode,
};
use soroban_sdk::{ contracttype, log, panic_with_error, Address, Env, Symbol, Vec };

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Initialized,
    Manager,
    Banker,
    Treasury,
    Strategy(Symbol),
    StrategyNames,
}

fn bump_instance(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn save_manager(env: &Env, manager: &Address) {
    env.storage().instance().set(&DataKey::Manager, manager);
    bump_instance(env);
}

pub fn get_manager(env: &Env) -> Address {
    let manager = env
        .storage()
        .instance()
        .get(&DataKey::Manager)
        .unwrap_or_else(|| {
            log!(env, "Address Manager: Manager not set");
            panic_with_error!(env, ErrorCode::ManagerNotSet)
        });
    bump_instance(env);

    manager
}

pub fn save_banker(env: &Env, banker: &Address) {
    env.storage().instance().set(&DataKey::Banker, banker);
    bump_instance(env);
}

pub fn get_banker(env: &Env) -> Address {
    let banker = env
        .storage()
        .instance()
        .get(&DataKey::Banker)
        .unwrap_or_else(|| {
            log!(env, "Address Manager: Banker not set");
            panic_with_error!(env, ErrorCode::BankerNotSet)
        });
    bump_instance(env);

    banker
}

pub fn save_treasury(env: &Env, treasury: &Address) {
    env.storage().instance().set(&DataKey::Treasury, treasury);
    bump_instance(env);
}

pub fn get_treasury(env: &Env) -> Address {
    let treasury = env
        .storage()
        .instance()
        .get(&DataKey::Treasury)
        .unwrap_or_else(|| {
            log!(env, "Address Manager: Treasury not set");
            panic_with_error!(env, ErrorCode::TreasuryNotSet)
        });
    bump_instance(env);

    treasury
}

// ################################################################
//                        Strategy slots
// ################################################################

pub fn save_strategy(env: &Env, name: &Symbol, strategy: &Address) {
    env.storage().instance().set(&DataKey::Strategy(name.clone()), strategy);

    let mut names = get_strategy_names(env);
    if !names.contains(name) {
        names.push_back(name.clone());
        env.storage().instance().set(&DataKey::StrategyNames, &names);
    }
    bump_instance(env);
}

pub fn get_strategy(env: &Env, name: &Symbol) -> Option<Address> {
    env.storage().instance().get(&DataKey::Strategy(name.clone()))
}

pub fn get_strategy_names(env: &Env) -> Vec<Symbol> {
    env.storage()
        .instance()
        .get(&DataKey::StrategyNames)
        .unwrap_or_else(|| Vec::new(env))
}

pub mod utils {
    use super::*;

    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().get(&DataKey::Initialized).unwrap_or(false)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
        bump_instance(env);
    }
}
