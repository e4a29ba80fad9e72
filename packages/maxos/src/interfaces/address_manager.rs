use soroban_sdk::{ contractclient, Address, Env, Symbol, Vec };

use crate::error::ErrorCode;

#[contractclient(name = "AddressManagerClient")]
pub trait AddressManagerTrait {
    fn initialize(env: Env, manager: Address) -> Result<(), ErrorCode>;

    fn set_banker(env: Env, sender: Address, banker: Address) -> Result<(), ErrorCode>;

    fn set_treasury(env: Env, sender: Address, treasury: Address) -> Result<(), ErrorCode>;

    fn set_strategy(env: Env, sender: Address, name: Symbol, strategy: Address) -> Result<(), ErrorCode>;

    fn transfer_manager(env: Env, sender: Address, new_manager: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_manager(env: Env) -> Address;

    fn query_banker(env: Env) -> Address;

    fn query_treasury(env: Env) -> Address;

    fn query_strategy(env: Env, name: Symbol) -> Option<Address>;

    fn query_strategy_names(env: Env) -> Vec<Symbol>;

    fn is_manager(env: Env, address: Address) -> bool;
}
