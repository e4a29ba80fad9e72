use maxos::{
    error::{ ErrorCode, MaxosResult },
    interfaces::address_manager::AddressManagerTrait,
    validate,
};
use soroban_sdk::{ contract, contractimpl, contractmeta, log, symbol_short, Address, Env, Symbol, Vec };

use crate::{
    events::AddressManagerEvents,
    storage::{
        get_banker,
        get_manager,
        get_strategy,
        get_strategy_names,
        get_treasury,
        save_banker,
        save_manager,
        save_strategy,
        save_treasury,
        utils::{ is_initialized, set_initialized },
    },
};

contractmeta!(
    key = "Description",
    val = "Directory of the Maxos manager and the banker, treasury and strategy contracts"
);

#[contract]
pub struct AddressManager;

#[contractimpl]
impl AddressManagerTrait for AddressManager {
    fn initialize(env: Env, manager: Address) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Address Manager: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);
        save_manager(&env, &manager);

        AddressManagerEvents::initialize(&env, manager);

        Ok(())
    }

    fn set_banker(env: Env, sender: Address, banker: Address) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        save_banker(&env, &banker);

        AddressManagerEvents::set_address(&env, symbol_short!("banker"), banker);

        Ok(())
    }

    fn set_treasury(env: Env, sender: Address, treasury: Address) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        save_treasury(&env, &treasury);

        AddressManagerEvents::set_address(&env, symbol_short!("treasury"), treasury);

        Ok(())
    }

    fn set_strategy(
        env: Env,
        sender: Address,
        name: Symbol,
        strategy: Address
    ) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        save_strategy(&env, &name, &strategy);

        AddressManagerEvents::set_address(&env, name, strategy);

        Ok(())
    }

    fn transfer_manager(env: Env, sender: Address, new_manager: Address) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        save_manager(&env, &new_manager);

        AddressManagerEvents::transfer_manager(&env, sender, new_manager);

        Ok(())
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_manager(env: Env) -> Address {
        get_manager(&env)
    }

    fn query_banker(env: Env) -> Address {
        get_banker(&env)
    }

    fn query_treasury(env: Env) -> Address {
        get_treasury(&env)
    }

    fn query_strategy(env: Env, name: Symbol) -> Option<Address> {
        get_strategy(&env, &name)
    }

    fn query_strategy_names(env: Env) -> Vec<Symbol> {
        get_strategy_names(&env)
    }

    fn is_manager(env: Env, address: Address) -> bool {
        is_initialized(&env) && get_manager(&env) == address
    }
}

fn require_manager(env: &Env, sender: &Address) -> MaxosResult {
    sender.require_auth();

    validate!(env, is_initialized(env), ErrorCode::NotInitialized)?;
    validate!(
        env,
        *sender == get_manager(env),
        ErrorCode::NotAuthorized,
        "Address Manager: You are not authorized!"
    )
}
