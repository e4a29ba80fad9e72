use maxos::{
    error::{ ErrorCode, MaxosResult },
    interfaces::{
        address_manager::AddressManagerClient,
        strategy::StrategyTrait,
        token_allowlist::TokenAllowlistTrait,
    },
    validate,
};
use soroban_sdk::{ contract, contractimpl, contractmeta, log, token, Address, Env, Vec };

use crate::{
    events::TreasuryEvents,
    storage::{
        get_allowed_tokens,
        get_config,
        save_allowed_tokens,
        save_config,
        utils::{ is_initialized, set_initialized },
        Config,
    },
};

contractmeta!(
    key = "Description",
    val = "Zero-yield buffer strategy where deposits land and redemptions are paid from"
);

#[contract]
pub struct Treasury;

#[contractimpl]
impl Treasury {
    pub fn initialize(env: Env, address_manager: Address, base_asset: Address) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Treasury: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(&env, Config {
            address_manager: address_manager.clone(),
            base_asset: base_asset.clone(),
        });

        TreasuryEvents::initialize(&env, address_manager, base_asset);

        Ok(())
    }

    pub fn query_config(env: Env) -> Config {
        get_config(&env)
    }
}

#[contractimpl]
impl StrategyTrait for Treasury {
    fn invest(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode> {
        require_banker(&env, &sender)?;

        validate!(&env, amount > 0, ErrorCode::InvalidAmount, "Treasury: Invest: Invalid amount")?;
        validate!(
            &env,
            get_allowed_tokens(&env).contains(&get_config(&env).base_asset),
            ErrorCode::TokenNotAllowed,
            "Treasury: Invest: base asset is not an allowed token"
        )?;
        validate!(
            &env,
            amount <= balance(&env),
            ErrorCode::InsufficientBalance,
            "Treasury: Invest: amount should be lower than balance"
        )?;

        // Funds already sit here as base asset; one share per unit.
        let shares = amount;

        TreasuryEvents::invest(&env, amount, shares);

        Ok(shares)
    }

    fn redeem(env: Env, sender: Address, to: Address, amount: i128) -> Result<i128, ErrorCode> {
        require_banker(&env, &sender)?;

        validate!(&env, amount > 0, ErrorCode::InvalidAmount, "Treasury: Redeem: Invalid amount")?;
        validate!(
            &env,
            amount <= balance(&env),
            ErrorCode::InsufficientShares,
            "Treasury: Redeem: shares should be lower than total shares"
        )?;

        let config = get_config(&env);
        token::Client
            ::new(&env, &config.base_asset)
            .transfer(&env.current_contract_address(), &to, &amount);

        TreasuryEvents::redeem(&env, to, amount, amount);

        Ok(amount)
    }

    fn value_of(env: Env) -> i128 {
        balance(&env)
    }

    fn shares_of(env: Env) -> i128 {
        balance(&env)
    }

    fn max_invest(_env: Env) -> i128 {
        i128::MAX
    }
}

#[contractimpl]
impl TokenAllowlistTrait for Treasury {
    fn allow_token(env: Env, sender: Address, token: Address) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        let mut tokens = get_allowed_tokens(&env);
        validate!(
            &env,
            !tokens.contains(&token),
            ErrorCode::TokenAlreadyAllowed,
            "Treasury: Allow Token: already allowed"
        )?;

        tokens.push_back(token.clone());
        save_allowed_tokens(&env, &tokens);

        TreasuryEvents::allowlist(&env, token, true);

        Ok(())
    }

    fn disallow_token(env: Env, sender: Address, token: Address) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        let mut tokens = get_allowed_tokens(&env);
        let index = tokens.first_index_of(&token).ok_or_else(|| {
            log!(&env, "Treasury: Disallow Token: token is not allowed");
            ErrorCode::TokenNotAllowed
        })?;

        tokens.remove(index);
        save_allowed_tokens(&env, &tokens);

        TreasuryEvents::allowlist(&env, token, false);

        Ok(())
    }

    fn is_allowed_token(env: Env, token: Address) -> bool {
        get_allowed_tokens(&env).contains(&token)
    }

    fn query_allowed_tokens(env: Env) -> Vec<Address> {
        get_allowed_tokens(&env)
    }
}

fn balance(env: &Env) -> i128 {
    let config = get_config(env);
    token::Client::new(env, &config.base_asset).balance(&env.current_contract_address())
}

fn require_banker(env: &Env, sender: &Address) -> MaxosResult {
    sender.require_auth();

    let config = get_config(env);
    let banker = AddressManagerClient::new(env, &config.address_manager).query_banker();

    validate!(env, *sender == banker, ErrorCode::NotAuthorized, "Treasury: No banker")
}

fn require_manager(env: &Env, sender: &Address) -> MaxosResult {
    sender.require_auth();

    let config = get_config(env);

    validate!(
        env,
        AddressManagerClient::new(env, &config.address_manager).is_manager(sender),
        ErrorCode::NotAuthorized,
        "Treasury: No manager"
    )
}
