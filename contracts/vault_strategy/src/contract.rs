use maxos::{
    error::{ ErrorCode, MaxosResult },
    interfaces::{ address_manager::AddressManagerClient, strategy::StrategyTrait },
    math::safe_math::{ mul_div_ceil, mul_div_floor, SafeMath },
    validate,
};
use soroban_sdk::{
    auth::{ ContractContext, InvokerContractAuthEntry, SubContractInvocation },
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    symbol_short,
    token,
    vec,
    Address,
    Env,
    IntoVal,
};

use crate::{
    events::VaultStrategyEvents,
    interfaces::VaultClient,
    storage::{
        get_config,
        get_total_shares,
        save_config,
        save_total_shares,
        utils::{ is_initialized, set_initialized },
        Config,
    },
};

contractmeta!(
    key = "Description",
    val = "Strategy adapter investing the base asset into a share-priced yield vault"
);

#[contract]
pub struct VaultStrategy;

#[contractimpl]
impl VaultStrategy {
    pub fn initialize(
        env: Env,
        address_manager: Address,
        base_asset: Address,
        vault: Address
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Vault Strategy: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }

        let decimals = VaultClient::new(&env, &vault).decimals();
        let price_scale = (10_i128).checked_pow(decimals).ok_or(ErrorCode::MathOverflow)?;

        set_initialized(&env);

        save_config(&env, Config {
            address_manager,
            base_asset: base_asset.clone(),
            vault: vault.clone(),
            price_scale,
        });
        save_total_shares(&env, 0);

        VaultStrategyEvents::initialize(&env, vault, base_asset, price_scale);

        Ok(())
    }

    pub fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    pub fn query_price_per_share(env: Env) -> i128 {
        let config = get_config(&env);
        price_per_share(&env, &config).unwrap_or_else(|err| panic_with_error!(&env, err))
    }
}

#[contractimpl]
impl StrategyTrait for VaultStrategy {
    fn invest(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode> {
        require_banker(&env, &sender)?;

        let config = get_config(&env);
        let vault = VaultClient::new(&env, &config.vault);

        validate!(&env, amount > 0, ErrorCode::InvalidAmount, "Vault Strategy: Invest: Invalid amount")?;
        validate!(
            &env,
            amount <= vault.available_deposit_limit(),
            ErrorCode::DepositLimitExceeded,
            "Vault Strategy: Invest: Limit overflow"
        )?;
        validate!(
            &env,
            amount <= token::Client::new(&env, &config.base_asset).balance(&env.current_contract_address()),
            ErrorCode::InsufficientBalance,
            "Vault Strategy: Invest: amount should be lower than balance"
        )?;

        let pps = price_per_share(&env, &config)?;
        let shares = mul_div_floor(&env, amount, config.price_scale, pps)?;
        validate!(
            &env,
            shares > 0,
            ErrorCode::InvalidAmount,
            "Vault Strategy: Invest: amount buys no shares"
        )?;

        let total_shares = get_total_shares(&env).safe_add(shares, &env)?;
        save_total_shares(&env, total_shares);

        // The vault pulls the funds, so the transfer has to be pre-authorized.
        env.authorize_as_current_contract(
            vec![
                &env,
                InvokerContractAuthEntry::Contract(SubContractInvocation {
                    context: ContractContext {
                        contract: config.base_asset.clone(),
                        fn_name: symbol_short!("transfer"),
                        args: (
                            env.current_contract_address(),
                            config.vault.clone(),
                            amount,
                        ).into_val(&env),
                    },
                    sub_invocations: vec![&env],
                })
            ]
        );
        let minted = vault.deposit(&env.current_contract_address(), &amount);

        validate!(
            &env,
            minted == shares,
            ErrorCode::VaultShareMismatch,
            "Vault Strategy: Invest: vault minted {} shares, expected {}",
            minted,
            shares
        )?;

        VaultStrategyEvents::invest(&env, amount, shares, pps, total_shares);

        Ok(shares)
    }

    fn redeem(env: Env, sender: Address, to: Address, amount: i128) -> Result<i128, ErrorCode> {
        require_banker(&env, &sender)?;

        validate!(&env, amount > 0, ErrorCode::InvalidAmount, "Vault Strategy: Redeem: Invalid amount")?;

        let config = get_config(&env);
        let pps = price_per_share(&env, &config)?;

        // Round up so the vault never pays out more than the burned shares are worth.
        let shares = mul_div_ceil(&env, amount, config.price_scale, pps)?;
        let held = get_total_shares(&env);
        validate!(
            &env,
            shares <= held,
            ErrorCode::InsufficientShares,
            "Vault Strategy: Redeem: shares should be lower than total shares"
        )?;

        let total_shares = held.safe_sub(shares, &env)?;
        save_total_shares(&env, total_shares);

        VaultClient::new(&env, &config.vault).withdraw(&env.current_contract_address(), &to, &shares);

        VaultStrategyEvents::redeem(&env, to, amount, shares, pps, total_shares);

        Ok(shares)
    }

    fn value_of(env: Env) -> i128 {
        let config = get_config(&env);
        price_per_share(&env, &config)
            .and_then(|pps| mul_div_floor(&env, get_total_shares(&env), pps, config.price_scale))
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    fn shares_of(env: Env) -> i128 {
        get_total_shares(&env)
    }

    fn max_invest(env: Env) -> i128 {
        let config = get_config(&env);
        VaultClient::new(&env, &config.vault).available_deposit_limit()
    }
}

fn price_per_share(env: &Env, config: &Config) -> MaxosResult<i128> {
    let pps = VaultClient::new(env, &config.vault).price_per_share();
    validate!(
        env,
        pps > 0,
        ErrorCode::InvalidPricePerShare,
        "Vault Strategy: vault reported a non-positive price per share"
    )?;
    Ok(pps)
}

fn require_banker(env: &Env, sender: &Address) -> MaxosResult {
    sender.require_auth();

    let config = get_config(env);
    let banker = AddressManagerClient::new(env, &config.address_manager).query_banker();

    validate!(env, *sender == banker, ErrorCode::NotAuthorized, "Vault Strategy: No banker")
}
