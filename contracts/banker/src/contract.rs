use maxos::{
    constants::DEFAULT_REBALANCE_TOLERANCE,
    error::{ ErrorCode, MaxosResult },
    interfaces::{
        address_manager::AddressManagerClient,
        strategy::StrategyClient,
        token_allowlist::TokenAllowlistClient,
    },
    math::safe_math::{ bps_of, SafeMath },
    validate,
    validate_bps,
};
use soroban_sdk::{
    contract,
    contractimpl,
    contractmeta,
    log,
    panic_with_error,
    token,
    Address,
    Env,
    String,
    Vec,
};

use crate::{
    banker::BankerTrait,
    controller::{ allocation, pool },
    events::BankerEvents,
    storage::{
        find_strategy,
        get_circuit_breaker,
        get_config,
        get_max_usd_interest_rate,
        get_pending_redemptions,
        get_redemption,
        get_shares,
        get_strategies,
        get_total_shares,
        get_user_redemption_count,
        get_user_redemptions,
        next_redemption_id,
        push_user_redemption,
        save_circuit_breaker,
        save_config,
        save_max_usd_interest_rate,
        save_pending_redemptions,
        save_redemption,
        save_shares,
        save_strategies,
        save_total_shares,
        utils::{ is_initialized, set_initialized },
        CircuitBreaker,
        Config,
        InterestRate,
        RedemptionRequest,
        StrategyEntry,
        StrategySettings,
    },
};

contractmeta!(
    key = "Description",
    val = "Allocator moving pooled base asset between the treasury buffer and yield strategies"
);

#[contract]
pub struct Banker;

#[contractimpl]
impl BankerTrait for Banker {
    fn initialize(
        env: Env,
        address_manager: Address,
        base_asset: Address,
        mint_deposit_percentage: u32,
        redemption_delay_time: u64
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Banker: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }

        validate_bps!(&env, mint_deposit_percentage)?;

        set_initialized(&env);

        save_config(&env, Config {
            address_manager: address_manager.clone(),
            base_asset: base_asset.clone(),
            mint_deposit_percentage,
            redemption_delay_time,
            rebalance_tolerance: DEFAULT_REBALANCE_TOLERANCE,
        });
        save_circuit_breaker(&env, CircuitBreaker::Off);
        save_max_usd_interest_rate(&env, &InterestRate {
            interest_rate: 0,
            updated_at: env.ledger().timestamp(),
        });
        save_strategies(&env, &Vec::new(&env));

        BankerEvents::initialize(&env, address_manager, base_asset);

        Ok(())
    }

    fn update_config(
        env: Env,
        sender: Address,
        mint_deposit_percentage: Option<u32>,
        redemption_delay_time: Option<u64>,
        rebalance_tolerance: Option<i128>
    ) -> Result<(), ErrorCode> {
        let mut config = require_manager(&env, &sender)?;

        if let Some(mint_deposit_percentage) = mint_deposit_percentage {
            validate_bps!(&env, mint_deposit_percentage)?;
            config.mint_deposit_percentage = mint_deposit_percentage;
        }

        if let Some(redemption_delay_time) = redemption_delay_time {
            config.redemption_delay_time = redemption_delay_time;
        }

        if let Some(rebalance_tolerance) = rebalance_tolerance {
            validate!(
                &env,
                rebalance_tolerance >= 0,
                ErrorCode::InvalidTolerance,
                "Banker: Update Config: tolerance must not be negative"
            )?;
            config.rebalance_tolerance = rebalance_tolerance;
        }

        save_config(&env, config.clone());

        BankerEvents::update_config(
            &env,
            config.mint_deposit_percentage,
            config.redemption_delay_time,
            config.rebalance_tolerance
        );

        Ok(())
    }

    fn set_max_usd_interest_rate(env: Env, sender: Address, interest_rate: u32) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        validate_bps!(&env, interest_rate)?;

        save_max_usd_interest_rate(&env, &InterestRate {
            interest_rate,
            updated_at: env.ledger().timestamp(),
        });

        BankerEvents::max_usd_interest_rate(&env, interest_rate);

        Ok(())
    }

    // ################################################################
    //                         CIRCUIT BREAKER
    // ################################################################

    fn suspend(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        validate!(
            &env,
            get_circuit_breaker(&env) == CircuitBreaker::Off,
            ErrorCode::CircuitBreakerAlreadyOn,
            "Banker: Suspend: already suspended"
        )?;

        save_circuit_breaker(&env, CircuitBreaker::On);

        BankerEvents::circuit_breaker(&env, sender, true);

        Ok(())
    }

    fn resume(env: Env, sender: Address) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        validate!(
            &env,
            get_circuit_breaker(&env) == CircuitBreaker::On,
            ErrorCode::CircuitBreakerAlreadyOff,
            "Banker: Resume: not suspended"
        )?;

        save_circuit_breaker(&env, CircuitBreaker::Off);

        BankerEvents::circuit_breaker(&env, sender, false);

        Ok(())
    }

    fn is_suspended(env: Env) -> bool {
        get_circuit_breaker(&env) == CircuitBreaker::On
    }

    // ################################################################
    //                            STRATEGIES
    // ################################################################

    fn add_strategy(
        env: Env,
        sender: Address,
        name: String,
        chain: String,
        address: Address,
        insurance_ap: u32,
        desired_asset_ap: u32,
        enabled: bool
    ) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        validate_bps!(&env, insurance_ap, desired_asset_ap)?;

        let mut strategies = get_strategies(&env);
        validate!(
            &env,
            find_strategy(&strategies, &address).is_none(),
            ErrorCode::DuplicateStrategy,
            "Banker: Add Strategy: strategy already listed"
        )?;

        strategies.push_back(StrategyEntry {
            address: address.clone(),
            name: name.clone(),
            chain: chain.clone(),
            insurance_ap,
            desired_asset_ap,
            enabled,
        });
        save_strategies(&env, &strategies);

        BankerEvents::add_strategy(&env, address, name, chain, insurance_ap, desired_asset_ap);

        Ok(())
    }

    fn remove_strategy(env: Env, sender: Address, address: Address) -> Result<(), ErrorCode> {
        let config = require_manager(&env, &sender)?;

        let mut strategies = get_strategies(&env);
        let index = find_strategy(&strategies, &address).ok_or_else(|| {
            log!(&env, "Banker: Remove Strategy: strategy not listed");
            ErrorCode::StrategyNotFound
        })?;
        require_empty(&env, &address, config.rebalance_tolerance)?;

        strategies.remove(index);
        save_strategies(&env, &strategies);

        BankerEvents::remove_strategy(&env, address);

        Ok(())
    }

    fn set_strategy_enabled(
        env: Env,
        sender: Address,
        address: Address,
        enabled: bool
    ) -> Result<(), ErrorCode> {
        let config = require_manager(&env, &sender)?;

        let mut strategies = get_strategies(&env);
        let (index, mut entry) = strategy_at(&env, &strategies, &address)?;
        if entry.enabled && !enabled {
            require_empty(&env, &address, config.rebalance_tolerance)?;
        }

        entry.enabled = enabled;
        strategies.set(index, entry.clone());
        save_strategies(&env, &strategies);

        emit_settings(&env, &entry);

        Ok(())
    }

    fn set_insurance_aps(
        env: Env,
        sender: Address,
        addresses: Vec<Address>,
        insurance_aps: Vec<u32>
    ) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        let mut strategies = get_strategies(&env);
        let indexes = validate_batch(&env, &strategies, &addresses, &insurance_aps)?;

        for (index, insurance_ap) in indexes.iter().zip(insurance_aps.iter()) {
            let mut entry = strategies.get_unchecked(index);
            entry.insurance_ap = insurance_ap;
            strategies.set(index, entry.clone());
            emit_settings(&env, &entry);
        }
        save_strategies(&env, &strategies);

        Ok(())
    }

    fn set_desired_asset_aps(
        env: Env,
        sender: Address,
        addresses: Vec<Address>,
        desired_asset_aps: Vec<u32>
    ) -> Result<(), ErrorCode> {
        require_manager(&env, &sender)?;

        let mut strategies = get_strategies(&env);
        let indexes = validate_batch(&env, &strategies, &addresses, &desired_asset_aps)?;

        for (index, desired_asset_ap) in indexes.iter().zip(desired_asset_aps.iter()) {
            let mut entry = strategies.get_unchecked(index);
            entry.desired_asset_ap = desired_asset_ap;
            strategies.set(index, entry.clone());
            emit_settings(&env, &entry);
        }
        save_strategies(&env, &strategies);

        Ok(())
    }

    // ################################################################
    //                            ALLOCATION
    // ################################################################

    fn allocate(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        let config = require_manager(&env, &sender)?;
        require_active(&env)?;

        let treasury = AddressManagerClient::new(&env, &config.address_manager).query_treasury();
        let enabled = allocation::enabled_strategies(&env, &get_strategies(&env));

        allocation::validate_allocation(&env, &enabled, &treasury)?;

        let reserve = get_pending_redemptions(&env);
        let (total_asset_value, positions) = allocation::plan(&env, &enabled, &treasury, reserve)?;

        let moved = allocation::rebalance(
            &env,
            &positions,
            &treasury,
            reserve,
            config.rebalance_tolerance
        )?;

        BankerEvents::allocate(&env, total_asset_value, moved);

        Ok(moved)
    }

    fn total_asset_value(env: Env) -> i128 {
        allocation
            ::total_value(&env, &get_strategies(&env))
            .unwrap_or_else(|error| panic_with_error!(&env, error))
    }

    // ################################################################
    //                               USER
    // ################################################################

    fn deposit(env: Env, user: Address, amount: i128) -> Result<i128, ErrorCode> {
        user.require_auth();

        let config = get_config(&env);
        require_active(&env)?;

        validate!(&env, amount > 0, ErrorCode::InvalidAmount, "Banker: Deposit: Invalid amount")?;

        let treasury = AddressManagerClient::new(&env, &config.address_manager).query_treasury();
        validate!(
            &env,
            TokenAllowlistClient::new(&env, &treasury).is_allowed_token(&config.base_asset),
            ErrorCode::TokenNotAllowed,
            "Banker: Deposit: treasury does not accept the base asset"
        )?;

        let total_asset_value = allocation::total_value(&env, &get_strategies(&env))?;
        let pool_value = pool::pool_value(&env, total_asset_value, get_pending_redemptions(&env))?;
        let total_shares = get_total_shares(&env);

        let shares = pool::shares_for_deposit(&env, amount, total_shares, pool_value)?;
        validate!(
            &env,
            shares > 0,
            ErrorCode::InvalidAmount,
            "Banker: Deposit: amount too small to mint a share"
        )?;

        save_shares(&env, &user, get_shares(&env, &user).safe_add(shares, &env)?);
        save_total_shares(&env, total_shares.safe_add(shares, &env)?);

        token::Client::new(&env, &config.base_asset).transfer(&user, &treasury, &amount);

        let governance_mint = bps_of(&env, amount, config.mint_deposit_percentage)?;
        BankerEvents::deposit(&env, user, amount, shares, governance_mint);

        Ok(shares)
    }

    fn request_redemption(env: Env, user: Address, amount: i128) -> Result<u64, ErrorCode> {
        user.require_auth();

        let config = get_config(&env);

        validate!(
            &env,
            amount > 0,
            ErrorCode::InvalidAmount,
            "Banker: Request Redemption: Invalid amount"
        )?;

        let total_asset_value = allocation::total_value(&env, &get_strategies(&env))?;
        let pending = get_pending_redemptions(&env);
        let pool_value = pool::pool_value(&env, total_asset_value, pending)?;
        let total_shares = get_total_shares(&env);

        let shares = pool::shares_for_redemption(&env, amount, total_shares, pool_value)?;
        let user_shares = get_shares(&env, &user);
        validate!(
            &env,
            shares <= user_shares,
            ErrorCode::InsufficientShares,
            "Banker: Request Redemption: shares should be lower than user shares"
        )?;

        save_shares(&env, &user, user_shares.safe_sub(shares, &env)?);
        save_total_shares(&env, total_shares.safe_sub(shares, &env)?);
        save_pending_redemptions(&env, pending.safe_add(amount, &env)?);

        let now = env.ledger().timestamp();
        let request = RedemptionRequest {
            id: next_redemption_id(&env)?,
            requester: user.clone(),
            amount,
            shares,
            requested_at: now,
            release_at: now.safe_add(config.redemption_delay_time, &env)?,
            fulfilled: false,
        };
        save_redemption(&env, &request);
        push_user_redemption(&env, &user, request.id)?;

        BankerEvents::request_redemption(
            &env,
            user,
            request.id,
            amount,
            shares,
            request.release_at
        );

        Ok(request.id)
    }

    fn claim_redemption(env: Env, user: Address, id: u64) -> Result<i128, ErrorCode> {
        user.require_auth();

        let config = get_config(&env);

        let mut request = get_redemption(&env, id).ok_or_else(|| {
            log!(&env, "Banker: Claim Redemption: unknown request {}", id);
            ErrorCode::RedemptionNotFound
        })?;

        validate!(
            &env,
            request.requester == user,
            ErrorCode::NotAuthorized,
            "Banker: Claim Redemption: request belongs to another user"
        )?;
        validate!(
            &env,
            !request.fulfilled,
            ErrorCode::RedemptionAlreadyFulfilled,
            "Banker: Claim Redemption: already fulfilled"
        )?;
        validate!(
            &env,
            env.ledger().timestamp() >= request.release_at,
            ErrorCode::RedemptionNotReleased,
            "Banker: Claim Redemption: released at {}",
            request.release_at
        )?;

        request.fulfilled = true;
        save_redemption(&env, &request);
        save_pending_redemptions(
            &env,
            get_pending_redemptions(&env).safe_sub(request.amount, &env)?
        );

        let treasury = AddressManagerClient::new(&env, &config.address_manager).query_treasury();
        StrategyClient::new(&env, &treasury).redeem(
            &env.current_contract_address(),
            &user,
            &request.amount
        );

        BankerEvents::claim_redemption(&env, user, id, request.amount);

        Ok(request.amount)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config {
        get_config(&env)
    }

    fn mint_deposit_percentage(env: Env) -> u32 {
        get_config(&env).mint_deposit_percentage
    }

    fn redemption_delay_time(env: Env) -> u64 {
        get_config(&env).redemption_delay_time
    }

    fn max_usd_interest_rate(env: Env) -> InterestRate {
        get_max_usd_interest_rate(&env)
    }

    fn query_strategies(env: Env) -> Vec<Address> {
        let mut addresses = Vec::new(&env);
        for entry in get_strategies(&env).iter() {
            addresses.push_back(entry.address);
        }
        addresses
    }

    fn query_strategy(env: Env, address: Address) -> Result<StrategyEntry, ErrorCode> {
        strategy_at(&env, &get_strategies(&env), &address).map(|(_, entry)| entry)
    }

    fn query_strategy_settings(env: Env, address: Address) -> Result<StrategySettings, ErrorCode> {
        strategy_at(&env, &get_strategies(&env), &address).map(|(_, entry)| entry.settings())
    }

    fn query_shares(env: Env, user: Address) -> i128 {
        get_shares(&env, &user)
    }

    fn query_total_shares(env: Env) -> i128 {
        get_total_shares(&env)
    }

    fn query_pending_redemptions(env: Env) -> i128 {
        get_pending_redemptions(&env)
    }

    fn query_redemption(env: Env, id: u64) -> Result<RedemptionRequest, ErrorCode> {
        get_redemption(&env, id).ok_or(ErrorCode::RedemptionNotFound)
    }

    fn query_user_redemption_count(env: Env, user: Address) -> u32 {
        get_user_redemption_count(&env, &user)
    }

    fn query_user_redemptions(env: Env, user: Address, start: u32, limit: u32) -> Vec<u64> {
        get_user_redemptions(&env, &user, start, limit)
    }
}

fn require_manager(env: &Env, sender: &Address) -> MaxosResult<Config> {
    sender.require_auth();

    validate!(
        env,
        is_initialized(env),
        ErrorCode::NotInitialized,
        "Banker: contract is not initialized"
    )?;

    let config = get_config(env);
    validate!(
        env,
        AddressManagerClient::new(env, &config.address_manager).is_manager(sender),
        ErrorCode::NotAuthorized,
        "Banker: No manager"
    )?;

    Ok(config)
}

fn require_active(env: &Env) -> MaxosResult {
    validate!(
        env,
        get_circuit_breaker(env) == CircuitBreaker::Off,
        ErrorCode::BankerSuspended,
        "Banker: suspended"
    )
}

/// A strategy may only leave the books once its value is within tolerance
/// of zero, otherwise its funds drop out of `total_asset_value`.
fn require_empty(env: &Env, address: &Address, tolerance: i128) -> MaxosResult {
    let value = StrategyClient::new(env, address).value_of();
    validate!(
        env,
        value <= tolerance,
        ErrorCode::StrategyNotEmpty,
        "Banker: strategy still holds {}",
        value
    )
}

fn strategy_at(
    env: &Env,
    strategies: &Vec<StrategyEntry>,
    address: &Address
) -> MaxosResult<(u32, StrategyEntry)> {
    match find_strategy(strategies, address) {
        Some(index) => Ok((index, strategies.get_unchecked(index))),
        None => {
            log!(env, "Banker: strategy not listed");
            Err(ErrorCode::StrategyNotFound)
        }
    }
}

/// Resolves every address in a batch update before anything is written.
fn validate_batch(
    env: &Env,
    strategies: &Vec<StrategyEntry>,
    addresses: &Vec<Address>,
    values: &Vec<u32>
) -> MaxosResult<Vec<u32>> {
    validate!(
        env,
        addresses.len() == values.len(),
        ErrorCode::MismatchedBatchLength,
        "Banker: {} addresses for {} values",
        addresses.len(),
        values.len()
    )?;

    let mut indexes = Vec::new(env);
    for (address, value) in addresses.iter().zip(values.iter()) {
        validate_bps!(env, value)?;
        let (index, _) = strategy_at(env, strategies, &address)?;
        indexes.push_back(index);
    }

    Ok(indexes)
}

fn emit_settings(env: &Env, entry: &StrategyEntry) {
    BankerEvents::strategy_settings(
        env,
        entry.address.clone(),
        entry.insurance_ap,
        entry.desired_asset_ap,
        entry.enabled
    );
}
