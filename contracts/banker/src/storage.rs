use maxos::{
    constants::{
        INSTANCE_BUMP_AMOUNT,
        INSTANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ ErrorCode, MaxosResult },
    math::safe_math::SafeMath,
};
use soroban_sdk::{ contracttype, log, panic_with_error, Address, Env, String, Vec };

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Initialized,
    Config,
    MaxUsdInterestRate,
    CircuitBreaker,
    Strategies,
    TotalShares,
    Shares(Address),
    PendingRedemptions,
    NextRedemptionId,
    Redemption(u64),
    UserRedemptionCount(Address),
    UserRedemption(Address, u32),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub address_manager: Address,
    pub base_asset: Address,
    /// Share of each deposit (bps) reported for governance token minting
    pub mint_deposit_percentage: u32,
    /// Seconds between a redemption request and its release
    pub redemption_delay_time: u64,
    /// Drift (base asset units) `allocate` leaves alone
    pub rebalance_tolerance: i128,
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
            log!(env, "Banker: Config not set");
            panic_with_error!(env, ErrorCode::NotInitialized)
        });
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    config
}

/// Ceiling on the USD interest rate paid to depositors, in bps.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterestRate {
    pub interest_rate: u32,
    /// Ledger timestamp of the last change
    pub updated_at: u64,
}

pub fn save_max_usd_interest_rate(env: &Env, rate: &InterestRate) {
    env.storage().instance().set(&DataKey::MaxUsdInterestRate, rate);
}

pub fn get_max_usd_interest_rate(env: &Env) -> InterestRate {
    env.storage()
        .instance()
        .get(&DataKey::MaxUsdInterestRate)
        .unwrap_or(InterestRate {
            interest_rate: 0,
            updated_at: 0,
        })
}

/// `On` means the breaker has tripped and the banker is suspended.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CircuitBreaker {
    On,
    Off,
}

pub fn save_circuit_breaker(env: &Env, circuit_breaker: CircuitBreaker) {
    env.storage().instance().set(&DataKey::CircuitBreaker, &circuit_breaker);
}

pub fn get_circuit_breaker(env: &Env) -> CircuitBreaker {
    env.storage().instance().get(&DataKey::CircuitBreaker).unwrap_or(CircuitBreaker::Off)
}

// ################################################################
//                            Strategies
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyEntry {
    pub address: Address,
    pub name: String,
    pub chain: String,
    /// Capital preservation share in bps. Recorded, not enforced.
    pub insurance_ap: u32,
    /// Target share of the pool in bps
    pub desired_asset_ap: u32,
    pub enabled: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StrategySettings {
    pub insurance_ap: u32,
    pub desired_asset_ap: u32,
}

impl StrategyEntry {
    pub fn settings(&self) -> StrategySettings {
        StrategySettings {
            insurance_ap: self.insurance_ap,
            desired_asset_ap: self.desired_asset_ap,
        }
    }
}

pub fn save_strategies(env: &Env, strategies: &Vec<StrategyEntry>) {
    env.storage().persistent().set(&DataKey::Strategies, strategies);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Strategies, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_strategies(env: &Env) -> Vec<StrategyEntry> {
    let strategies = env
        .storage()
        .persistent()
        .get(&DataKey::Strategies)
        .unwrap_or_else(|| Vec::new(env));
    env.storage()
        .persistent()
        .has(&DataKey::Strategies)
        .then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&DataKey::Strategies, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
        });

    strategies
}

pub fn find_strategy(strategies: &Vec<StrategyEntry>, address: &Address) -> Option<u32> {
    strategies
        .iter()
        .position(|entry| entry.address == *address)
        .map(|index| index as u32)
}

// ################################################################
//                           Pool shares
// ################################################################

pub fn get_total_shares(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalShares).unwrap_or(0)
}

pub fn save_total_shares(env: &Env, total_shares: i128) {
    env.storage().instance().set(&DataKey::TotalShares, &total_shares);
}

pub fn get_shares(env: &Env, user: &Address) -> i128 {
    let key = DataKey::Shares(user.clone());
    let shares = env.storage().persistent().get(&key).unwrap_or(0);
    env.storage()
        .persistent()
        .has(&key)
        .then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
        });

    shares
}

pub fn save_shares(env: &Env, user: &Address, shares: i128) {
    let key = DataKey::Shares(user.clone());
    env.storage().persistent().set(&key, &shares);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                           Redemptions
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedemptionRequest {
    pub id: u64,
    pub requester: Address,
    /// Base asset owed to the requester
    pub amount: i128,
    /// Pool shares burned when the request was made
    pub shares: i128,
    pub requested_at: u64,
    pub release_at: u64,
    pub fulfilled: bool,
}

/// Base asset owed to requests that have not been claimed yet.
pub fn get_pending_redemptions(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::PendingRedemptions).unwrap_or(0)
}

pub fn save_pending_redemptions(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::PendingRedemptions, &amount);
}

pub fn next_redemption_id(env: &Env) -> MaxosResult<u64> {
    let id: u64 = env.storage().instance().get(&DataKey::NextRedemptionId).unwrap_or(0);
    env.storage().instance().set(&DataKey::NextRedemptionId, &id.safe_add(1, env)?);
    Ok(id)
}

pub fn save_redemption(env: &Env, request: &RedemptionRequest) {
    let key = DataKey::Redemption(request.id);
    env.storage().persistent().set(&key, request);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_redemption(env: &Env, id: u64) -> Option<RedemptionRequest> {
    let key = DataKey::Redemption(id);
    let request = env.storage().persistent().get(&key);
    if request.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    request
}

// A user's request ids live one per entry, so the history grows without
// rewriting a single ever-larger value. Read them back in pages.

/// Most ids `get_user_redemptions` returns in one call.
pub const MAX_REDEMPTIONS_PAGE: u32 = 50;

pub fn get_user_redemption_count(env: &Env, user: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::UserRedemptionCount(user.clone()))
        .unwrap_or(0)
}

pub fn push_user_redemption(env: &Env, user: &Address, id: u64) -> MaxosResult {
    let count = get_user_redemption_count(env, user);

    let entry_key = DataKey::UserRedemption(user.clone(), count);
    env.storage().persistent().set(&entry_key, &id);
    env.storage()
        .persistent()
        .extend_ttl(&entry_key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    let count_key = DataKey::UserRedemptionCount(user.clone());
    env.storage().persistent().set(&count_key, &count.safe_add(1, env)?);
    env.storage()
        .persistent()
        .extend_ttl(&count_key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(())
}

/// Request ids of `user` from position `start`, oldest first, at most
/// `min(limit, MAX_REDEMPTIONS_PAGE)` of them.
pub fn get_user_redemptions(env: &Env, user: &Address, start: u32, limit: u32) -> Vec<u64> {
    let count = get_user_redemption_count(env, user);
    let end = start.saturating_add(limit.min(MAX_REDEMPTIONS_PAGE)).min(count);

    let mut ids = Vec::new(env);
    for index in start..end {
        if let Some(id) = env.storage().persistent().get(&DataKey::UserRedemption(user.clone(), index)) {
            ids.push_back(id);
        }
    }
    ids
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
