use maxos::error::ErrorCode;
use soroban_sdk::{ Address, Env, String, Vec };

use crate::storage::{ Config, InterestRate, RedemptionRequest, StrategyEntry, StrategySettings };

/// Allocator that owns the strategy list and moves pooled funds between the
/// treasury buffer and the strategies.
pub trait BankerTrait {
    fn initialize(
        env: Env,
        address_manager: Address,
        base_asset: Address,
        mint_deposit_percentage: u32,
        redemption_delay_time: u64
    ) -> Result<(), ErrorCode>;

    // Allows the manager to change the tunable parts of the configuration
    fn update_config(
        env: Env,
        sender: Address,
        mint_deposit_percentage: Option<u32>,
        redemption_delay_time: Option<u64>,
        rebalance_tolerance: Option<i128>
    ) -> Result<(), ErrorCode>;

    /// Manager sets the ceiling on the USD interest rate, in bps.
    fn set_max_usd_interest_rate(env: Env, sender: Address, interest_rate: u32) -> Result<(), ErrorCode>;

    // ################################################################
    //                         CIRCUIT BREAKER
    // ################################################################

    /// Trips the breaker. Deposits and `allocate` are rejected until
    /// `resume`; claims of released redemptions keep working.
    fn suspend(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn resume(env: Env, sender: Address) -> Result<(), ErrorCode>;

    fn is_suspended(env: Env) -> bool;

    // ################################################################
    //                            STRATEGIES
    // ################################################################

    #[allow(clippy::too_many_arguments)]
    fn add_strategy(
        env: Env,
        sender: Address,
        name: String,
        chain: String,
        address: Address,
        insurance_ap: u32,
        desired_asset_ap: u32,
        enabled: bool
    ) -> Result<(), ErrorCode>;

    /// Fails with `StrategyNotEmpty` while the strategy still holds more
    /// than the rebalance tolerance. Drain it first with a zero weight and
    /// `allocate`.
    fn remove_strategy(env: Env, sender: Address, address: Address) -> Result<(), ErrorCode>;

    /// Disabling is subject to the same emptiness check as removal.
    fn set_strategy_enabled(
        env: Env,
        sender: Address,
        address: Address,
        enabled: bool
    ) -> Result<(), ErrorCode>;

    /// Batch update. Nothing is written unless every entry is valid.
    fn set_insurance_aps(
        env: Env,
        sender: Address,
        addresses: Vec<Address>,
        insurance_aps: Vec<u32>
    ) -> Result<(), ErrorCode>;

    /// Batch update. The enabled weights need not sum to 10_000 here;
    /// `allocate` refuses to run until they do.
    fn set_desired_asset_aps(
        env: Env,
        sender: Address,
        addresses: Vec<Address>,
        desired_asset_aps: Vec<u32>
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                            ALLOCATION
    // ################################################################

    /// Moves funds between the treasury buffer and the other enabled
    /// strategies so each one ends within the rebalance tolerance of its
    /// desired share. Returns the amount of base asset moved.
    fn allocate(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    /// Sum of `value_of` over the enabled strategies.
    fn total_asset_value(env: Env) -> i128;

    // ################################################################
    //                               USER
    // ################################################################

    /// Transfers `amount` of base asset from `user` into the treasury and
    /// credits pool shares. Returns the shares minted. The treasury must
    /// list the base asset as an allowed token.
    fn deposit(env: Env, user: Address, amount: i128) -> Result<i128, ErrorCode>;

    /// Burns the pool shares worth `amount` and queues a claim that is
    /// released after the redemption delay. Returns the request id.
    fn request_redemption(env: Env, user: Address, amount: i128) -> Result<u64, ErrorCode>;

    /// Pays a released request out of the treasury.
    fn claim_redemption(env: Env, user: Address, id: u64) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_config(env: Env) -> Config;

    fn mint_deposit_percentage(env: Env) -> u32;

    fn redemption_delay_time(env: Env) -> u64;

    fn max_usd_interest_rate(env: Env) -> InterestRate;

    fn query_strategies(env: Env) -> Vec<Address>;

    fn query_strategy(env: Env, address: Address) -> Result<StrategyEntry, ErrorCode>;

    fn query_strategy_settings(env: Env, address: Address) -> Result<StrategySettings, ErrorCode>;

    fn query_shares(env: Env, user: Address) -> i128;

    fn query_total_shares(env: Env) -> i128;

    fn query_pending_redemptions(env: Env) -> i128;

    fn query_redemption(env: Env, id: u64) -> Result<RedemptionRequest, ErrorCode>;

    fn query_user_redemption_count(env: Env, user: Address) -> u32;

    /// Request ids of `user`, oldest first, starting at position `start`.
    /// At most 50 ids are returned per call.
    fn query_user_redemptions(env: Env, user: Address, start: u32, limit: u32) -> Vec<u64>;
}
