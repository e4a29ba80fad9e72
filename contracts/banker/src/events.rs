use soroban_sdk::{ Address, Env, String, Symbol };

pub struct BankerEvents {}

impl BankerEvents {
    /// Emitted when the banker is initialized
    ///
    /// - topics - `["initialize", address_manager: Address]`
    /// - data - `base_asset: Address`
    pub fn initialize(env: &Env, address_manager: Address, base_asset: Address) {
        let topics = (Symbol::new(env, "initialize"), address_manager);
        env.events().publish(topics, base_asset);
    }

    /// Emitted when the manager changes the configuration
    ///
    /// - topics - `["update_config"]`
    /// - data - `[mint_deposit_percentage: u32, redemption_delay_time: u64, rebalance_tolerance: i128]`
    pub fn update_config(
        env: &Env,
        mint_deposit_percentage: u32,
        redemption_delay_time: u64,
        rebalance_tolerance: i128
    ) {
        env.events().publish(
            (Symbol::new(env, "update_config"),),
            (mint_deposit_percentage, redemption_delay_time, rebalance_tolerance)
        );
    }

    /// Emitted when the manager changes the USD interest rate ceiling
    ///
    /// - topics - `["max_usd_interest_rate"]`
    /// - data - `interest_rate: u32`
    pub fn max_usd_interest_rate(env: &Env, interest_rate: u32) {
        env.events().publish((Symbol::new(env, "max_usd_interest_rate"),), interest_rate);
    }

    /// Emitted when the circuit breaker changes state
    ///
    /// - topics - `["circuit_breaker", sender: Address]`
    /// - data - `suspended: bool`
    pub fn circuit_breaker(env: &Env, sender: Address, suspended: bool) {
        let topics = (Symbol::new(env, "circuit_breaker"), sender);
        env.events().publish(topics, suspended);
    }

    /// Emitted when a strategy is listed
    ///
    /// - topics - `["add_strategy", address: Address]`
    /// - data - `[name: String, chain: String, insurance_ap: u32, desired_asset_ap: u32]`
    pub fn add_strategy(
        env: &Env,
        address: Address,
        name: String,
        chain: String,
        insurance_ap: u32,
        desired_asset_ap: u32
    ) {
        let topics = (Symbol::new(env, "add_strategy"), address);
        env.events().publish(topics, (name, chain, insurance_ap, desired_asset_ap));
    }

    /// Emitted when a strategy is delisted
    ///
    /// - topics - `["remove_strategy", address: Address]`
    /// - data - `()`
    pub fn remove_strategy(env: &Env, address: Address) {
        let topics = (Symbol::new(env, "remove_strategy"), address);
        env.events().publish(topics, ());
    }

    /// Emitted when a strategy's settings change
    ///
    /// - topics - `["strategy_settings", address: Address]`
    /// - data - `[insurance_ap: u32, desired_asset_ap: u32, enabled: bool]`
    pub fn strategy_settings(
        env: &Env,
        address: Address,
        insurance_ap: u32,
        desired_asset_ap: u32,
        enabled: bool
    ) {
        let topics = (Symbol::new(env, "strategy_settings"), address);
        env.events().publish(topics, (insurance_ap, desired_asset_ap, enabled));
    }

    /// Emitted for every transfer `allocate` performs
    ///
    /// - topics - `["rebalance", from: Address, to: Address]`
    /// - data - `amount: i128`
    pub fn rebalance(env: &Env, from: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "rebalance"), from, to);
        env.events().publish(topics, amount);
    }

    /// Emitted once `allocate` finishes
    ///
    /// - topics - `["allocate"]`
    /// - data - `[total_asset_value: i128, moved: i128]`
    pub fn allocate(env: &Env, total_asset_value: i128, moved: i128) {
        env.events().publish((Symbol::new(env, "allocate"),), (total_asset_value, moved));
    }

    /// Emitted when a user deposits. `governance_mint` is the part of the
    /// deposit earmarked for governance token minting.
    ///
    /// - topics - `["deposit", user: Address]`
    /// - data - `[amount: i128, shares: i128, governance_mint: i128]`
    pub fn deposit(env: &Env, user: Address, amount: i128, shares: i128, governance_mint: i128) {
        let topics = (Symbol::new(env, "deposit"), user);
        env.events().publish(topics, (amount, shares, governance_mint));
    }

    /// Emitted when a redemption is queued
    ///
    /// - topics - `["request_redemption", user: Address]`
    /// - data - `[id: u64, amount: i128, shares: i128, release_at: u64]`
    pub fn request_redemption(
        env: &Env,
        user: Address,
        id: u64,
        amount: i128,
        shares: i128,
        release_at: u64
    ) {
        let topics = (Symbol::new(env, "request_redemption"), user);
        env.events().publish(topics, (id, amount, shares, release_at));
    }

    /// Emitted when a released redemption is paid
    ///
    /// - topics - `["claim_redemption", user: Address]`
    /// - data - `[id: u64, amount: i128]`
    pub fn claim_redemption(env: &Env, user: Address, id: u64, amount: i128) {
        let topics = (Symbol::new(env, "claim_redemption"), user);
        env.events().publish(topics, (id, amount));
    }
}
