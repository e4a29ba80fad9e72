use soroban_sdk::{ Address, Env, Symbol };

pub struct VaultStrategyEvents {}

impl VaultStrategyEvents {
    /// Emitted when the strategy is initialized
    ///
    /// - topics - `["initialize", vault: Address]`
    /// - data - `[base_asset: Address, price_scale: i128]`
    pub fn initialize(env: &Env, vault: Address, base_asset: Address, price_scale: i128) {
        let topics = (Symbol::new(env, "initialize"), vault);
        env.events().publish(topics, (base_asset, price_scale));
    }

    /// Emitted when base asset is deployed into the vault
    ///
    /// - topics - `["invest"]`
    /// - data - `[amount: i128, shares: i128, price_per_share: i128, total_shares: i128]`
    pub fn invest(env: &Env, amount: i128, shares: i128, price_per_share: i128, total_shares: i128) {
        env.events().publish((Symbol::new(env, "invest"),), (
            amount,
            shares,
            price_per_share,
            total_shares,
        ));
    }

    /// Emitted when base asset is pulled out of the vault
    ///
    /// - topics - `["redeem", to: Address]`
    /// - data - `[amount: i128, shares: i128, price_per_share: i128, total_shares: i128]`
    pub fn redeem(
        env: &Env,
        to: Address,
        amount: i128,
        shares: i128,
        price_per_share: i128,
        total_shares: i128
    ) {
        let topics = (Symbol::new(env, "redeem"), to);
        env.events().publish(topics, (amount, shares, price_per_share, total_shares));
    }
}
