use soroban_sdk::{ Address, Env, Symbol };

pub struct TreasuryEvents {}

impl TreasuryEvents {
    /// Emitted when the treasury is initialized
    ///
    /// - topics - `["initialize", address_manager: Address]`
    /// - data - `base_asset: Address`
    pub fn initialize(env: &Env, address_manager: Address, base_asset: Address) {
        let topics = (Symbol::new(env, "initialize"), address_manager);
        env.events().publish(topics, base_asset);
    }

    /// Emitted when the banker acknowledges funds parked in the treasury
    ///
    /// - topics - `["invest"]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn invest(env: &Env, amount: i128, shares: i128) {
        env.events().publish((Symbol::new(env, "invest"),), (amount, shares));
    }

    /// Emitted when base asset leaves the treasury on behalf of the banker
    ///
    /// - topics - `["redeem", to: Address]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn redeem(env: &Env, to: Address, amount: i128, shares: i128) {
        let topics = (Symbol::new(env, "redeem"), to);
        env.events().publish(topics, (amount, shares));
    }

    /// Emitted when the manager adds or removes an accepted token
    ///
    /// - topics - `["allowlist", token: Address]`
    /// - data - `allowed: bool`
    pub fn allowlist(env: &Env, token: Address, allowed: bool) {
        let topics = (Symbol::new(env, "allowlist"), token);
        env.events().publish(topics, allowed);
    }
}
