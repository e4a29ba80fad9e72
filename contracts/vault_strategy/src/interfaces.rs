use soroban_sdk::{ contractclient, Address, Env };

/// Share-priced external vault wrapped by the strategy (Yearn-style).
///
/// `price_per_share` is the base asset value of one vault share scaled by
/// `10^decimals()`.
#[contractclient(name = "VaultClient")]
pub trait VaultTrait {
    /// Pulls `amount` of the base asset from `from` and returns the vault
    /// shares minted to it.
    fn deposit(env: Env, from: Address, amount: i128) -> i128;

    /// Burns `shares` owned by `owner` and sends the redeemed base asset to
    /// `to`. Returns the amount of base asset sent.
    fn withdraw(env: Env, owner: Address, to: Address, shares: i128) -> i128;

    fn price_per_share(env: Env) -> i128;

    /// Remaining room under the vault's deposit ceiling.
    fn available_deposit_limit(env: Env) -> i128;

    fn decimals(env: Env) -> u32;
}
