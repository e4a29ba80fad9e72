use soroban_sdk::{ contractclient, Address, Env };

use crate::error::ErrorCode;

/// Capability set every destination for pooled funds exposes to the Banker.
///
/// Mutating calls must come from the banker bound in the address manager;
/// any other `sender` is rejected with `ErrorCode::NotAuthorized`. All
/// amounts are in base asset units.
#[contractclient(name = "StrategyClient")]
pub trait StrategyTrait {
    /// Deploys `amount` of the strategy's free base asset balance into its
    /// destination and returns the number of internal shares minted.
    ///
    /// ### Errors
    /// * `InvalidAmount` if `amount <= 0`
    /// * `InsufficientBalance` if `amount` exceeds the free balance
    /// * `DepositLimitExceeded` if `amount` exceeds `max_invest()`
    fn invest(env: Env, sender: Address, amount: i128) -> Result<i128, ErrorCode>;

    /// Pulls `amount` of base asset out of the destination, sends it to `to`
    /// and returns the number of internal shares burned.
    ///
    /// ### Errors
    /// * `InvalidAmount` if `amount <= 0`
    /// * `InsufficientShares` if `amount` implies more shares than held
    fn redeem(env: Env, sender: Address, to: Address, amount: i128) -> Result<i128, ErrorCode>;

    /// Current value of every share held, in base asset units.
    fn value_of(env: Env) -> i128;

    /// Total outstanding internal shares.
    fn shares_of(env: Env) -> i128;

    /// Largest amount `invest` currently accepts from the external side.
    fn max_invest(env: Env) -> i128;
}
