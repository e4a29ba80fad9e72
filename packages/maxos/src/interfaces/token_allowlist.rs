use soroban_sdk::{ contractclient, Address, Env, Vec };

use crate::error::ErrorCode;

/// Tokens a custodian accepts. The treasury implements it and the banker
/// checks it before routing a deposit there.
#[contractclient(name = "TokenAllowlistClient")]
pub trait TokenAllowlistTrait {
    /// Manager only. Fails with `TokenAlreadyAllowed` if listed.
    fn allow_token(env: Env, sender: Address, token: Address) -> Result<(), ErrorCode>;

    /// Manager only. Fails with `TokenNotAllowed` if not listed.
    fn disallow_token(env: Env, sender: Address, token: Address) -> Result<(), ErrorCode>;

    fn is_allowed_token(env: Env, token: Address) -> bool;

    fn query_allowed_tokens(env: Env) -> Vec<Address>;
}
