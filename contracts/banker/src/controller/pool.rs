use maxos::{
    error::{ ErrorCode, MaxosResult },
    math::safe_math::{ mul_div_ceil, mul_div_floor, SafeMath },
    validate,
};
use soroban_sdk::Env;

/// Value backing outstanding pool shares: everything the enabled strategies
/// hold minus what is already owed to queued redemptions.
pub fn pool_value(env: &Env, total_asset_value: i128, pending_redemptions: i128) -> MaxosResult<i128> {
    Ok(total_asset_value.safe_sub(pending_redemptions, env)?.max(0))
}

/// Pool shares minted for a deposit of `amount`. The first depositor gets
/// one share per unit.
pub fn shares_for_deposit(
    env: &Env,
    amount: i128,
    total_shares: i128,
    pool_value: i128
) -> MaxosResult<i128> {
    if total_shares == 0 {
        return Ok(amount);
    }

    validate!(
        env,
        pool_value > 0,
        ErrorCode::InvalidPricePerShare,
        "Banker: Deposit: outstanding shares have no backing value"
    )?;

    mul_div_floor(env, amount, total_shares, pool_value)
}

/// Pool shares burned to redeem `amount`, rounded up so the remaining
/// holders never subsidise the redeemer.
pub fn shares_for_redemption(
    env: &Env,
    amount: i128,
    total_shares: i128,
    pool_value: i128
) -> MaxosResult<i128> {
    validate!(
        env,
        total_shares > 0 && pool_value > 0,
        ErrorCode::InsufficientShares,
        "Banker: Redemption: pool is empty"
    )?;

    mul_div_ceil(env, amount, total_shares, pool_value)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(1_000, 0, 0, 1_000 ; "first deposit is one to one")]
    #[test_case(1_000, 1_000, 1_000, 1_000 ; "flat price")]
    #[test_case(1_000, 1_000, 2_000, 500 ; "pool doubled")]
    #[test_case(20_000_000_000, 10_000_000_000, 9_999_999_999, 20_000_000_002 ; "rounding loss")]
    fn deposit_shares(amount: i128, total_shares: i128, pool_value: i128, expected: i128) {
        let env = Env::default();
        assert_eq!(shares_for_deposit(&env, amount, total_shares, pool_value), Ok(expected));
    }

    #[test]
    fn deposit_into_worthless_pool() {
        let env = Env::default();
        assert_eq!(
            shares_for_deposit(&env, 1_000, 1_000, 0),
            Err(ErrorCode::InvalidPricePerShare)
        );
    }

    #[test]
    fn redemption_rounds_up() {
        let env = Env::default();
        assert_eq!(shares_for_redemption(&env, 1_000, 1_000, 3_000), Ok(334));
        assert_eq!(shares_for_redemption(&env, 1_000, 0, 0), Err(ErrorCode::InsufficientShares));
    }

    #[test]
    fn pending_redemptions_reduce_pool_value() {
        let env = Env::default();
        assert_eq!(pool_value(&env, 1_000, 400), Ok(600));
        assert_eq!(pool_value(&env, 100, 400), Ok(0));
    }
}
