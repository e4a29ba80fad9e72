use maxos::{
    constants::MAX_BPS,
    error::{ ErrorCode, MaxosResult },
    interfaces::strategy::StrategyClient,
    math::safe_math::{ bps_of, SafeMath },
    validate,
};
use soroban_sdk::{ contracttype, log, Address, Env, Vec };

use crate::{ events::BankerEvents, storage::StrategyEntry };

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub address: Address,
    pub current: i128,
    pub target: i128,
}

impl Position {
    /// Positive when the strategy holds more than its target.
    pub fn drift(&self) -> i128 {
        self.current - self.target
    }
}

pub fn enabled_strategies(env: &Env, strategies: &Vec<StrategyEntry>) -> Vec<StrategyEntry> {
    let mut enabled = Vec::new(env);
    for entry in strategies.iter() {
        if entry.enabled {
            enabled.push_back(entry);
        }
    }
    enabled
}

pub fn total_value(env: &Env, strategies: &Vec<StrategyEntry>) -> MaxosResult<i128> {
    let mut total: i128 = 0;
    for entry in strategies.iter() {
        if entry.enabled {
            let value = StrategyClient::new(env, &entry.address).value_of();
            total = total.safe_add(value, env)?;
        }
    }
    Ok(total)
}

pub fn validate_allocation(
    env: &Env,
    enabled: &Vec<StrategyEntry>,
    treasury: &Address
) -> MaxosResult {
    let mut desired_total: u32 = 0;
    for entry in enabled.iter() {
        desired_total = desired_total.safe_add(entry.desired_asset_ap, env)?;
    }

    validate!(
        env,
        desired_total == MAX_BPS,
        ErrorCode::InvalidAllocationTotal,
        "Banker: Allocate: enabled desired asset APs sum to {} bps",
        desired_total
    )?;
    validate!(
        env,
        enabled.iter().any(|entry| entry.address == *treasury),
        ErrorCode::TreasuryNotListed,
        "Banker: Allocate: treasury is not an enabled strategy"
    )
}

/// Reads every enabled strategy's value and derives its target. `reserve`
/// is held back from the split and added to the treasury's target.
pub fn plan(
    env: &Env,
    enabled: &Vec<StrategyEntry>,
    treasury: &Address,
    reserve: i128
) -> MaxosResult<(i128, Vec<Position>)> {
    let mut total: i128 = 0;
    let mut currents: Vec<i128> = Vec::new(env);
    for entry in enabled.iter() {
        let current = StrategyClient::new(env, &entry.address).value_of();
        total = total.safe_add(current, env)?;
        currents.push_back(current);
    }

    let reserve = reserve.max(0).min(total);
    let distributable = total.safe_sub(reserve, env)?;

    let mut positions = Vec::new(env);
    for (entry, current) in enabled.iter().zip(currents.iter()) {
        let mut target = bps_of(env, distributable, entry.desired_asset_ap)?;
        if entry.address == *treasury {
            target = target.safe_add(reserve, env)?;
        }
        positions.push_back(Position {
            address: entry.address,
            current,
            target,
        });
    }

    Ok((total, positions))
}

/// Size of the next investment. Anything at or below `tolerance` is left
/// for a later pass.
pub fn invest_amount(deficit: i128, available: i128, max_invest: i128, tolerance: i128) -> i128 {
    let amount = deficit.min(available).min(max_invest);
    if amount > tolerance {
        amount
    } else {
        0
    }
}

/// Two passes through the treasury: strategies above target are drained
/// into it, then strategies below target are filled from it in list order.
/// Returns the total amount moved.
pub fn rebalance(
    env: &Env,
    positions: &Vec<Position>,
    treasury: &Address,
    reserve: i128,
    tolerance: i128
) -> MaxosResult<i128> {
    let banker = env.current_contract_address();
    let mut moved: i128 = 0;

    for position in positions.iter() {
        if position.address == *treasury {
            continue;
        }

        let surplus = position.drift();
        if surplus > tolerance {
            StrategyClient::new(env, &position.address).redeem(&banker, treasury, &surplus);
            BankerEvents::rebalance(env, position.address.clone(), treasury.clone(), surplus);
            moved = moved.safe_add(surplus, env)?;
        }
    }

    let buffer = StrategyClient::new(env, treasury);
    let mut available = buffer.value_of().safe_sub(reserve.max(0), env)?.max(0);

    for position in positions.iter() {
        if position.address == *treasury {
            continue;
        }

        let deficit = -position.drift();
        if deficit <= tolerance {
            continue;
        }

        let strategy = StrategyClient::new(env, &position.address);
        let amount = invest_amount(deficit, available, strategy.max_invest(), tolerance);
        if amount == 0 {
            log!(env, "Banker: Allocate: {} left below target, no liquidity or capacity", position.address);
            continue;
        }

        buffer.redeem(&banker, &position.address, &amount);
        strategy.invest(&banker, &amount);
        BankerEvents::rebalance(env, treasury.clone(), position.address.clone(), amount);

        available = available.safe_sub(amount, env)?;
        moved = moved.safe_add(amount, env)?;
    }

    Ok(moved)
}

#[cfg(test)]
mod test {
    use super::invest_amount;
    use test_case::test_case;

    #[test_case(500, 1_000, 1_000, 10, 500 ; "deficit fits")]
    #[test_case(500, 300, 1_000, 10, 300 ; "capped by liquidity")]
    #[test_case(500, 1_000, 200, 10, 200 ; "capped by deposit limit")]
    #[test_case(500, 1_000, 5, 10, 0 ; "capacity within tolerance")]
    #[test_case(500, 0, 1_000, 10, 0 ; "empty buffer")]
    fn investment_size(deficit: i128, available: i128, max_invest: i128, tolerance: i128, expected: i128) {
        assert_eq!(invest_amount(deficit, available, max_invest, tolerance), expected);
    }
}
