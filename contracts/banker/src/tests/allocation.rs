use maxos::error::ErrorCode;
use pretty_assertions::assert_eq;

use super::setup::{ setup, BankerTest };

/// Assert `actual` sits within the default rebalance tolerance of `expected`.
fn assert_close(actual: i128, expected: i128) {
    assert!(
        (actual - expected).abs() <= 10,
        "expected {} to be within tolerance of {}",
        actual,
        expected
    );
}

fn deposit_and_allocate(test: &BankerTest, amount: i128) -> i128 {
    test.banker.deposit(&test.user, &amount);
    test.banker.allocate(&test.manager)
}

#[test]
fn allocate_everything_into_the_vault() {
    let test = setup();

    let moved = deposit_and_allocate(&test, 10_000_000_000);

    assert_eq!(moved, 10_000_000_000);
    assert_eq!(test.treasury.value_of(), 0);
    assert_eq!(test.strategy.value_of(), 9_999_999_999);
    assert_close(test.banker.total_asset_value(), 10_000_000_000);
}

#[test]
fn second_allocate_moves_nothing() {
    let test = setup();

    deposit_and_allocate(&test, 10_000_000_000);

    assert_eq!(test.banker.allocate(&test.manager), 0);
    assert_eq!(test.strategy.value_of(), 9_999_999_999);
}

#[test]
fn allocate_follows_weight_changes() {
    let test = setup();

    deposit_and_allocate(&test, 10_000_000_000);

    test.banker.deposit(&test.user, &20_000_000_000);
    test.set_weights(2_500, 7_500);
    assert_eq!(test.banker.allocate(&test.manager), 12_500_000_000);

    assert_eq!(test.treasury.value_of(), 7_500_000_000);
    assert_eq!(test.strategy.value_of(), 22_499_999_998);
    assert_close(test.treasury.value_of(), 7_500_000_000);
    assert_close(test.strategy.value_of(), 22_500_000_000);

    // Vault now above target: drained back into the treasury.
    test.set_weights(5_000, 5_000);
    assert_eq!(test.banker.allocate(&test.manager), 7_499_999_999);

    assert_eq!(test.treasury.value_of(), 14_999_999_999);
    assert_eq!(test.strategy.value_of(), 14_999_999_999);
    assert_close(test.banker.total_asset_value(), 30_000_000_000);
}

#[test]
fn allocate_stops_at_the_vault_deposit_limit() {
    let test = setup();
    test.vault.set_deposit_cap(&5_000_000_000);

    assert_eq!(deposit_and_allocate(&test, 10_000_000_000), 5_000_000_000);

    assert_eq!(test.treasury.value_of(), 5_000_000_000);
    assert_eq!(test.strategy.value_of(), 4_999_999_999);
    assert_eq!(test.strategy.max_invest(), 0);

    // Still short of target, but there is no capacity left.
    assert_eq!(test.banker.allocate(&test.manager), 0);
}

#[test]
fn allocate_keeps_pending_redemptions_in_the_treasury() {
    let test = setup();

    test.banker.deposit(&test.user, &10_000_000_000);
    test.banker.request_redemption(&test.user, &4_000_000_000);

    assert_eq!(test.banker.allocate(&test.manager), 6_000_000_000);
    assert_eq!(test.treasury.value_of(), 4_000_000_000);
    assert_eq!(test.strategy.value_of(), 5_999_999_999);
}

#[test]
fn allocate_requires_full_desired_weights() {
    let test = setup();
    test.banker.deposit(&test.user, &1_000_000);

    test.set_weights(0, 5_000);
    assert_eq!(test.banker.try_allocate(&test.manager), Err(Ok(ErrorCode::InvalidAllocationTotal)));

    test.set_weights(5_000, 6_000);
    assert_eq!(test.banker.try_allocate(&test.manager), Err(Ok(ErrorCode::InvalidAllocationTotal)));
}

#[test]
fn disabled_strategies_do_not_count_towards_weights() {
    let test = setup();
    test.banker.deposit(&test.user, &1_000_000);

    test.set_weights(10_000, 10_000);
    assert_eq!(test.banker.try_allocate(&test.manager), Err(Ok(ErrorCode::InvalidAllocationTotal)));

    test.banker.set_strategy_enabled(&test.manager, &test.strategy.address, &false);
    assert_eq!(test.banker.allocate(&test.manager), 0);
    assert_eq!(test.treasury.value_of(), 1_000_000);
}

#[test]
fn allocate_without_the_treasury_should_fail() {
    let test = setup();

    test.banker.set_strategy_enabled(&test.manager, &test.treasury.address, &false);
    assert_eq!(test.banker.try_allocate(&test.manager), Err(Ok(ErrorCode::TreasuryNotListed)));

    test.banker.remove_strategy(&test.manager, &test.treasury.address);
    assert_eq!(test.banker.try_allocate(&test.manager), Err(Ok(ErrorCode::TreasuryNotListed)));
}

#[test]
fn allocate_while_suspended_should_fail() {
    let test = setup();
    test.banker.deposit(&test.user, &1_000_000);

    test.banker.suspend(&test.manager);
    assert_eq!(test.banker.try_allocate(&test.manager), Err(Ok(ErrorCode::BankerSuspended)));

    test.banker.resume(&test.manager);
    assert_eq!(test.banker.allocate(&test.manager), 1_000_000);
}

#[test]
fn allocate_by_non_manager_should_fail() {
    let test = setup();

    assert_eq!(test.banker.try_allocate(&test.user), Err(Ok(ErrorCode::NotAuthorized)));
}

#[test]
fn drift_within_tolerance_is_left_alone() {
    let test = setup();

    deposit_and_allocate(&test, 10_000_000_000);
    test.banker.update_config(&test.manager, &None, &None, &Some(1_000_000));

    test.banker.deposit(&test.user, &500_000);
    assert_eq!(test.banker.allocate(&test.manager), 0);
    assert_eq!(test.treasury.value_of(), 500_000);
}

#[test]
fn one_allocate_drains_surplus_and_fills_deficit() {
    let test = setup();
    let (_, second) = test.add_vault_strategy("Second vault");

    deposit_and_allocate(&test, 10_000_000_000);
    assert_eq!(test.strategy.value_of(), 9_999_999_999);
    assert_eq!(second.value_of(), 0);

    test.set_desired(&[
        (&test.treasury.address, 0),
        (&test.strategy.address, 5_000),
        (&second.address, 5_000),
    ]);
    assert_eq!(test.banker.allocate(&test.manager), 9_999_999_999);

    assert_eq!(test.strategy.value_of(), 4_999_999_999);
    assert_eq!(second.value_of(), 4_999_999_998);
    assert_eq!(test.treasury.value_of(), 1);

    assert_eq!(test.banker.allocate(&test.manager), 0);
}

#[test]
fn short_buffer_fills_deficits_in_list_order() {
    let test = setup();
    let (_, first) = test.add_vault_strategy("First vault");
    let (_, second) = test.add_vault_strategy("Second vault");

    deposit_and_allocate(&test, 10_000_000_000);

    // Draining the primary vault now returns 10% less than it is valued at.
    test.vault.set_withdraw_fee(&1_000);
    test.set_desired(&[
        (&test.treasury.address, 0),
        (&test.strategy.address, 0),
        (&first.address, 5_000),
        (&second.address, 5_000),
    ]);

    assert_eq!(test.banker.allocate(&test.manager), 18_999_999_999);

    assert_eq!(test.strategy.value_of(), 0);
    assert_eq!(test.treasury.value_of(), 0);
    // First in line gets its whole target, the second what is left.
    assert_eq!(first.value_of(), 4_999_999_998);
    assert_eq!(second.value_of(), 4_000_000_000);
}
