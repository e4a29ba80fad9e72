use maxos::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, Address };

use super::setup::setup;
use crate::storage::Config;

#[test]
fn treasury_successfully_inits_itself() {
    let test = setup();

    assert_eq!(test.treasury.query_config(), Config {
        address_manager: test.address_manager.address.clone(),
        base_asset: test.token.address.clone(),
    });
    assert_eq!(test.treasury.shares_of(), 0);
    assert_eq!(test.treasury.value_of(), 0);
}

#[test]
fn initializing_treasury_twice_should_fail() {
    let test = setup();

    assert_eq!(
        test.treasury.try_initialize(&test.address_manager.address, &test.token.address),
        Err(Ok(ErrorCode::AlreadyInitialized))
    );
}

#[test]
fn value_tracks_the_base_asset_balance_one_to_one() {
    let test = setup();

    test.token_admin.mint(&test.treasury.address, &1_000_000);

    assert_eq!(test.treasury.value_of(), 1_000_000);
    assert_eq!(test.treasury.shares_of(), 1_000_000);
    assert_eq!(test.treasury.max_invest(), i128::MAX);
}

#[test]
fn only_banker_can_invest_or_redeem() {
    let test = setup();
    let user = Address::generate(&test.env);
    test.token_admin.mint(&test.treasury.address, &1_000);

    assert_eq!(test.treasury.try_invest(&user, &1), Err(Ok(ErrorCode::NotAuthorized)));
    assert_eq!(test.treasury.try_invest(&test.manager, &1), Err(Ok(ErrorCode::NotAuthorized)));
    assert_eq!(test.treasury.try_redeem(&user, &user, &1), Err(Ok(ErrorCode::NotAuthorized)));
    assert_eq!(test.token.balance(&user), 0);
}

#[test]
fn invest_validates_amount() {
    let test = setup();
    test.token_admin.mint(&test.treasury.address, &1_000);

    assert_eq!(test.treasury.try_invest(&test.banker, &0), Err(Ok(ErrorCode::InvalidAmount)));
    assert_eq!(test.treasury.try_invest(&test.banker, &-5), Err(Ok(ErrorCode::InvalidAmount)));
    assert_eq!(
        test.treasury.try_invest(&test.banker, &1_001),
        Err(Ok(ErrorCode::InsufficientBalance))
    );

    assert_eq!(test.treasury.invest(&test.banker, &1_000), 1_000);
    assert_eq!(test.treasury.value_of(), 1_000);
}

#[test]
fn invest_requires_the_base_asset_to_be_allowed() {
    let test = setup();
    let user = Address::generate(&test.env);
    test.token_admin.mint(&test.treasury.address, &1_000);

    test.treasury.disallow_token(&test.manager, &test.token.address);

    assert_eq!(test.treasury.try_invest(&test.banker, &1_000), Err(Ok(ErrorCode::TokenNotAllowed)));

    // Paying out is not gated by the allowlist.
    assert_eq!(test.treasury.redeem(&test.banker, &user, &1_000), 1_000);
}

#[test]
fn redeem_pays_out_base_asset() {
    let test = setup();
    let user = Address::generate(&test.env);
    test.token_admin.mint(&test.treasury.address, &1_000);

    assert_eq!(test.treasury.try_redeem(&test.banker, &user, &0), Err(Ok(ErrorCode::InvalidAmount)));
    assert_eq!(
        test.treasury.try_redeem(&test.banker, &user, &1_001),
        Err(Ok(ErrorCode::InsufficientShares))
    );

    assert_eq!(test.treasury.redeem(&test.banker, &user, &400), 400);

    assert_eq!(test.token.balance(&user), 400);
    assert_eq!(test.treasury.value_of(), 600);
    assert_eq!(test.treasury.shares_of(), 600);
}
