use maxos::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, vec, Address };

use super::setup::{ deploy_token_contract, setup };

#[test]
fn base_asset_is_allowed_after_setup() {
    let test = setup();

    assert!(test.treasury.is_allowed_token(&test.token.address));
    assert_eq!(test.treasury.query_allowed_tokens(), vec![&test.env, test.token.address.clone()]);
}

#[test]
fn manager_allows_and_disallows_tokens() {
    let test = setup();
    let (other, _) = deploy_token_contract(&test.env, &test.manager);

    test.treasury.allow_token(&test.manager, &other.address);
    assert_eq!(
        test.treasury.query_allowed_tokens(),
        vec![&test.env, test.token.address.clone(), other.address.clone()]
    );

    test.treasury.disallow_token(&test.manager, &test.token.address);
    assert!(!test.treasury.is_allowed_token(&test.token.address));
    assert_eq!(test.treasury.query_allowed_tokens(), vec![&test.env, other.address.clone()]);
}

#[test]
fn redundant_allowlist_changes_should_fail() {
    let test = setup();
    let (other, _) = deploy_token_contract(&test.env, &test.manager);

    assert_eq!(
        test.treasury.try_allow_token(&test.manager, &test.token.address),
        Err(Ok(ErrorCode::TokenAlreadyAllowed))
    );
    assert_eq!(
        test.treasury.try_disallow_token(&test.manager, &other.address),
        Err(Ok(ErrorCode::TokenNotAllowed))
    );
}

#[test]
fn allowlist_is_manager_only() {
    let test = setup();
    let user = Address::generate(&test.env);
    let (other, _) = deploy_token_contract(&test.env, &test.manager);

    assert_eq!(
        test.treasury.try_allow_token(&user, &other.address),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.treasury.try_disallow_token(&test.banker, &test.token.address),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert!(test.treasury.is_allowed_token(&test.token.address));
}
