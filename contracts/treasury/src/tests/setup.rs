use maxos_address_manager::{ AddressManager, AddressManagerClient };
use soroban_sdk::{ testutils::Address as _, token, Address, Env };

use crate::contract::{ Treasury, TreasuryClient };

pub struct TreasuryTest<'a> {
    pub env: Env,
    pub manager: Address,
    pub banker: Address,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub address_manager: AddressManagerClient<'a>,
    pub treasury: TreasuryClient<'a>,
}

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let address = env.register_stellar_asset_contract_v2(admin.clone()).address();
    (token::Client::new(env, &address), token::StellarAssetClient::new(env, &address))
}

pub fn deploy_treasury_contract<'a>(
    env: &Env,
    address_manager: &Address,
    base_asset: &Address
) -> TreasuryClient<'a> {
    let treasury = TreasuryClient::new(env, &env.register(Treasury, ()));
    treasury.initialize(address_manager, base_asset);
    treasury
}

/// A treasury whose registered banker is a plain account the tests sign for.
/// The base asset is already on the allowlist.
pub fn setup<'a>() -> TreasuryTest<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let manager = Address::generate(&env);
    let banker = Address::generate(&env);

    let (token, token_admin) = deploy_token_contract(&env, &manager);

    let address_manager = AddressManagerClient::new(&env, &env.register(AddressManager, ()));
    address_manager.initialize(&manager);
    address_manager.set_banker(&manager, &banker);

    let treasury = deploy_treasury_contract(&env, &address_manager.address, &token.address);
    address_manager.set_treasury(&manager, &treasury.address);
    treasury.allow_token(&manager, &token.address);

    TreasuryTest {
        env,
        manager,
        banker,
        token,
        token_admin,
        address_manager,
        treasury,
    }
}
