use maxos_address_manager::{ AddressManager, AddressManagerClient };
use soroban_sdk::{ testutils::Address as _, token, Address, Env };

use crate::{
    contract::{ VaultStrategy, VaultStrategyClient },
    testutils::{ MockVault, MockVaultClient },
};

/// 1.05 base units per vault share, 6 decimal price
pub const PRICE_PER_SHARE: i128 = 1_050_000;
pub const VAULT_DECIMALS: u32 = 6;
pub const DEPOSIT_CAP: i128 = 1_000_000_000_000;
/// Free balance the strategy starts with
pub const STRATEGY_BALANCE: i128 = 10_000_000_000;

pub struct VaultStrategyTest<'a> {
    pub env: Env,
    pub manager: Address,
    pub banker: Address,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub vault: MockVaultClient<'a>,
    pub strategy: VaultStrategyClient<'a>,
}

pub fn deploy_mock_vault<'a>(env: &Env, base_asset: &Address) -> MockVaultClient<'a> {
    let vault = MockVaultClient::new(env, &env.register(MockVault, ()));
    vault.setup_vault(base_asset, &VAULT_DECIMALS, &PRICE_PER_SHARE, &DEPOSIT_CAP);
    vault
}

pub fn setup<'a>() -> VaultStrategyTest<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let manager = Address::generate(&env);
    let banker = Address::generate(&env);

    let token_address = env.register_stellar_asset_contract_v2(manager.clone()).address();
    let token = token::Client::new(&env, &token_address);
    let token_admin = token::StellarAssetClient::new(&env, &token_address);

    let address_manager = AddressManagerClient::new(&env, &env.register(AddressManager, ()));
    address_manager.initialize(&manager);
    address_manager.set_banker(&manager, &banker);

    let vault = deploy_mock_vault(&env, &token_address);

    let strategy = VaultStrategyClient::new(&env, &env.register(VaultStrategy, ()));
    strategy.initialize(&address_manager.address, &token_address, &vault.address);

    token_admin.mint(&strategy.address, &STRATEGY_BALANCE);

    VaultStrategyTest {
        env,
        manager,
        banker,
        token,
        token_admin,
        vault,
        strategy,
    }
}
