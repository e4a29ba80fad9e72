//! In-memory stand-in for an external yield vault, for tests of the
//! strategy and of contracts that allocate into it.

use soroban_sdk::{ contract, contractimpl, contracttype, token, Address, Env };

use crate::interfaces::VaultTrait;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MockVaultKey {
    Asset,
    Decimals,
    PricePerShare,
    DepositCap,
    WithdrawFeeBps,
    Shares(Address),
}

#[contract]
pub struct MockVault;

#[contractimpl]
impl MockVault {
    pub fn setup_vault(env: Env, asset: Address, decimals: u32, price_per_share: i128, deposit_cap: i128) {
        let storage = env.storage().instance();
        storage.set(&MockVaultKey::Asset, &asset);
        storage.set(&MockVaultKey::Decimals, &decimals);
        storage.set(&MockVaultKey::PricePerShare, &price_per_share);
        storage.set(&MockVaultKey::DepositCap, &deposit_cap);
    }

    /// Simulates yield (or loss). The caller is responsible for funding the
    /// vault so that outstanding shares stay redeemable.
    pub fn set_price_per_share(env: Env, price_per_share: i128) {
        env.storage().instance().set(&MockVaultKey::PricePerShare, &price_per_share);
    }

    pub fn set_deposit_cap(env: Env, deposit_cap: i128) {
        env.storage().instance().set(&MockVaultKey::DepositCap, &deposit_cap);
    }

    /// Part of every withdrawal the vault keeps, in bps.
    pub fn set_withdraw_fee(env: Env, fee_bps: i128) {
        env.storage().instance().set(&MockVaultKey::WithdrawFeeBps, &fee_bps);
    }

    pub fn shares(env: Env, owner: Address) -> i128 {
        env.storage().instance().get(&MockVaultKey::Shares(owner)).unwrap_or(0)
    }
}

#[contractimpl]
impl VaultTrait for MockVault {
    fn deposit(env: Env, from: Address, amount: i128) -> i128 {
        from.require_auth();
        assert!(amount > 0, "Mock Vault: Deposit: amount should be above zero");
        assert!(
            amount <= Self::available_deposit_limit(env.clone()),
            "Mock Vault: Deposit: deposit limit exceeded"
        );

        let shares = (amount * scale(&env)) / Self::price_per_share(env.clone());
        asset(&env).transfer(&from, &env.current_contract_address(), &amount);

        let held = Self::shares(env.clone(), from.clone());
        env.storage().instance().set(&MockVaultKey::Shares(from), &(held + shares));

        shares
    }

    fn withdraw(env: Env, owner: Address, to: Address, shares: i128) -> i128 {
        owner.require_auth();

        let held = Self::shares(env.clone(), owner.clone());
        assert!(shares > 0 && shares <= held, "Mock Vault: Withdraw: not enough shares");

        let gross = (shares * Self::price_per_share(env.clone())) / scale(&env);
        let fee_bps: i128 = env.storage().instance().get(&MockVaultKey::WithdrawFeeBps).unwrap_or(0);
        let amount = gross - (gross * fee_bps) / 10_000;
        env.storage().instance().set(&MockVaultKey::Shares(owner), &(held - shares));
        asset(&env).transfer(&env.current_contract_address(), &to, &amount);

        amount
    }

    fn price_per_share(env: Env) -> i128 {
        env.storage().instance().get(&MockVaultKey::PricePerShare).unwrap_or(0)
    }

    fn available_deposit_limit(env: Env) -> i128 {
        let cap: i128 = env.storage().instance().get(&MockVaultKey::DepositCap).unwrap_or(0);
        let held = asset(&env).balance(&env.current_contract_address());
        if cap > held {
            cap - held
        } else {
            0
        }
    }

    fn decimals(env: Env) -> u32 {
        env.storage().instance().get(&MockVaultKey::Decimals).unwrap_or(0)
    }
}

fn asset(env: &Env) -> token::Client<'_> {
    let address: Address = env.storage().instance().get(&MockVaultKey::Asset).unwrap();
    token::Client::new(env, &address)
}

fn scale(env: &Env) -> i128 {
    (10_i128).pow(MockVault::decimals(env.clone()))
}
