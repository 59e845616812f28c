#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env, Symbol,
};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD: u32 = ONE_DAY_LEDGERS * 90;
const LEDGER_BUMP: u32 = ONE_DAY_LEDGERS * 120;

const ADMIN_KEY: &str = "Admin";
const DECIMALS_KEY: &str = "Decimals";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockTokenError {
    NegativeAmount = 8,
    BalanceError = 10,
    Blocked = 1100,
}

#[derive(Clone)]
#[contracttype]
pub enum MockTokenDataKey {
    Balance(Address),
    Blocked(Address),
}

/// A minimal SEP-41 style token whose admin can block addresses from sending or
/// receiving tokens
#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn __constructor(e: Env, admin: Address, decimals: u32) {
        e.storage()
            .instance()
            .set::<Symbol, Address>(&Symbol::new(&e, ADMIN_KEY), &admin);
        e.storage()
            .instance()
            .set::<Symbol, u32>(&Symbol::new(&e, DECIMALS_KEY), &decimals);
    }

    /// (Admin only) Mint `amount` tokens to `to`
    pub fn mint(e: Env, to: Address, amount: i128) {
        admin(&e).require_auth();
        if amount < 0 {
            panic_with_error!(&e, MockTokenError::NegativeAmount);
        }
        write_balance(&e, &to, read_balance(&e, &to) + amount);
    }

    /// (Admin only) Block or unblock `id` from sending and receiving tokens
    pub fn set_blocked(e: Env, id: Address, blocked: bool) {
        admin(&e).require_auth();
        let key = MockTokenDataKey::Blocked(id);
        e.storage()
            .persistent()
            .set::<MockTokenDataKey, bool>(&key, &blocked);
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        if amount < 0 {
            panic_with_error!(&e, MockTokenError::NegativeAmount);
        }
        if is_blocked(&e, &from) || is_blocked(&e, &to) {
            panic_with_error!(&e, MockTokenError::Blocked);
        }

        let from_balance = read_balance(&e, &from);
        if from_balance < amount {
            panic_with_error!(&e, MockTokenError::BalanceError);
        }
        write_balance(&e, &from, from_balance - amount);
        write_balance(&e, &to, read_balance(&e, &to) + amount);
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    pub fn decimals(e: Env) -> u32 {
        e.storage()
            .instance()
            .get::<Symbol, u32>(&Symbol::new(&e, DECIMALS_KEY))
            .unwrap_or(7)
    }
}

fn admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY))
        .unwrap()
}

fn is_blocked(e: &Env, id: &Address) -> bool {
    e.storage()
        .persistent()
        .get::<MockTokenDataKey, bool>(&MockTokenDataKey::Blocked(id.clone()))
        .unwrap_or(false)
}

fn read_balance(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get::<MockTokenDataKey, i128>(&MockTokenDataKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    let key = MockTokenDataKey::Balance(id.clone());
    e.storage()
        .persistent()
        .set::<MockTokenDataKey, i128>(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}
