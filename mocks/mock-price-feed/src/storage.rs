use sep_40_oracle::{Asset, PriceData};
use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD: u32 = ONE_DAY_LEDGERS * 90;
const LEDGER_BUMP: u32 = ONE_DAY_LEDGERS * 120;

const ADMIN_KEY: &str = "Admin";
const BASE_KEY: &str = "Base";
const DECIMALS_KEY: &str = "Decimals";

#[derive(Clone)]
#[contracttype]
pub enum PriceFeedDataKey {
    // The latest quote for an asset
    Price(Asset),
}

pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), admin);
}

pub fn get_base(e: &Env) -> Asset {
    e.storage()
        .instance()
        .get::<Symbol, Asset>(&Symbol::new(e, BASE_KEY))
        .unwrap_optimized()
}

pub fn set_base(e: &Env, base: &Asset) {
    e.storage()
        .instance()
        .set::<Symbol, Asset>(&Symbol::new(e, BASE_KEY), base);
}

pub fn get_decimals(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, DECIMALS_KEY))
        .unwrap_optimized()
}

pub fn set_decimals(e: &Env, decimals: &u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, DECIMALS_KEY), decimals);
}

/// Fetch the latest quote for `asset`, if one was ever set
pub fn get_price(e: &Env, asset: &Asset) -> Option<PriceData> {
    let key = PriceFeedDataKey::Price(asset.clone());
    let result = e
        .storage()
        .persistent()
        .get::<PriceFeedDataKey, PriceData>(&key);
    if result.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
    }
    result
}

pub fn set_price(e: &Env, asset: &Asset, price_data: &PriceData) {
    let key = PriceFeedDataKey::Price(asset.clone());
    e.storage()
        .persistent()
        .set::<PriceFeedDataKey, PriceData>(&key, price_data);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}
