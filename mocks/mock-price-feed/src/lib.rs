#![no_std]

use sep_40_oracle::{Asset, PriceData};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

mod errors;
mod events;
mod storage;

pub use errors::PriceFeedError;
pub use events::PriceFeedEvents;

/// ### MockPriceFeed
///
/// A fixed-rate SEP-40 price feed. The admin sets the price of each asset, and the
/// quote holds until it is set again.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Construct the price feed
    ///
    /// ### Arguments
    /// * `admin` - The address allowed to set prices
    /// * `base` - The asset prices are quoted in
    /// * `decimals` - The number of decimals prices are reported with
    pub fn __constructor(e: Env, admin: Address, base: Asset, decimals: u32) {
        storage::set_admin(&e, &admin);
        storage::set_base(&e, &base);
        storage::set_decimals(&e, &decimals);
    }

    /// (Admin only) Quote `asset` at `price`, timestamped with the current ledger time
    ///
    /// ### Panics
    /// If `price` is not positive
    pub fn set_price(e: Env, asset: Asset, price: i128) {
        storage::get_admin(&e).require_auth();

        if price <= 0 {
            panic_with_error!(&e, PriceFeedError::InvalidPrice);
        }

        let price_data = PriceData {
            price,
            timestamp: e.ledger().timestamp(),
        };
        storage::set_price(&e, &asset, &price_data);

        PriceFeedEvents::price_set(&e, asset, price, price_data.timestamp);
    }

    pub fn lastprice(e: Env, asset: Asset) -> Option<PriceData> {
        storage::get_price(&e, &asset)
    }

    pub fn decimals(e: Env) -> u32 {
        storage::get_decimals(&e)
    }

    pub fn base(e: Env) -> Asset {
        storage::get_base(&e)
    }

    pub fn admin(e: Env) -> Address {
        storage::get_admin(&e)
    }
}
