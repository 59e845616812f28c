use sep_40_oracle::Asset;
use soroban_sdk::{Env, Symbol};

pub struct PriceFeedEvents {}

impl PriceFeedEvents {
    /// Emitted when the admin quotes an asset
    ///
    /// - topics - `["set_price", asset: Asset]`
    /// - data - `[price: i128, timestamp: u64]`
    pub fn price_set(e: &Env, asset: Asset, price: i128, timestamp: u64) {
        let topics = (Symbol::new(e, "set_price"), asset);
        e.events().publish(topics, (price, timestamp));
    }
}
