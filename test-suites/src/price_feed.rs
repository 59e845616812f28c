use mock_price_feed::{MockPriceFeed, MockPriceFeedClient};
use sep_40_oracle::Asset;
use soroban_sdk::{Address, Env, Symbol};

/// Deploy a mock price feed quoting assets in USD
pub fn create_price_feed<'a>(
    e: &Env,
    admin: &Address,
    decimals: u32,
) -> (Address, MockPriceFeedClient<'a>) {
    let contract_id = e.register(
        MockPriceFeed {},
        (admin.clone(), Asset::Other(Symbol::new(e, "USD")), decimals),
    );
    (contract_id.clone(), MockPriceFeedClient::new(e, &contract_id))
}
