use fund_me::{FundMeClient, FundMeContract};
use soroban_sdk::{Address, Env};

pub fn create_fund_me<'a>(
    e: &Env,
    owner: &Address,
    price_feed: &Address,
    token: &Address,
) -> FundMeClient<'a> {
    let contract_id = e.register(
        FundMeContract {},
        (owner.clone(), price_feed.clone(), token.clone()),
    );
    FundMeClient::new(e, &contract_id)
}
