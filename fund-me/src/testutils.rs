#![cfg(test)]

use crate::FundMeContract;
use mock_token::{MockToken, MockTokenClient};
use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    vec, Address, Env, Symbol,
};

/// Set a fixed ledger for unit tests
pub(crate) fn setup_ledger(e: &Env) {
    e.ledger().set(LedgerInfo {
        timestamp: 1234567890,
        protocol_version: 22,
        sequence_number: 1234,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
}

/// Create a fund me contract.
///
/// This sets random data in the constructor, so unit tests that
/// rely on any constructor data need to use `create_fund_me`.
pub(crate) fn create_fund_me_with_random_config(e: &Env) -> Address {
    create_fund_me(
        e,
        &Address::generate(e),
        &Address::generate(e),
        &Address::generate(e),
    )
}

pub(crate) fn create_fund_me(
    e: &Env,
    owner: &Address,
    price_feed: &Address,
    token: &Address,
) -> Address {
    e.register(
        FundMeContract {},
        (owner.clone(), price_feed.clone(), token.clone()),
    )
}

//************************************************
//           External Contract Helpers
//************************************************

// ***** Token *****

pub(crate) fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
    decimals: u32,
) -> (Address, MockTokenClient<'a>) {
    let contract_address = e.register(MockToken {}, (admin.clone(), decimals));
    let client = MockTokenClient::new(e, &contract_address);
    (contract_address, client)
}

//***** Oracle ******

pub(crate) fn create_mock_oracle<'a>(e: &Env) -> (Address, MockPriceOracleClient<'a>) {
    let contract_address = e.register(MockPriceOracleWASM, ());
    (
        contract_address.clone(),
        MockPriceOracleClient::new(e, &contract_address),
    )
}

/// Quote `token` against USD on the mock oracle
///
/// ### Arguments
/// * `admin` - The oracle admin
/// * `token` - The token to quote
/// * `decimals` - The decimals the oracle reports prices with
/// * `price` - The price of one whole token
pub(crate) fn set_usd_price(
    e: &Env,
    oracle_client: &MockPriceOracleClient,
    admin: &Address,
    token: &Address,
    decimals: u32,
    price: i128,
) {
    oracle_client.set_data(
        admin,
        &Asset::Other(Symbol::new(e, "USD")),
        &vec![e, Asset::Stellar(token.clone())],
        &decimals,
        &300,
    );
    oracle_client.set_price_stable(&vec![e, price]);
}

//************************************************
//               Full Setup Helpers
//************************************************

pub(crate) struct FundMeSetup<'a> {
    pub fund_me: Address,
    pub owner: Address,
    pub token: Address,
    pub token_client: MockTokenClient<'a>,
    pub oracle_client: MockPriceOracleClient<'a>,
}

/// Deploy a fund me contract against a 7 decimal native token quoted at 0.1 USD
/// by a 7 decimal oracle. At this price 500 tokens are worth exactly `MINIMUM_USD`.
pub(crate) fn setup_fund_me<'a>(e: &Env) -> FundMeSetup<'a> {
    let bombadil = Address::generate(e);
    let owner = Address::generate(e);

    let (token, token_client) = create_token_contract(e, &bombadil, 7);
    let (oracle, oracle_client) = create_mock_oracle(e);
    set_usd_price(e, &oracle_client, &bombadil, &token, 7, 0_1000000);

    let fund_me = create_fund_me(e, &owner, &oracle, &token);
    FundMeSetup {
        fund_me,
        owner,
        token,
        token_client,
        oracle_client,
    }
}
