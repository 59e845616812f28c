use crate::fund_me::create_fund_me;
use crate::price_feed::create_price_feed;
use crate::token::{create_mock_token, create_stellar_token};
use fund_me::FundMeClient;
use mock_price_feed::MockPriceFeedClient;
use mock_token::MockTokenClient;
use sep_40_oracle::Asset;
use soroban_sdk::testutils::{Address as _, EnvTestConfig, Ledger, LedgerInfo};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

pub const SCALAR_7: i128 = 1_000_0000;

/// Decimals reported by the mock price feed
pub const PRICE_FEED_DECIMALS: u32 = 8;
/// USD price of one native token, with `PRICE_FEED_DECIMALS` decimals
pub const INITIAL_PRICE: i128 = 2000_0000_0000;
/// A contribution comfortably above the minimum at `INITIAL_PRICE`
pub const SEND_VALUE: i128 = 0_1000000;
/// The smallest contribution accepted at `INITIAL_PRICE`
pub const MINIMUM_CONTRIBUTION: i128 = 0_0250000;
/// Native tokens minted to every user
pub const STARTING_BALANCE: i128 = 1_000 * SCALAR_7;

const USER_COUNT: usize = 10;

pub struct TestFixture<'a> {
    pub env: Env,
    pub bombadil: Address,
    pub owner: Address,
    pub users: Vec<Address>,
    pub fund_me: FundMeClient<'a>,
    pub price_feed: MockPriceFeedClient<'a>,
    pub token: TokenClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture for the fund me ledger
    ///
    /// Deploys a Stellar Asset Contract as the native token, a mock price feed quoting it at
    /// `INITIAL_PRICE`, and the ledger itself. Every user starts with `STARTING_BALANCE`.
    pub fn create<'a>() -> TestFixture<'a> {
        let (e, bombadil) = create_env();

        let (token_id, _, token_admin_client) = create_stellar_token(&e, &bombadil);
        let fixture = TestFixture::deploy(e, bombadil, &token_id);
        for user in fixture.users.iter() {
            token_admin_client.mint(user, &STARTING_BALANCE);
        }
        fixture
    }

    /// Create a new TestFixture whose native token is a mock token that can block transfers
    ///
    /// Every user starts with `STARTING_BALANCE`.
    pub fn create_with_mock_token<'a>() -> (TestFixture<'a>, MockTokenClient<'a>) {
        let (e, bombadil) = create_env();

        let (token_id, mock_token_client) = create_mock_token(&e, &bombadil, 7);
        let fixture = TestFixture::deploy(e, bombadil, &token_id);
        for user in fixture.users.iter() {
            mock_token_client.mint(user, &STARTING_BALANCE);
        }
        (fixture, mock_token_client)
    }

    fn deploy<'a>(e: Env, bombadil: Address, token_id: &Address) -> TestFixture<'a> {
        let owner = Address::generate(&e);
        let users = (0..USER_COUNT)
            .map(|_| Address::generate(&e))
            .collect::<Vec<Address>>();

        let (price_feed_id, price_feed_client) =
            create_price_feed(&e, &bombadil, PRICE_FEED_DECIMALS);
        price_feed_client.set_price(&Asset::Stellar(token_id.clone()), &INITIAL_PRICE);

        let fund_me_client = create_fund_me(&e, &owner, &price_feed_id, token_id);

        TestFixture {
            bombadil,
            owner,
            users,
            fund_me: fund_me_client,
            price_feed: price_feed_client,
            token: TokenClient::new(&e, token_id),
            env: e,
        }
    }

    /********** Contract Data Helpers **********/

    /// Read the list of funders through the ledger's accessors
    pub fn read_funders(&self) -> Vec<Address> {
        (0..self.fund_me.get_funder_count())
            .map(|index| self.fund_me.get_funder(&index))
            .collect()
    }

    /// Read the cumulative contribution of every user
    pub fn read_amounts_funded(&self) -> Vec<i128> {
        self.users
            .iter()
            .map(|user| self.fund_me.get_address_to_amount_funded(user))
            .collect()
    }

    /// Fund the ledger with `SEND_VALUE` from each of the first `count` users
    pub fn fund_from_users(&self, count: usize) {
        for user in self.users.iter().take(count) {
            self.fund_me.fund(user, &SEND_VALUE);
        }
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env.ledger().set(LedgerInfo {
            timestamp: self.env.ledger().timestamp().saturating_add(time),
            protocol_version: 22,
            sequence_number: self.env.ledger().sequence(),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 999999,
            min_persistent_entry_ttl: 999999,
            max_entry_ttl: 9999999,
        });
    }
}

fn create_env() -> (Env, Address) {
    let e = Env::new_with_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });
    e.mock_all_auths();
    e.cost_estimate().budget().reset_unlimited();

    e.ledger().set(LedgerInfo {
        timestamp: 1441065600,
        protocol_version: 22,
        sequence_number: 150,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 500000,
        min_persistent_entry_ttl: 500000,
        max_entry_ttl: 9999999,
    });

    let bombadil = Address::generate(&e);
    (e, bombadil)
}
