pub mod fund_me;
pub mod price_feed;
pub mod test_fixture;
pub mod token;
