use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, vec, Address, Env, IntoVal, Symbol, TryFromVal, Val, Vec,
};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger

const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const LEDGER_THRESHOLD_FUNDER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_FUNDER: u32 = LEDGER_THRESHOLD_FUNDER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Key Types **********/

const OWNER_KEY: &str = "Owner";
const PRICE_FEED_KEY: &str = "PriceFeed";
const TOKEN_KEY: &str = "Token";
const FUNDERS_KEY: &str = "Funders";

#[derive(Clone)]
#[contracttype]
pub enum FundMeDataKey {
    // The cumulative amount contributed by an address
    AmountFunded(Address),
}

/****************************
**         Storage         **
****************************/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Instance Storage **********/

/// Fetch the owner of the ledger
pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, OWNER_KEY))
        .unwrap_optimized()
}

/// Set the owner of the ledger
///
/// ### Arguments
/// * `owner` - The address allowed to withdraw the pooled balance
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), owner);
}

/// Fetch the price feed id
pub fn get_price_feed(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, PRICE_FEED_KEY))
        .unwrap_optimized()
}

/// Set the price feed id
///
/// ### Arguments
/// * `price_feed` - The ID of the SEP-40 price feed contract
pub fn set_price_feed(e: &Env, price_feed: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, PRICE_FEED_KEY), price_feed);
}

/// Fetch the native token id
pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

/// Set the native token id
///
/// ### Arguments
/// * `token` - The ID of the token contributions are made in
pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY), token);
}

/********** Amount Funded **********/

/// Fetch the cumulative amount contributed by a funder
///
/// Returns 0 if the address has never funded
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn get_amount_funded(e: &Env, funder: &Address) -> i128 {
    let key = FundMeDataKey::AmountFunded(funder.clone());
    get_persistent_default(
        e,
        &key,
        || 0i128,
        LEDGER_THRESHOLD_FUNDER,
        LEDGER_BUMP_FUNDER,
    )
}

/// Set the cumulative amount contributed by a funder
///
/// ### Arguments
/// * `funder` - The address of the funder
/// * `amount` - The new cumulative amount
pub fn set_amount_funded(e: &Env, funder: &Address, amount: &i128) {
    let key = FundMeDataKey::AmountFunded(funder.clone());
    e.storage()
        .persistent()
        .set::<FundMeDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_FUNDER, LEDGER_BUMP_FUNDER);
}

/********** Funders **********/

/// Fetch the list of funders, in the order their contributions were accepted
pub fn get_funders(e: &Env) -> Vec<Address> {
    get_persistent_default(
        e,
        &Symbol::new(e, FUNDERS_KEY),
        || vec![e],
        LEDGER_THRESHOLD_FUNDER,
        LEDGER_BUMP_FUNDER,
    )
}

/// Set the list of funders
///
/// ### Arguments
/// * `funders` - The ordered list of funders
pub fn set_funders(e: &Env, funders: &Vec<Address>) {
    e.storage()
        .persistent()
        .set::<Symbol, Vec<Address>>(&Symbol::new(e, FUNDERS_KEY), funders);
    e.storage().persistent().extend_ttl(
        &Symbol::new(e, FUNDERS_KEY),
        LEDGER_THRESHOLD_FUNDER,
        LEDGER_BUMP_FUNDER,
    );
}

/// Append a funder to the end of the list of funders. Repeat funders are appended again.
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn push_funder(e: &Env, funder: &Address) {
    let mut funders = get_funders(e);
    funders.push_back(funder.clone());
    set_funders(e, &funders);
}

/// Fetch the funder at `index` from storage
///
/// Returns None if `index` is past the end of the list
pub fn get_funder(e: &Env, index: u32) -> Option<Address> {
    get_funders(e).get(index)
}

/// Fetch the number of entries in the list of funders
pub fn get_funder_count(e: &Env) -> u32 {
    get_funders(e).len()
}

/// Replace the list of funders with an empty list
pub fn clear_funders(e: &Env) {
    set_funders(e, &vec![e]);
}
