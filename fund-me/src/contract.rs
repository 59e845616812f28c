use crate::{constants::MINIMUM_USD, errors::FundMeError, events::FundMeEvents, ledger, storage};
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};

/// ### FundMe
///
/// A custodial funding ledger. Anyone can contribute native tokens worth at least
/// `MINIMUM_USD`, and the owner can withdraw the entire pooled balance.
#[contract]
pub struct FundMeContract;

#[contractclient(name = "FundMeClient")]
pub trait FundMe {
    /********** Funding **********/

    /// Contribute `amount` native tokens from `funder`
    ///
    /// ### Arguments
    /// * `funder` - The address contributing
    /// * `amount` - The amount of native tokens to contribute
    ///
    /// ### Errors
    /// If the amount is worth less than `MINIMUM_USD`, the price feed has no usable price,
    /// the value cannot be represented, or the tokens cannot be transferred from `funder`
    fn fund(e: Env, funder: Address, amount: i128) -> Result<(), FundMeError>;

    /// Fetch the value of `amount` native tokens in the reference currency (7 decimals)
    ///
    /// ### Arguments
    /// * `amount` - The amount of native tokens
    ///
    /// ### Errors
    /// If the amount is negative, the price feed has no usable price, or the value does
    /// not fit in an i128
    fn get_conversion_rate(e: Env, amount: i128) -> Result<i128, FundMeError>;

    /********** Withdrawal **********/

    /// (Owner only) Withdraw the entire pooled balance and reset every funder
    ///
    /// Returns the amount withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The address requesting the withdrawal
    ///
    /// ### Errors
    /// If `caller` is not the owner or the transfer to the owner fails
    fn withdraw(e: Env, caller: Address) -> Result<i128, FundMeError>;

    /// (Owner only) Withdraw the entire pooled balance and reset every funder, reading the
    /// list of funders from storage only once
    ///
    /// Returns the amount withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The address requesting the withdrawal
    ///
    /// ### Errors
    /// If `caller` is not the owner or the transfer to the owner fails
    fn cheaper_withdraw(e: Env, caller: Address) -> Result<i128, FundMeError>;

    /********** Getters **********/

    /// Fetch the owner of the ledger
    fn get_owner(e: Env) -> Address;

    /// Fetch the price feed used to value contributions
    fn get_price_feed(e: Env) -> Address;

    /// Fetch the native token contributions are made in
    fn get_token(e: Env) -> Address;

    /// Fetch the cumulative amount contributed by `funder` since the last withdrawal
    fn get_address_to_amount_funded(e: Env, funder: Address) -> i128;

    /// Fetch the funder of the `index`-th accepted contribution since the last withdrawal
    ///
    /// ### Errors
    /// If `index` is past the end of the list of funders
    fn get_funder(e: Env, index: u32) -> Result<Address, FundMeError>;

    /// Fetch the number of entries in the list of funders
    fn get_funder_count(e: Env) -> u32;

    /// Fetch the minimum value of a contribution in the reference currency (7 decimals)
    fn get_minimum_usd(e: Env) -> i128;
}

#[contractimpl]
impl FundMeContract {
    /// Construct the fund me contract
    ///
    /// ### Arguments
    /// * `owner` - The address allowed to withdraw
    /// * `price_feed` - The SEP-40 price feed quoting the native token
    /// * `token` - The native token contract
    pub fn __constructor(e: Env, owner: Address, price_feed: Address, token: Address) {
        storage::set_owner(&e, &owner);
        storage::set_price_feed(&e, &price_feed);
        storage::set_token(&e, &token);
    }
}

#[contractimpl]
impl FundMe for FundMeContract {
    fn fund(e: Env, funder: Address, amount: i128) -> Result<(), FundMeError> {
        storage::extend_instance(&e);
        funder.require_auth();

        ledger::execute_fund(&e, &funder, amount)?;

        FundMeEvents::fund(&e, funder, amount);
        Ok(())
    }

    fn get_conversion_rate(e: Env, amount: i128) -> Result<i128, FundMeError> {
        ledger::get_conversion_rate(&e, amount)
    }

    fn withdraw(e: Env, caller: Address) -> Result<i128, FundMeError> {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = ledger::execute_withdraw(&e, &caller)?;

        FundMeEvents::withdraw(&e, caller, amount);
        Ok(amount)
    }

    fn cheaper_withdraw(e: Env, caller: Address) -> Result<i128, FundMeError> {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = ledger::execute_cheaper_withdraw(&e, &caller)?;

        FundMeEvents::withdraw(&e, caller, amount);
        Ok(amount)
    }

    fn get_owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    fn get_price_feed(e: Env) -> Address {
        storage::get_price_feed(&e)
    }

    fn get_token(e: Env) -> Address {
        storage::get_token(&e)
    }

    fn get_address_to_amount_funded(e: Env, funder: Address) -> i128 {
        storage::get_amount_funded(&e, &funder)
    }

    fn get_funder(e: Env, index: u32) -> Result<Address, FundMeError> {
        storage::get_funder(&e, index).ok_or(FundMeError::IndexOutOfRange)
    }

    fn get_funder_count(e: Env) -> u32 {
        storage::get_funder_count(&e)
    }

    fn get_minimum_usd(_e: Env) -> i128 {
        MINIMUM_USD
    }
}
