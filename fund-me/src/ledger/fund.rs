use soroban_sdk::{Address, Env};

use crate::{constants::MINIMUM_USD, errors::FundMeError, storage};

use super::{price::get_conversion_rate, token};

/// Accept a contribution of `amount` native tokens from `funder`
///
/// Pulls `amount` from `funder` into the ledger, adds it to the funder's cumulative
/// contribution and appends `funder` to the list of funders. Repeat funders are appended
/// again.
///
/// ### Arguments
/// * `funder` - The address contributing
/// * `amount` - The amount of native tokens to contribute
///
/// ### Errors
/// * `NegativeAmountError` - If the amount is negative
/// * `InvalidPrice` - If the price feed does not report a usable price
/// * `ConversionOverflow` - If the value of the amount does not fit in an i128
/// * `InsufficientContribution` - If the amount is worth less than `MINIMUM_USD`
/// * `TransferFailed` - If the tokens cannot be transferred from `funder`
pub fn execute_fund(e: &Env, funder: &Address, amount: i128) -> Result<(), FundMeError> {
    if get_conversion_rate(e, amount)? < MINIMUM_USD {
        return Err(FundMeError::InsufficientContribution);
    }

    token::transfer(e, funder, &e.current_contract_address(), amount)?;

    let amount_funded = storage::get_amount_funded(e, funder);
    storage::set_amount_funded(e, funder, &(amount_funded + amount));
    storage::push_funder(e, funder);
    Ok(())
}
