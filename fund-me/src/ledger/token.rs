use sep_41_token::TokenClient;
use soroban_sdk::{Address, Env};

use crate::{errors::FundMeError, storage};

/// Fetch the native token balance held by the ledger
pub fn held_balance(e: &Env) -> i128 {
    TokenClient::new(e, &storage::get_token(e)).balance(&e.current_contract_address())
}

/// Transfer native tokens between two addresses
///
/// A transfer rejected by the token contract is reported as `TransferFailed`.
///
/// ### Arguments
/// * `from` - The address sending the tokens
/// * `to` - The address receiving the tokens
/// * `amount` - The amount of tokens
///
/// ### Errors
/// If the token contract fails the transfer
pub fn transfer(e: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), FundMeError> {
    let token_client = TokenClient::new(e, &storage::get_token(e));
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(FundMeError::TransferFailed),
    }
}
