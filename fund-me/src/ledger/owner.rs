use soroban_sdk::{Address, Env};

use crate::{errors::FundMeError, storage};

/// Require that `caller` is the owner of the ledger
///
/// Returns the owner
///
/// ### Arguments
/// * `caller` - The address invoking an owner only action
///
/// ### Errors
/// If `caller` is not the owner
pub fn require_owner(e: &Env, caller: &Address) -> Result<Address, FundMeError> {
    let owner = storage::get_owner(e);
    if *caller != owner {
        return Err(FundMeError::NotOwner);
    }
    Ok(owner)
}
