#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod constants;
mod contract;
mod errors;
mod events;
mod ledger;
mod storage;
mod testutils;
mod validator;

pub use constants::{MINIMUM_USD, REFERENCE_DECIMALS, SCALAR_7};
pub use contract::*;
pub use errors::FundMeError;
pub use storage::FundMeDataKey;
