use sep_40_oracle::{Asset, PriceFeedClient};
use sep_41_token::TokenClient;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{Env, I256};

use crate::{
    constants::REFERENCE_DECIMALS, errors::FundMeError, storage, validator::require_nonnegative,
};

/// Convert an amount of the native token into its value in the price feed's base asset
///
/// The latest price is fetched from the price feed on every call. The result carries
/// `REFERENCE_DECIMALS` decimals, independent of the decimals used by the token and the
/// price feed, and is rounded down.
///
/// ### Arguments
/// * `amount` - The amount of native tokens
///
/// ### Errors
/// * `NegativeAmountError` - If the amount is negative
/// * `InvalidPrice` - If the price feed does not report a positive price for the native token
/// * `ConversionOverflow` - If the value does not fit in an i128
pub fn get_conversion_rate(e: &Env, amount: i128) -> Result<i128, FundMeError> {
    require_nonnegative(&amount)?;

    let token = storage::get_token(e);
    let price_feed = PriceFeedClient::new(e, &storage::get_price_feed(e));
    let price = match price_feed.lastprice(&Asset::Stellar(token.clone())) {
        Some(price_data) if price_data.price > 0 => price_data.price,
        _ => return Err(FundMeError::InvalidPrice),
    };
    let oracle_decimals = price_feed.decimals();
    let token_decimals = TokenClient::new(e, &token).decimals();

    let precision = token_decimals
        .checked_add(oracle_decimals)
        .ok_or(FundMeError::ConversionOverflow)?;
    to_reference_value(e, amount, price, precision)
}

/// Scale the product `amount * price`, which carries `precision` decimals, to
/// `REFERENCE_DECIMALS` decimals
///
/// The product is taken in 256 bits, so only a result that does not fit in an i128 fails.
fn to_reference_value(
    e: &Env,
    amount: i128,
    price: i128,
    precision: u32,
) -> Result<i128, FundMeError> {
    if precision >= REFERENCE_DECIMALS {
        let denominator = 10i128
            .checked_pow(precision - REFERENCE_DECIMALS)
            .ok_or(FundMeError::ConversionOverflow)?;
        I256::from_i128(e, amount)
            .fixed_mul_floor(
                e,
                &I256::from_i128(e, price),
                &I256::from_i128(e, denominator),
            )
            .to_i128()
            .ok_or(FundMeError::ConversionOverflow)
    } else {
        amount
            .checked_mul(price)
            .and_then(|value| value.checked_mul(10i128.pow(REFERENCE_DECIMALS - precision)))
            .ok_or(FundMeError::ConversionOverflow)
    }
}
