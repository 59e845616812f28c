use crate::errors::FundMeError;

/// Require that an incoming amount is not negative
///
/// ### Arguments
/// * `amount` - The amount to check
///
/// ### Errors
/// If the number is negative
pub fn require_nonnegative(amount: &i128) -> Result<(), FundMeError> {
    if amount.is_negative() {
        return Err(FundMeError::NegativeAmountError);
    }
    Ok(())
}
