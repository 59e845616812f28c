/********** Numbers **********/

/// Fixed-point scalar for 7 decimal numbers
pub const SCALAR_7: i128 = 1_0000000;

/// Decimals of the reference currency values produced by the price conversion
pub const REFERENCE_DECIMALS: u32 = 7;

/********** Funding **********/

/// Minimum value of a single contribution in the reference currency (50 USD)
pub const MINIMUM_USD: i128 = 50 * SCALAR_7;
