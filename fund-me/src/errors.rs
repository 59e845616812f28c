use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the fund me contract. Common errors are codes that match up with the built-in
/// contracts error reporting. Fund me specific errors start at 1500.
pub enum FundMeError {
    // Common Errors
    NegativeAmountError = 8,

    // Funding Errors (start at 1500)
    InsufficientContribution = 1500,
    NotOwner = 1501,
    TransferFailed = 1502,
    IndexOutOfRange = 1503,

    // Oracle Errors
    InvalidPrice = 1504,
    ConversionOverflow = 1505,
}
