mod fund;
pub use fund::execute_fund;

mod owner;

mod price;
pub use price::get_conversion_rate;

mod token;

mod withdraw;
pub use withdraw::{execute_cheaper_withdraw, execute_withdraw};
