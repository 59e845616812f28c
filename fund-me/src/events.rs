use soroban_sdk::{Address, Env, Symbol};

pub struct FundMeEvents {}

impl FundMeEvents {
    /// Emitted when a contribution is accepted
    ///
    /// - topics - `["fund", funder: Address]`
    /// - data - `amount: i128`
    ///
    /// ### Arguments
    /// * `funder` - The address that contributed
    /// * `amount` - The amount of native tokens contributed
    pub fn fund(e: &Env, funder: Address, amount: i128) {
        let topics = (Symbol::new(e, "fund"), funder);
        e.events().publish(topics, amount);
    }

    /// Emitted when the owner withdraws the pooled balance. Both withdrawal
    /// strategies emit this event.
    ///
    /// - topics - `["withdraw", owner: Address]`
    /// - data - `amount: i128`
    ///
    /// ### Arguments
    /// * `owner` - The owner receiving the pooled balance
    /// * `amount` - The amount of native tokens withdrawn
    pub fn withdraw(e: &Env, owner: Address, amount: i128) {
        let topics = (Symbol::new(e, "withdraw"), owner);
        e.events().publish(topics, amount);
    }
}
