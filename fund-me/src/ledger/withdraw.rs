use soroban_sdk::{Address, Env};

use crate::{errors::FundMeError, storage};

use super::{owner::require_owner, token};

/// Withdraw the pooled balance to the owner and reset every funder
///
/// The list of funders is read back from storage on every iteration.
///
/// Returns the amount withdrawn
///
/// ### Arguments
/// * `caller` - The address requesting the withdrawal
///
/// ### Errors
/// * `NotOwner` - If `caller` is not the owner
/// * `TransferFailed` - If the pooled balance cannot be transferred to the owner
pub fn execute_withdraw(e: &Env, caller: &Address) -> Result<i128, FundMeError> {
    let owner = require_owner(e, caller)?;

    let mut index: u32 = 0;
    while index < storage::get_funder_count(e) {
        if let Some(funder) = storage::get_funder(e, index) {
            reset_funder(e, &funder);
        }
        index += 1;
    }
    storage::clear_funders(e);

    settle(e, &owner)
}

/// Withdraw the pooled balance to the owner and reset every funder
///
/// The list of funders is read from storage once before the reset loop. The resulting
/// state is identical to `execute_withdraw`.
///
/// Returns the amount withdrawn
///
/// ### Arguments
/// * `caller` - The address requesting the withdrawal
///
/// ### Errors
/// * `NotOwner` - If `caller` is not the owner
/// * `TransferFailed` - If the pooled balance cannot be transferred to the owner
pub fn execute_cheaper_withdraw(e: &Env, caller: &Address) -> Result<i128, FundMeError> {
    let owner = require_owner(e, caller)?;

    let funders = storage::get_funders(e);
    for funder in funders.iter() {
        reset_funder(e, &funder);
    }
    storage::clear_funders(e);

    settle(e, &owner)
}

fn reset_funder(e: &Env, funder: &Address) {
    storage::set_amount_funded(e, funder, &0);
}

/// Transfer the entire held balance to `owner` in a single transfer
fn settle(e: &Env, owner: &Address) -> Result<i128, FundMeError> {
    let balance = token::held_balance(e);
    if balance > 0 {
        token::transfer(e, &e.current_contract_address(), owner, balance)?;
    }
    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::SCALAR_7, ledger::execute_fund, testutils};
    use soroban_sdk::{testutils::Address as _, vec, Vec};

    /// Fund the contract from `count` new funders, 1000 tokens each, with the first
    /// funder contributing twice
    fn fund_from_many(e: &Env, setup: &testutils::FundMeSetup, count: u32) -> Vec<Address> {
        let mut funders = vec![e];
        for _ in 0..count {
            let funder = Address::generate(e);
            setup.token_client.mint(&funder, &(2_000 * SCALAR_7));
            funders.push_back(funder);
        }
        e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();
            for funder in funders.iter() {
                execute_fund(e, &funder, 1_000 * SCALAR_7).unwrap();
            }
            execute_fund(e, &funders.get_unchecked(0), 1_000 * SCALAR_7).unwrap();
        });
        funders
    }

    #[test]
    fn test_execute_withdraw() {
        let e = Env::default();
        e.mock_all_auths();
        testutils::setup_ledger(&e);

        let setup = testutils::setup_fund_me(&e);
        let funders = fund_from_many(&e, &setup, 5);
        assert_eq!(
            setup.token_client.balance(&setup.fund_me),
            6_000 * SCALAR_7
        );

        e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();

            let withdrawn = execute_withdraw(&e, &setup.owner).unwrap();
            assert_eq!(withdrawn, 6_000 * SCALAR_7);

            assert_eq!(storage::get_funder_count(&e), 0);
            assert_eq!(storage::get_funder(&e, 0), None);
            for funder in funders.iter() {
                assert_eq!(storage::get_amount_funded(&e, &funder), 0);
            }
        });
        assert_eq!(setup.token_client.balance(&setup.fund_me), 0);
        assert_eq!(
            setup.token_client.balance(&setup.owner),
            6_000 * SCALAR_7
        );
    }

    #[test]
    fn test_execute_cheaper_withdraw() {
        let e = Env::default();
        e.mock_all_auths();
        testutils::setup_ledger(&e);

        let setup = testutils::setup_fund_me(&e);
        let funders = fund_from_many(&e, &setup, 5);

        e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();

            let withdrawn = execute_cheaper_withdraw(&e, &setup.owner).unwrap();
            assert_eq!(withdrawn, 6_000 * SCALAR_7);

            assert_eq!(storage::get_funder_count(&e), 0);
            assert_eq!(storage::get_funder(&e, 0), None);
            for funder in funders.iter() {
                assert_eq!(storage::get_amount_funded(&e, &funder), 0);
            }
        });
        assert_eq!(setup.token_client.balance(&setup.fund_me), 0);
        assert_eq!(
            setup.token_client.balance(&setup.owner),
            6_000 * SCALAR_7
        );
    }

    #[test]
    fn test_withdraw_variants_leave_identical_state() {
        let e = Env::default();
        e.mock_all_auths();
        testutils::setup_ledger(&e);

        let setup = testutils::setup_fund_me(&e);

        // replay the same history against both strategies
        let funders = fund_from_many(&e, &setup, 3);
        let standard = e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();
            execute_withdraw(&e, &setup.owner).unwrap()
        });
        let standard_state = e.as_contract(&setup.fund_me, || {
            let mut balances: Vec<i128> = vec![&e];
            for funder in funders.iter() {
                balances.push_back(storage::get_amount_funded(&e, &funder));
            }
            (storage::get_funders(&e), balances)
        });

        for funder in funders.iter() {
            setup.token_client.mint(&funder, &(2_000 * SCALAR_7));
        }
        e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();
            for funder in funders.iter() {
                execute_fund(&e, &funder, 1_000 * SCALAR_7).unwrap();
            }
            execute_fund(&e, &funders.get_unchecked(0), 1_000 * SCALAR_7).unwrap();
        });
        let cheaper = e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();
            execute_cheaper_withdraw(&e, &setup.owner).unwrap()
        });
        let cheaper_state = e.as_contract(&setup.fund_me, || {
            let mut balances: Vec<i128> = vec![&e];
            for funder in funders.iter() {
                balances.push_back(storage::get_amount_funded(&e, &funder));
            }
            (storage::get_funders(&e), balances)
        });

        assert_eq!(standard, 4_000 * SCALAR_7);
        assert_eq!(standard, cheaper);
        assert_eq!(standard_state, cheaper_state);
        assert_eq!(
            setup.token_client.balance(&setup.owner),
            8_000 * SCALAR_7
        );
    }

    #[test]
    fn test_execute_withdraw_not_owner() {
        let e = Env::default();
        e.mock_all_auths();
        testutils::setup_ledger(&e);

        let setup = testutils::setup_fund_me(&e);
        let funders = fund_from_many(&e, &setup, 2);
        let sauron = Address::generate(&e);

        e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();

            assert_eq!(
                execute_withdraw(&e, &sauron),
                Err(FundMeError::NotOwner)
            );
            assert_eq!(
                execute_cheaper_withdraw(&e, &sauron),
                Err(FundMeError::NotOwner)
            );

            assert_eq!(storage::get_funder_count(&e), 3);
            assert_eq!(
                storage::get_amount_funded(&e, &funders.get_unchecked(0)),
                2_000 * SCALAR_7
            );
            assert_eq!(
                storage::get_amount_funded(&e, &funders.get_unchecked(1)),
                1_000 * SCALAR_7
            );
        });
        assert_eq!(
            setup.token_client.balance(&setup.fund_me),
            3_000 * SCALAR_7
        );
        assert_eq!(setup.token_client.balance(&sauron), 0);
    }

    #[test]
    fn test_execute_withdraw_with_no_funders() {
        let e = Env::default();
        e.mock_all_auths();
        testutils::setup_ledger(&e);

        let setup = testutils::setup_fund_me(&e);

        e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();

            assert_eq!(execute_withdraw(&e, &setup.owner), Ok(0));
            assert_eq!(execute_cheaper_withdraw(&e, &setup.owner), Ok(0));
            assert_eq!(storage::get_funder_count(&e), 0);
        });
        assert_eq!(setup.token_client.balance(&setup.owner), 0);
    }

    #[test]
    fn test_execute_withdraw_sweeps_direct_transfers() {
        let e = Env::default();
        e.mock_all_auths();
        testutils::setup_ledger(&e);

        let setup = testutils::setup_fund_me(&e);
        fund_from_many(&e, &setup, 1);
        // tokens sent outside of `fund` are part of the held balance
        setup.token_client.mint(&setup.fund_me, &(5 * SCALAR_7));

        e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();

            assert_eq!(
                execute_cheaper_withdraw(&e, &setup.owner),
                Ok(2_005 * SCALAR_7)
            );
        });
        assert_eq!(setup.token_client.balance(&setup.fund_me), 0);
    }

    #[test]
    fn test_execute_withdraw_transfer_failed() {
        let e = Env::default();
        e.mock_all_auths();
        testutils::setup_ledger(&e);

        let setup = testutils::setup_fund_me(&e);
        fund_from_many(&e, &setup, 2);
        setup.token_client.set_blocked(&setup.owner, &true);

        e.as_contract(&setup.fund_me, || {
            e.mock_all_auths_allowing_non_root_auth();

            assert_eq!(
                execute_withdraw(&e, &setup.owner),
                Err(FundMeError::TransferFailed)
            );
        });
        assert_eq!(
            setup.token_client.balance(&setup.fund_me),
            3_000 * SCALAR_7
        );
        assert_eq!(setup.token_client.balance(&setup.owner), 0);
    }
}
