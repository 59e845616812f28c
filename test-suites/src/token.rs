use mock_token::{MockToken, MockTokenClient};
use soroban_sdk::{
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

/// Deploy a Stellar Asset Contract with 7 decimals to act as the native token
pub fn create_stellar_token<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, TokenClient<'a>, StellarAssetClient<'a>) {
    let contract_id = e.register_stellar_asset_contract_v2(admin.clone());
    let address = contract_id.address();
    (
        address.clone(),
        TokenClient::new(e, &address),
        StellarAssetClient::new(e, &address),
    )
}

/// Deploy a mock token whose admin can block addresses from moving tokens
pub fn create_mock_token<'a>(
    e: &Env,
    admin: &Address,
    decimals: u32,
) -> (Address, MockTokenClient<'a>) {
    let contract_id = e.register(MockToken {}, (admin.clone(), decimals));
    (contract_id.clone(), MockTokenClient::new(e, &contract_id))
}
