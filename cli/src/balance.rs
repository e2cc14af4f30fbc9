//! Token balance lookups

use crate::Error;
use bluescrypto_staking_interface::token::unpack_amount;
use serde_json::json;
use solana_account_decoder::UiAccountEncoding;
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{RpcAccountInfoConfig, RpcTokenAccountsFilter},
    rpc_request::RpcRequest,
    rpc_response::{Response, RpcKeyedAccount},
};
use solana_sdk::{account::Account, commitment_config::CommitmentConfig, pubkey::Pubkey};

/// Balance of the first token account of `mint` held by `owner`, 0 when there is none
pub fn get_token_balance(
    rpc_client: &RpcClient,
    owner: &Pubkey,
    mint: &Pubkey,
    commitment_config: CommitmentConfig,
) -> Result<u64, Error> {
    // raw bytes instead of the jsonParsed default so the spl-token layout decodes them
    let response: Response<Vec<RpcKeyedAccount>> = rpc_client.send(
        RpcRequest::GetTokenAccountsByOwner,
        json!([
            owner.to_string(),
            RpcTokenAccountsFilter::Mint(mint.to_string()),
            RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                commitment: Some(commitment_config),
                ..RpcAccountInfoConfig::default()
            },
        ]),
    )?;
    log::debug!(
        "{} token accounts of mint {} owned by {}",
        response.value.len(),
        mint,
        owner
    );
    balance_from_keyed_accounts(&response.value)
}

/// Decodes the amount of the first returned account
pub fn balance_from_keyed_accounts(accounts: &[RpcKeyedAccount]) -> Result<u64, Error> {
    let keyed = match accounts.first() {
        Some(keyed) => keyed,
        None => return Ok(0),
    };
    let account: Account = keyed
        .account
        .decode()
        .ok_or_else(|| format!("Unable to decode token account {}", keyed.pubkey))?;
    Ok(unpack_amount(&account.data)?)
}
