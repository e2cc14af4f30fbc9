#![allow(dead_code)]

use bluescrypto_staking_interface::token;
use solana_program::{hash::Hash, program_pack::Pack, pubkey::Pubkey};
use solana_program_test::*;
use solana_sdk::{
    account::Account,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_token::state::{Account as TokenAccount, Mint};

pub const MINT_DECIMALS: u8 = 9;

pub fn program_test() -> ProgramTest {
    // SPL token and associated token account programs are preloaded
    ProgramTest::default()
}

pub async fn get_account(banks_client: &mut BanksClient, pubkey: &Pubkey) -> Account {
    banks_client
        .get_account(*pubkey)
        .await
        .expect("account not found")
        .expect("account empty")
}

pub async fn get_token_account(banks_client: &mut BanksClient, token: &Pubkey) -> TokenAccount {
    let account = get_account(banks_client, token).await;
    TokenAccount::unpack(&account.data).unwrap()
}

pub async fn get_token_balance(banks_client: &mut BanksClient, token: &Pubkey) -> u64 {
    let account = get_account(banks_client, token).await;
    token::unpack_amount(&account.data).unwrap()
}

pub async fn send(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    recent_blockhash: &Hash,
    instructions: &[solana_program::instruction::Instruction],
    extra_signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let mut signers = vec![payer];
    signers.extend_from_slice(extra_signers);
    let transaction = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &signers,
        *recent_blockhash,
    );
    banks_client.process_transaction(transaction).await?;
    Ok(())
}

pub async fn create_mint(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    recent_blockhash: &Hash,
    mint_account: &Keypair,
) -> Result<(), BanksClientError> {
    let rent = banks_client.get_rent().await.unwrap();
    let instructions = token::create_mint(
        &payer.pubkey(),
        &mint_account.pubkey(),
        &payer.pubkey(),
        MINT_DECIMALS,
        rent.minimum_balance(Mint::LEN),
    )
    .unwrap();
    send(
        banks_client,
        payer,
        recent_blockhash,
        &instructions,
        &[mint_account],
    )
    .await
}

pub async fn create_associated_account(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    recent_blockhash: &Hash,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, BanksClientError> {
    let (address, instruction) = token::create_associated_account(&payer.pubkey(), owner, mint);
    send(banks_client, payer, recent_blockhash, &[instruction], &[]).await?;
    Ok(address)
}

pub async fn mint_tokens(
    banks_client: &mut BanksClient,
    payer: &Keypair,
    recent_blockhash: &Hash,
    mint: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) -> Result<(), BanksClientError> {
    let instruction = token::mint_to(mint, destination, &payer.pubkey(), amount).unwrap();
    send(banks_client, payer, recent_blockhash, &[instruction], &[]).await
}
