mod helpers;

use bluescrypto_staking_interface::{
    find_escrow_vault_address, token, DEFAULT_ESCROW_ALLOWANCE, DEFAULT_ESCROW_CHARGE,
    DEFAULT_INITIAL_SUPPLY,
};
use helpers::*;
use solana_program::{program_option::COption, program_pack::Pack, pubkey::Pubkey};
use solana_program_test::{BanksClient, ProgramTestBanksClientExt};
use solana_sdk::{
    hash::Hash,
    signature::{Keypair, Signer},
};
use spl_token::state::Mint;

async fn setup() -> (BanksClient, Keypair, Hash, Pubkey, Pubkey) {
    let (mut banks_client, payer, recent_blockhash) = program_test().start().await;

    let mint_account = Keypair::new();
    create_mint(&mut banks_client, &payer, &recent_blockhash, &mint_account)
        .await
        .unwrap();
    let mint = mint_account.pubkey();

    let owner_ata = create_associated_account(
        &mut banks_client,
        &payer,
        &recent_blockhash,
        &payer.pubkey(),
        &mint,
    )
    .await
    .unwrap();

    (banks_client, payer, recent_blockhash, mint, owner_ata)
}

#[tokio::test]
async fn test_mint_fixture_funds_identity() {
    let (mut banks_client, payer, recent_blockhash, mint, owner_ata) = setup().await;

    assert_eq!(get_token_balance(&mut banks_client, &owner_ata).await, 0);

    mint_tokens(
        &mut banks_client,
        &payer,
        &recent_blockhash,
        &mint,
        &owner_ata,
        DEFAULT_INITIAL_SUPPLY,
    )
    .await
    .unwrap();

    assert_eq!(
        get_token_balance(&mut banks_client, &owner_ata).await,
        10_000_000_000_000
    );

    let mint_data = Mint::unpack(&get_account(&mut banks_client, &mint).await.data).unwrap();
    assert_eq!(mint_data.mint_authority, COption::Some(payer.pubkey()));
    assert_eq!(mint_data.freeze_authority, COption::None);
    assert_eq!(mint_data.decimals, MINT_DECIMALS);
    assert_eq!(mint_data.supply, DEFAULT_INITIAL_SUPPLY);
}

#[tokio::test]
async fn test_repeated_mint_to_inflates_supply() {
    let (mut banks_client, payer, recent_blockhash, mint, owner_ata) = setup().await;

    for _ in 0..2 {
        let blockhash = banks_client
            .get_new_latest_blockhash(&recent_blockhash)
            .await
            .unwrap();
        mint_tokens(
            &mut banks_client,
            &payer,
            &blockhash,
            &mint,
            &owner_ata,
            DEFAULT_INITIAL_SUPPLY,
        )
        .await
        .unwrap();
    }

    assert_eq!(
        get_token_balance(&mut banks_client, &owner_ata).await,
        2 * DEFAULT_INITIAL_SUPPLY
    );
}

#[tokio::test]
async fn test_associated_account_reused() {
    let (mut banks_client, payer, recent_blockhash, mint, owner_ata) = setup().await;

    let blockhash = banks_client
        .get_new_latest_blockhash(&recent_blockhash)
        .await
        .unwrap();
    let again = create_associated_account(
        &mut banks_client,
        &payer,
        &blockhash,
        &payer.pubkey(),
        &mint,
    )
    .await
    .unwrap();

    assert_eq!(again, owner_ata);
    let account = get_token_account(&mut banks_client, &owner_ata).await;
    assert_eq!(account.owner, payer.pubkey());
    assert_eq!(account.mint, mint);
}

#[tokio::test]
async fn test_each_run_creates_new_mint() {
    let (mut banks_client, payer, recent_blockhash, first_mint, _) = setup().await;

    let second = Keypair::new();
    create_mint(&mut banks_client, &payer, &recent_blockhash, &second)
        .await
        .unwrap();
    assert_ne!(first_mint, second.pubkey());

    let first_ata = spl_associated_token_account::get_associated_token_address(
        &payer.pubkey(),
        &first_mint,
    );
    let second_ata = create_associated_account(
        &mut banks_client,
        &payer,
        &recent_blockhash,
        &payer.pubkey(),
        &second.pubkey(),
    )
    .await
    .unwrap();
    assert_ne!(first_ata, second_ata);
}

#[tokio::test]
async fn test_program_owned_account() {
    let (mut banks_client, payer, recent_blockhash, mint, _) = setup().await;
    let program_id = bluescrypto_staking_interface::id();

    let program_ata = create_associated_account(
        &mut banks_client,
        &payer,
        &recent_blockhash,
        &program_id,
        &mint,
    )
    .await
    .unwrap();

    let account = get_token_account(&mut banks_client, &program_ata).await;
    assert_eq!(account.owner, program_id);
    assert_eq!(account.amount, 0);
}

#[tokio::test]
async fn test_approve_escrow_vault() {
    let (mut banks_client, payer, recent_blockhash, mint, owner_ata) = setup().await;
    let (escrow_vault, _) = find_escrow_vault_address(&bluescrypto_staking_interface::id(), &mint);

    mint_tokens(
        &mut banks_client,
        &payer,
        &recent_blockhash,
        &mint,
        &owner_ata,
        DEFAULT_INITIAL_SUPPLY,
    )
    .await
    .unwrap();

    let approve =
        token::approve(&owner_ata, &escrow_vault, &payer.pubkey(), DEFAULT_ESCROW_ALLOWANCE)
            .unwrap();
    send(&mut banks_client, &payer, &recent_blockhash, &[approve], &[])
        .await
        .unwrap();

    let account = get_token_account(&mut banks_client, &owner_ata).await;
    assert_eq!(account.delegate, COption::Some(escrow_vault));
    assert_eq!(account.delegated_amount, 1_000_000);
    assert_eq!(account.amount, DEFAULT_INITIAL_SUPPLY);
}

#[tokio::test]
async fn test_delegate_pulls_approved_amount() {
    let (mut banks_client, payer, recent_blockhash, mint, owner_ata) = setup().await;

    mint_tokens(
        &mut banks_client,
        &payer,
        &recent_blockhash,
        &mint,
        &owner_ata,
        DEFAULT_INITIAL_SUPPLY,
    )
    .await
    .unwrap();

    let receiver = create_associated_account(
        &mut banks_client,
        &payer,
        &recent_blockhash,
        &Pubkey::new_unique(),
        &mint,
    )
    .await
    .unwrap();

    // the program pulls with its vault address as delegate, a keypair stands in here
    let delegate = Keypair::new();
    let approve = token::approve(
        &owner_ata,
        &delegate.pubkey(),
        &payer.pubkey(),
        DEFAULT_ESCROW_ALLOWANCE,
    )
    .unwrap();
    send(&mut banks_client, &payer, &recent_blockhash, &[approve], &[])
        .await
        .unwrap();

    let owner_before = get_token_balance(&mut banks_client, &owner_ata).await;
    let receiver_before = get_token_balance(&mut banks_client, &receiver).await;

    let transfer = spl_token::instruction::transfer(
        &spl_token::id(),
        &owner_ata,
        &receiver,
        &delegate.pubkey(),
        &[],
        DEFAULT_ESCROW_CHARGE,
    )
    .unwrap();
    send(
        &mut banks_client,
        &payer,
        &recent_blockhash,
        &[transfer],
        &[&delegate],
    )
    .await
    .unwrap();

    let owner_after = get_token_balance(&mut banks_client, &owner_ata).await;
    let receiver_after = get_token_balance(&mut banks_client, &receiver).await;
    assert_eq!(receiver_after - receiver_before, 1_000_000);
    assert_eq!(owner_before - owner_after, 1_000_000);
    assert_eq!(owner_before + receiver_before, owner_after + receiver_after);

    let account = get_token_account(&mut banks_client, &owner_ata).await;
    assert_eq!(account.delegated_amount, 0);

    // allowance is spent
    let blockhash = banks_client
        .get_new_latest_blockhash(&recent_blockhash)
        .await
        .unwrap();
    let transfer = spl_token::instruction::transfer(
        &spl_token::id(),
        &owner_ata,
        &receiver,
        &delegate.pubkey(),
        &[],
        1,
    )
    .unwrap();
    assert!(
        send(&mut banks_client, &payer, &blockhash, &[transfer], &[&delegate])
            .await
            .is_err()
    );
    assert_eq!(
        get_token_balance(&mut banks_client, &owner_ata).await,
        owner_after
    );
}
