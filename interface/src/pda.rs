//! Program derived addresses

use crate::ESCROW_VAULT_SEED;
use solana_program::pubkey::Pubkey;

/// Generates the address of the single staking storage account.
/// The program derives it from an empty seed list.
pub fn find_staking_storage_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[], program_id)
}

/// Generates the escrow vault token account address for a mint
pub fn find_escrow_vault_address(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_VAULT_SEED, mint.as_ref()], program_id)
}
