//! SPL token instructions used to provision fixtures

use solana_program::{
    instruction::Instruction, program_error::ProgramError, program_pack::Pack, pubkey::Pubkey,
    system_instruction,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};
use spl_token::state::{Account as TokenAccount, Mint};

/// Instructions creating and initializing a mint at `mint`.
/// `mint` must sign the transaction.
pub fn create_mint(
    payer: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    decimals: u8,
    rent_lamports: u64,
) -> Result<Vec<Instruction>, ProgramError> {
    Ok(vec![
        system_instruction::create_account(
            payer,
            mint,
            rent_lamports,
            Mint::LEN as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_mint(
            &spl_token::id(),
            mint,
            mint_authority,
            None,
            decimals,
        )?,
    ])
}

/// Associated token account of `owner` for `mint`, with the instruction creating it.
/// The instruction succeeds when the account already exists.
pub fn create_associated_account(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> (Pubkey, Instruction) {
    (
        get_associated_token_address(owner, mint),
        create_associated_token_account_idempotent(payer, owner, mint, &spl_token::id()),
    )
}

/// Mints `amount` base units into `destination`
pub fn mint_to(
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        mint_authority,
        &[],
        amount,
    )
}

/// Lets `delegate` move up to `amount` out of `source`
pub fn approve(
    source: &Pubkey,
    delegate: &Pubkey,
    owner: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    spl_token::instruction::approve(&spl_token::id(), source, delegate, owner, &[], amount)
}

/// Token amount held in raw SPL token account data
pub fn unpack_amount(data: &[u8]) -> Result<u64, ProgramError> {
    Ok(TokenAccount::unpack(data)?.amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::program_option::COption;
    use spl_token::instruction::TokenInstruction;

    #[test]
    fn associated_account_is_stable() {
        let payer = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let (first, ix) = create_associated_account(&payer, &owner, &mint);
        let (second, _) = create_associated_account(&payer, &owner, &mint);
        assert_eq!(first, second);
        assert_eq!(ix.accounts[1].pubkey, first);

        let (other, _) = create_associated_account(&payer, &owner, &Pubkey::new_unique());
        assert_ne!(first, other);
    }

    #[test]
    fn create_mint_has_no_freeze_authority() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ixs = create_mint(&payer, &mint, &payer, 9, 1_461_600).unwrap();
        assert_eq!(ixs.len(), 2);

        match TokenInstruction::unpack(&ixs[1].data).unwrap() {
            TokenInstruction::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                assert_eq!(decimals, 9);
                assert_eq!(mint_authority, payer);
                assert_eq!(freeze_authority, COption::None);
            }
            _ => panic!("expected InitializeMint"),
        }
    }

    #[test]
    fn approve_amount() {
        let ix = approve(
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            &Pubkey::new_unique(),
            1_000_000,
        )
        .unwrap();
        assert_eq!(
            TokenInstruction::unpack(&ix.data).unwrap(),
            TokenInstruction::Approve { amount: 1_000_000 }
        );
    }

    #[test]
    fn unpack_amount_rejects_short_data() {
        assert!(unpack_amount(&[0u8; 10]).is_err());
    }
}
