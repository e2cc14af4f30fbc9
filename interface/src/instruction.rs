//! Instruction types

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::pda::{find_escrow_vault_address, find_staking_storage_address};

/// Instructions supported by the staking program.
/// Data is an 8 byte `global:` discriminator followed by the borsh encoded arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum StakingInstruction {
    ///   Creates the staking storage and the escrow vault for a mint
    ///
    ///   0. `[w]` Staking storage, PDA with no seeds
    ///   1. `[ws]` Payer
    ///   2. `[]` System program
    ///   3. `[]` Token program
    ///   4. `[w]` Escrow vault, PDA of `["escrow_vault", mint]`
    ///   5. `[]` Mint
    Initialize,

    ///   Deposits tokens into one of the staking packages
    ///
    ///   0. `[]` Token program
    ///   1. `[w]` Source token account
    ///   2. `[ws]` Source owner or delegate
    ///   3. `[w]` Staking storage
    ///   4. `[]` System program
    ///   5. `[w]` Escrow vault
    ///   6. `[]` Mint
    Stake {
        /// Index into the storage packages
        package_index: u8,
        /// Base units to deposit
        deposit_amount: u64,
    },

    ///   Pays the package reward out of the escrow vault once the lock period is over
    ///
    ///   0. `[]` Token program
    ///   1. `[w]` Destination token account, must be the staking account
    ///   2. `[ws]` Staker
    ///   3. `[w]` Staking storage
    ///   4. `[w]` Escrow vault
    ///   5. `[]` Mint
    ///   6. `[]` System program
    Withdraw {
        /// Bump of the escrow vault address
        escrow_bump: u8,
        /// Index into the storage packages
        package_index: u8,
    },

    ///   Moves tokens from a token account into the escrow vault
    ///
    ///   0. `[]` Token program
    ///   1. `[w]` Source token account
    ///   2. `[ws]` Source owner or delegate
    ///   3. `[]` System program
    ///   4. `[w]` Escrow vault
    ///   5. `[]` Mint
    ChargeEscrow {
        /// Base units to move
        deposit_amount: u64,
    },
}

impl StakingInstruction {
    /// Method name as exposed by the program
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::Stake { .. } => "stake",
            Self::Withdraw { .. } => "withdraw",
            Self::ChargeEscrow { .. } => "charge_escrow",
        }
    }

    /// Serializes the instruction into program input
    pub fn pack(&self) -> Result<Vec<u8>, ProgramError> {
        let mut data = discriminator(self.name()).to_vec();
        match self {
            Self::Initialize => Ok(()),
            Self::Stake {
                package_index,
                deposit_amount,
            } => write(&mut data, &(*package_index, *deposit_amount)),
            Self::Withdraw {
                escrow_bump,
                package_index,
            } => write(&mut data, &(*escrow_bump, *package_index)),
            Self::ChargeEscrow { deposit_amount } => write(&mut data, deposit_amount),
        }?;
        Ok(data)
    }

    /// Deserializes program input back into an instruction
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        if input.len() < 8 {
            return Err(ProgramError::InvalidInstructionData);
        }
        let (tag, mut rest) = input.split_at(8);

        let instruction = if tag == &discriminator("initialize")[..] {
            Self::Initialize
        } else if tag == &discriminator("stake")[..] {
            let (package_index, deposit_amount) = read(&mut rest)?;
            Self::Stake {
                package_index,
                deposit_amount,
            }
        } else if tag == &discriminator("withdraw")[..] {
            let (escrow_bump, package_index) = read(&mut rest)?;
            Self::Withdraw {
                escrow_bump,
                package_index,
            }
        } else if tag == &discriminator("charge_escrow")[..] {
            Self::ChargeEscrow {
                deposit_amount: read(&mut rest)?,
            }
        } else {
            return Err(ProgramError::InvalidInstructionData);
        };

        if !rest.is_empty() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(instruction)
    }
}

fn write<T: BorshSerialize>(data: &mut Vec<u8>, args: &T) -> Result<(), ProgramError> {
    borsh::to_writer(data, args).map_err(|e| ProgramError::BorshIoError(e.to_string()))
}

fn read<T: BorshDeserialize>(input: &mut &[u8]) -> Result<T, ProgramError> {
    T::deserialize(input).map_err(|_| ProgramError::InvalidInstructionData)
}

/// Anchor instruction discriminator: first 8 bytes of `sha256("global:<name>")`
pub fn discriminator(name: &str) -> [u8; 8] {
    let preimage = format!("global:{}", name);
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    disc
}

/// Creates an `Initialize` instruction
pub fn initialize(
    program_id: &Pubkey,
    payer: &Pubkey,
    mint: &Pubkey,
) -> Result<Instruction, ProgramError> {
    let (staking_storage, _) = find_staking_storage_address(program_id);
    let (escrow_vault, _) = find_escrow_vault_address(program_id, mint);
    let accounts = vec![
        AccountMeta::new(staking_storage, false),
        AccountMeta::new(*payer, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new(escrow_vault, false),
        AccountMeta::new_readonly(*mint, false),
    ];
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: StakingInstruction::Initialize.pack()?,
    })
}

/// Creates a `ChargeEscrow` instruction
pub fn charge_escrow(
    program_id: &Pubkey,
    from: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let (escrow_vault, _) = find_escrow_vault_address(program_id, mint);
    let accounts = vec![
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new(*from, false),
        AccountMeta::new(*authority, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new(escrow_vault, false),
        AccountMeta::new_readonly(*mint, false),
    ];
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: StakingInstruction::ChargeEscrow {
            deposit_amount: amount,
        }
        .pack()?,
    })
}

/// Creates a `Stake` instruction
pub fn stake(
    program_id: &Pubkey,
    from: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    package_index: u8,
    amount: u64,
) -> Result<Instruction, ProgramError> {
    let (staking_storage, _) = find_staking_storage_address(program_id);
    let (escrow_vault, _) = find_escrow_vault_address(program_id, mint);
    let accounts = vec![
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new(*from, false),
        AccountMeta::new(*authority, true),
        AccountMeta::new(staking_storage, false),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new(escrow_vault, false),
        AccountMeta::new_readonly(*mint, false),
    ];
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: StakingInstruction::Stake {
            package_index,
            deposit_amount: amount,
        }
        .pack()?,
    })
}

/// Creates a `Withdraw` instruction, the escrow bump is derived here
pub fn withdraw(
    program_id: &Pubkey,
    to: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    package_index: u8,
) -> Result<Instruction, ProgramError> {
    let (staking_storage, _) = find_staking_storage_address(program_id);
    let (escrow_vault, escrow_bump) = find_escrow_vault_address(program_id, mint);
    let accounts = vec![
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new(*to, false),
        AccountMeta::new(*authority, true),
        AccountMeta::new(staking_storage, false),
        AccountMeta::new(escrow_vault, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];
    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data: StakingInstruction::Withdraw {
            escrow_bump,
            package_index,
        }
        .pack()?,
    })
}
