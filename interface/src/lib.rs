#![deny(missing_docs)]

//! Client-side interface of the BluesCrypto staking program: program id,
//! derived addresses, instruction builders and account decoding.

pub mod error;
pub mod instruction;
pub mod pda;
pub mod state;
pub mod token;

pub use pda::{find_escrow_vault_address, find_staking_storage_address};

/// Seed prefix of the escrow vault token account
pub const ESCROW_VAULT_SEED: &[u8] = b"escrow_vault";

/// Decimals of mints created by the fixture workflow
pub const DEFAULT_MINT_DECIMALS: u8 = 9;

/// Base units minted into the identity account on every fixture run
pub const DEFAULT_INITIAL_SUPPLY: u64 = 10_000_000_000_000;

/// Allowance granted to the escrow vault
pub const DEFAULT_ESCROW_ALLOWANCE: u64 = 1_000_000;

/// Amount pulled into the escrow vault by `charge_escrow`
pub const DEFAULT_ESCROW_CHARGE: u64 = 1_000_000;

// Export current sdk types for downstream users building with a different sdk version
pub use solana_program;

solana_program::declare_id!("2XzGonB3VWc7KnGdUdU5TM7sH9kSr5PueVLc6isXTSDD");
