//! Error types

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError, instruction::InstructionError, program_error::ProgramError,
};
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

/// First custom error code the program framework hands out
pub const CUSTOM_ERROR_OFFSET: u32 = 6000;

/// Errors returned by the staking program
#[derive(Clone, Copy, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum StakingError {
    /// Package index is outside the stored packages
    #[error("Invalid package index. It must be 0 ~ 5")]
    InvalidPackageIndex,
    /// Deposit over the package maximum
    #[error("Invalid deposit amount. Deposit amount over the maximum allowed")]
    InvalidDepositAmount,
    /// Staker already has an active stake on the package
    #[error("Account already staked on same package")]
    AccountAlreadyStaked,
    /// Every slot of the package is taken
    #[error("Package slot fulfilled")]
    PackageSlotFulFilled,
    /// No stake log for the staker and package
    #[error("Account never staked")]
    AccountNeverStaked,
    /// Lock period not over yet
    #[error("Lock time period is not satisfied")]
    InvalidLockTime,
    /// Stake was already paid out
    #[error("Stake already terminated")]
    StakeAlreadyTerminated,
    /// Limited packages still have free slots
    #[error("Limited staking is still available")]
    UltimateStakingNotAvailable,
}

impl StakingError {
    /// Custom error code as reported in transaction errors
    pub fn code(self) -> u32 {
        CUSTOM_ERROR_OFFSET + self as u32
    }

    /// Maps a custom error code back to the program error, if it is one
    pub fn from_code(code: u32) -> Option<Self> {
        code.checked_sub(CUSTOM_ERROR_OFFSET).and_then(Self::from_u32)
    }

    /// Extracts the program error out of a failed transaction.
    /// With `Some(index)` only a failure of that instruction is decoded.
    pub fn from_transaction_error(
        error: &TransactionError,
        instruction_index: Option<u8>,
    ) -> Option<Self> {
        match error {
            TransactionError::InstructionError(index, InstructionError::Custom(code))
                if instruction_index.map_or(true, |expected| expected == *index) =>
            {
                Self::from_code(*code)
            }
            _ => None,
        }
    }
}

impl From<StakingError> for ProgramError {
    fn from(e: StakingError) -> Self {
        ProgramError::Custom(e.code())
    }
}

impl<T> DecodeError<T> for StakingError {
    fn type_of() -> &'static str {
        "Staking Error"
    }
}
