//! State transition types

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{hash::hash, pubkey::Pubkey};
use thiserror::Error;

use crate::error::StakingError;

/// Errors decoding program accounts
#[derive(Debug, Error)]
pub enum StateError {
    /// Shorter than the account discriminator
    #[error("account data too small: {0} bytes")]
    AccountTooSmall(usize),
    /// Data belongs to another account type
    #[error("account discriminator does not match {0}")]
    InvalidDiscriminator(&'static str),
    /// Body could not be decoded
    #[error("malformed account data: {0}")]
    Malformed(#[from] std::io::Error),
}

/// Staking package offered by the program
#[derive(Clone, Debug, Default, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct Package {
    /// Display name
    pub name: String,
    /// Largest single deposit accepted
    pub max_deposit_amount: u64,
    /// Lock period in seconds
    pub period: i64,
    /// Reward paid on withdraw
    pub apr: u64,
    /// Maximum concurrent stakers
    pub slot_limit: u8,
    /// Current stakers
    pub slot_count: u8,
}

impl Package {
    /// True once every slot is taken
    pub fn is_full(&self) -> bool {
        self.slot_count >= self.slot_limit
    }
}

/// Record of a single stake
#[derive(Clone, Debug, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct StakeLog {
    /// Token account the stake came from
    pub staker: Pubkey,
    /// Package staked into
    pub package_index: u8,
    /// Unix timestamp of the deposit
    pub stake_timestamp: i64,
    /// Set once withdrawn
    pub terminated: bool,
}

impl StakeLog {
    /// First unix timestamp at which the stake can be withdrawn
    pub fn unlock_timestamp(&self, package: &Package) -> i64 {
        self.stake_timestamp.saturating_add(package.period)
    }
}

/// Package without slot limits
#[derive(Clone, Debug, Default, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct UltimatePackage {
    /// Display name
    pub name: String,
    /// Yearly yield
    pub apy: u64,
    /// Lock period in seconds
    pub period: i64,
}

/// Global program state kept at the storage PDA
#[derive(Clone, Debug, Default, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct StakingStorage {
    /// Packages created by `initialize`
    pub packages: Vec<Package>,
    /// Every stake ever made
    pub stake_logs: Vec<StakeLog>,
    /// Unlimited package
    pub ultimate_package: UltimatePackage,
}

impl StakingStorage {
    /// Account type name used for the discriminator
    pub const ACCOUNT_NAME: &'static str = "StakingStorage";

    /// Anchor account discriminator: first 8 bytes of `sha256("account:StakingStorage")`
    pub fn discriminator() -> [u8; 8] {
        let mut disc = [0u8; 8];
        disc.copy_from_slice(
            &hash(format!("account:{}", Self::ACCOUNT_NAME).as_bytes()).to_bytes()[..8],
        );
        disc
    }

    /// Decodes account data, the account is allocated larger than its content
    /// so trailing bytes are ignored
    pub fn unpack(data: &[u8]) -> Result<Self, StateError> {
        if data.len() < 8 {
            return Err(StateError::AccountTooSmall(data.len()));
        }
        let (disc, mut body) = data.split_at(8);
        if disc != Self::discriminator() {
            return Err(StateError::InvalidDiscriminator(Self::ACCOUNT_NAME));
        }
        Ok(Self::deserialize(&mut body)?)
    }

    /// Active, not yet withdrawn stake of `staker` in a package
    pub fn active_stake(&self, staker: &Pubkey, package_index: u8) -> Option<&StakeLog> {
        self.stake_logs.iter().find(|log| {
            log.staker == *staker && log.package_index == package_index && !log.terminated
        })
    }

    /// Error the program returns when `staker` withdraws from a package at `now`
    pub fn check_withdraw(
        &self,
        staker: &Pubkey,
        package_index: u8,
        now: i64,
    ) -> Result<&StakeLog, StakingError> {
        let package = self
            .packages
            .get(package_index as usize)
            .ok_or(StakingError::InvalidPackageIndex)?;
        let log = match self.active_stake(staker, package_index) {
            Some(log) => log,
            None if self
                .stake_logs
                .iter()
                .any(|log| log.staker == *staker && log.package_index == package_index) =>
            {
                return Err(StakingError::StakeAlreadyTerminated)
            }
            None => return Err(StakingError::AccountNeverStaked),
        };
        if log.unlock_timestamp(package) > now {
            return Err(StakingError::InvalidLockTime);
        }
        Ok(log)
    }
}
