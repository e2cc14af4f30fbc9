//! Append-only record of completed workflow steps.
//!
//! Every confirmed step is written as one JSON object per line, together with
//! the cluster, program and mint it ran against. A re-run reading the same
//! file skips only the steps already recorded for its own cluster, program
//! and mint.

use crate::Error;
use serde_derive::{Deserialize, Serialize};
use solana_sdk::{pubkey::Pubkey, signature::Signature};
use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    CreateMint,
    MintTo,
    Initialize,
    Approve,
    ChargeEscrow,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::CreateMint => "create_mint",
            Self::MintTo => "mint_to",
            Self::Initialize => "initialize",
            Self::Approve => "approve",
            Self::ChargeEscrow => "charge_escrow",
        };
        write!(f, "{}", name)
    }
}

/// Cluster and program a journal belongs to
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub cluster: String,
    pub program_id: Pubkey,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub step: StepKind,
    pub cluster: String,
    pub program_id: String,
    pub mint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    pub signature: String,
}

impl Entry {
    fn matches(&self, target: &Target) -> bool {
        self.cluster == target.cluster && self.program_id == target.program_id.to_string()
    }
}

#[derive(Debug)]
pub struct Journal {
    path: Option<PathBuf>,
    target: Target,
    entries: Vec<Entry>,
}

impl Journal {
    /// Journal that remembers nothing between runs
    pub fn disabled(target: Target) -> Self {
        Self {
            path: None,
            target,
            entries: vec![],
        }
    }

    /// Loads the entries recorded at `path`, a missing file is an empty journal
    pub fn open(path: &Path, target: Target) -> Result<Self, Error> {
        let mut entries = vec![];
        if path.exists() {
            let reader = BufReader::new(File::open(path)?);
            for (number, line) in reader.lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let entry: Entry = serde_json::from_str(&line).map_err(|err| {
                    format!("{}:{}: invalid journal entry: {}", path.display(), number + 1, err)
                })?;
                entries.push(entry);
            }
        }
        Ok(Self {
            path: Some(path.to_path_buf()),
            target,
            entries,
        })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Last `step` recorded for `mint` on this journal's cluster and program
    pub fn completed(&self, step: StepKind, mint: &Pubkey) -> Option<&Entry> {
        let mint = mint.to_string();
        self.entries.iter().rev().find(|entry| {
            entry.step == step && entry.mint == mint && entry.matches(&self.target)
        })
    }

    /// Mint created by an earlier run on this cluster and program
    pub fn mint(&self) -> Result<Option<Pubkey>, Error> {
        let entry = self
            .entries
            .iter()
            .rev()
            .find(|entry| entry.step == StepKind::CreateMint && entry.matches(&self.target));
        match entry {
            Some(entry) => Ok(Some(entry.mint.parse().map_err(|_| {
                format!("Journal holds an invalid mint address {}", entry.mint)
            })?)),
            None => Ok(None),
        }
    }

    pub fn record(
        &mut self,
        step: StepKind,
        mint: &Pubkey,
        amount: Option<u64>,
        signature: &Signature,
    ) -> Result<(), Error> {
        let entry = Entry {
            step,
            cluster: self.target.cluster.clone(),
            program_id: self.target.program_id.to_string(),
            mint: mint.to_string(),
            amount,
            signature: signature.to_string(),
        };
        if let Some(path) = &self.path {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{}", serde_json::to_string(&entry)?)?;
            file.sync_data()?;
        }
        self.entries.push(entry);
        Ok(())
    }
}
