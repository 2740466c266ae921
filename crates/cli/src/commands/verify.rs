// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dagh verify <log>` - Check a recovery log

use crate::output::{self, OutputFormat};
use anyhow::{bail, Result};
use clap::Args;
use dagh_storage::{RecoveryReader, ValidationReport};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct VerifyArgs {
    /// Recovery log file
    pub log: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct Summary {
    valid_entries: u64,
    last_sequence: Option<u64>,
    valid_bytes: u64,
    corrupted_at: Option<u64>,
    reason: Option<String>,
}

impl From<&ValidationReport> for Summary {
    fn from(report: &ValidationReport) -> Self {
        Self {
            valid_entries: report.valid_entries,
            last_sequence: report.last_sequence,
            valid_bytes: report.valid_len,
            corrupted_at: report.corruption.as_ref().map(|c| c.offset),
            reason: report.corruption.as_ref().map(|c| c.reason.clone()),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} valid entries", self.valid_entries)?;
        if let Some(sequence) = self.last_sequence {
            write!(f, ", last sequence {}", sequence)?;
        }
        if let (Some(offset), Some(reason)) = (self.corrupted_at, &self.reason) {
            write!(f, "\ncorrupted at byte {}: {}", offset, reason)?;
        }
        Ok(())
    }
}

pub fn verify(args: VerifyArgs) -> Result<()> {
    let report = RecoveryReader::open(&args.log)?.validate()?;
    output::write_value(&mut std::io::stdout().lock(), &Summary::from(&report), args.format)?;

    if let Some(corruption) = report.corruption {
        bail!(
            "{} is corrupted at byte {}",
            args.log.display(),
            corruption.offset
        );
    }
    Ok(())
}
