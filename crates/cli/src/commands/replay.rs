// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dagh replay <log> --config <file>` - Backfill sinks from a recovery log
//!
//! Recovery is always disabled for the replay router so the source log is
//! never appended to while it is being read.

use anyhow::{bail, Context, Result};
use clap::Args;
use dagh_router::{HistoryConfig, HistoryEventRouter};
use dagh_storage::RecoveryReader;
use std::path::PathBuf;

#[derive(Args)]
pub struct ReplayArgs {
    /// Recovery log file
    pub log: PathBuf,

    /// History configuration (TOML)
    #[arg(long)]
    pub config: PathBuf,
}

pub fn replay(args: ReplayArgs) -> Result<()> {
    let mut config = HistoryConfig::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    config.recovery_enabled = false;
    if !config.timeline_enabled {
        bail!(
            "timeline is disabled in {}; nothing to replay into",
            args.config.display()
        );
    }

    let reader = RecoveryReader::open(&args.log)?;
    let router = HistoryEventRouter::open(&config)?;
    router.start()?;

    let outcome = replay_entries(&reader, &router);
    router.stop()?;

    let (replayed, skipped) = outcome?;
    if skipped > 0 {
        eprintln!("warning: skipped {} undecodable entries", skipped);
    }
    println!("Replayed {} events", replayed);
    Ok(())
}

/// Route every decodable entry, returning (replayed, skipped)
fn replay_entries(reader: &RecoveryReader, router: &HistoryEventRouter) -> Result<(u64, u64)> {
    let mut replayed = 0u64;
    let mut skipped = 0u64;
    for entry in reader.entries()? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "stopping replay at invalid entry");
                break;
            }
        };
        match entry.to_event() {
            Ok(event) => {
                router.route(&event);
                replayed += 1;
            }
            Err(e) => {
                tracing::warn!(sequence = entry.sequence, error = %e, "skipping undecodable entry");
                skipped += 1;
            }
        }
    }
    Ok((replayed, skipped))
}
