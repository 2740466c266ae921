// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dagh dump <log>` - Print recovery log entries

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use dagh_core::TimelineEntity;
use dagh_storage::{RecoveryEntry, RecoveryReader};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct DumpArgs {
    /// Recovery log file
    pub log: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// One decoded entry as shown to the user
#[derive(Debug, Serialize)]
pub struct DumpedEntry {
    pub sequence: u64,
    pub dag_id: Option<String>,
    pub event_type: String,
    pub event: String,
    pub entity: TimelineEntity,
}

impl DumpedEntry {
    fn from_entry(entry: &RecoveryEntry) -> Result<Self> {
        let event = entry
            .to_event()
            .with_context(|| format!("failed to decode entry {}", entry.sequence))?;

        Ok(Self {
            sequence: entry.sequence,
            dag_id: entry.dag_id.clone(),
            event_type: event.event_type().to_string(),
            event: event.history_event().to_string(),
            entity: event.history_event().to_timeline_entity(),
        })
    }
}

impl fmt::Display for DumpedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6}  {:<20} {:<20} {}",
            self.sequence,
            self.dag_id.as_deref().unwrap_or("-"),
            self.event_type,
            self.event
        )
    }
}

pub fn dump(args: DumpArgs) -> Result<()> {
    let reader = RecoveryReader::open(&args.log)?;
    let mut out = std::io::stdout().lock();

    let mut stopped = None;
    for entry in reader.entries()? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                stopped = Some(e);
                continue;
            }
        };
        match DumpedEntry::from_entry(&entry) {
            Ok(dumped) => output::write_value_line(&mut out, &dumped, args.format)?,
            Err(e) => eprintln!("warning: skipping entry: {:#}", e),
        }
    }

    if let Some(e) = stopped {
        eprintln!("warning: log ends with an invalid entry: {}", e);
    }
    Ok(())
}
