// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recovery log writer
//!
//! Appends are serialized through a mutex and synced to disk before they
//! return. The first I/O failure marks the log as failed for good; a failed
//! log rejects every later delivery instead of writing after a gap.

use super::entry::RecoveryEntry;
use super::reader::RecoveryReader;
use crate::StorageError;
use dagh_adapters::{HistorySink, RecoverySink, SinkError};
use dagh_core::codec::write_delimited;
use dagh_core::DagHistoryEvent;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// File-backed recovery sink
pub struct RecoveryLog {
    path: PathBuf,
    state: Mutex<LogFile>,
    failed: AtomicBool,
}

struct LogFile {
    file: File,
    next_sequence: u64,
}

impl RecoveryLog {
    /// Open or create a recovery log
    ///
    /// An existing log is scanned for its last valid entry. A corrupted tail
    /// is cut off so new entries follow directly after the valid prefix.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let report = RecoveryReader::open_or_empty(path).validate()?;

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        if let Some(corruption) = &report.corruption {
            tracing::warn!(
                path = %path.display(),
                offset = corruption.offset,
                reason = %corruption.reason,
                "truncating corrupted recovery log tail"
            );
            file.set_len(report.valid_len)?;
            file.sync_all()?;
        }

        let next_sequence = report.last_sequence.map(|s| s + 1).unwrap_or(1);
        tracing::debug!(path = %path.display(), next_sequence, "opened recovery log");

        Ok(Self {
            path: path.to_path_buf(),
            state: Mutex::new(LogFile {
                file,
                next_sequence,
            }),
            failed: AtomicBool::new(false),
        })
    }

    /// Append one event, returning its sequence number
    pub fn append(&self, event: &DagHistoryEvent) -> Result<u64, StorageError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let sequence = state.next_sequence;
        let entry = RecoveryEntry::from_event(sequence, event)?;

        let mut buf = Vec::new();
        write_delimited(&mut buf, &entry)?;

        let written = state
            .file
            .write_all(&buf)
            .and_then(|()| state.file.sync_data());
        if let Err(e) = written {
            self.failed.store(true, Ordering::SeqCst);
            tracing::error!(path = %self.path.display(), sequence, error = %e, "recovery log write failed");
            return Err(e.into());
        }

        state.next_sequence += 1;
        Ok(sequence)
    }

    /// Sequence number the next append will get
    pub fn next_sequence(&self) -> u64 {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .next_sequence
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mark the log failed; used when the owner detects an unrecoverable fault
    pub fn mark_failed(&self) {
        self.failed.store(true, Ordering::SeqCst);
    }
}

impl HistorySink for RecoveryLog {
    fn handle(&self, event: &DagHistoryEvent) -> Result<(), SinkError> {
        if self.has_failed() {
            return Err(SinkError::Unavailable(format!(
                "recovery log {} has failed",
                self.path.display()
            )));
        }
        self.append(event)?;
        Ok(())
    }

    fn stop(&self) -> Result<(), SinkError> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.sync_all()?;
        Ok(())
    }
}

impl RecoverySink for RecoveryLog {
    fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
