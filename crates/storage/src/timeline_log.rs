// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline sink writing one JSON entity per line

use crate::StorageError;
use dagh_adapters::{HistorySink, SinkError};
use dagh_core::{DagHistoryEvent, TimelineEntity};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File-backed timeline sink
pub struct TimelineLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl TimelineLog {
    /// Open or create a timeline log for appending
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Append the event's timeline entity
    pub fn append(&self, event: &DagHistoryEvent) -> Result<(), StorageError> {
        let entity = event.history_event().to_timeline_entity();
        let mut line = serde_json::to_vec(&entity)?;
        line.push(b'\n');

        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.write_all(&line)?;
        Ok(())
    }

    /// Read every entity in a timeline log
    ///
    /// A missing file reads as empty. Blank lines are skipped.
    pub fn read_entities(path: &Path) -> Result<Vec<TimelineEntity>, StorageError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entities = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entities.push(serde_json::from_str(&line)?);
        }
        Ok(entities)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for TimelineLog {
    fn handle(&self, event: &DagHistoryEvent) -> Result<(), SinkError> {
        self.append(event)?;
        Ok(())
    }

    fn stop(&self) -> Result<(), SinkError> {
        let file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "timeline_log_tests.rs"]
mod tests;
