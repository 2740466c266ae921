// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recovery log reader for iterating and validating entries
//!
//! Iteration stops at the first invalid entry (truncated write, undecodable
//! record, checksum mismatch or a sequence that does not increase). Bytes
//! before that point are trustworthy; everything after it is not.

use super::entry::RecoveryEntry;
use dagh_core::codec::read_delimited;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when reading recovery entries
#[derive(Debug, Error)]
pub enum RecoveryReadError {
    #[error("truncated entry at byte {offset}")]
    Truncated { offset: u64 },
    #[error("corrupted entry at byte {offset}: {reason}")]
    Corrupted { offset: u64, reason: String },
    #[error("checksum mismatch for sequence {sequence} at byte {offset}")]
    ChecksumMismatch { sequence: u64, offset: u64 },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl RecoveryReadError {
    /// Byte offset of the offending entry, if the error is positional
    pub fn offset(&self) -> Option<u64> {
        match self {
            RecoveryReadError::Truncated { offset }
            | RecoveryReadError::Corrupted { offset, .. }
            | RecoveryReadError::ChecksumMismatch { offset, .. } => Some(*offset),
            RecoveryReadError::Io(_) => None,
        }
    }
}

/// Where and why a log stops being valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corruption {
    pub offset: u64,
    pub reason: String,
}

/// Result of scanning a whole log
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub valid_entries: u64,
    pub last_sequence: Option<u64>,
    /// Length of the valid prefix in bytes
    pub valid_len: u64,
    pub corruption: Option<Corruption>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.corruption.is_none()
    }
}

/// Recovery log reader
pub struct RecoveryReader {
    path: PathBuf,
}

impl RecoveryReader {
    /// Open a log file for reading
    pub fn open(path: &Path) -> Result<Self, RecoveryReadError> {
        if !path.exists() {
            return Err(RecoveryReadError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("recovery log not found: {}", path.display()),
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Create a reader that treats a missing file as an empty log
    pub fn open_or_empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Iterate over entries up to the first invalid one
    pub fn entries(&self) -> Result<RecoveryEntryIter, RecoveryReadError> {
        RecoveryEntryIter::new(&self.path)
    }

    /// Scan the whole log
    pub fn validate(&self) -> Result<ValidationReport, RecoveryReadError> {
        let mut report = ValidationReport::default();
        let mut iter = self.entries()?;
        let mut invalid = None;

        for entry in iter.by_ref() {
            match entry {
                Ok(entry) => {
                    report.valid_entries += 1;
                    report.last_sequence = Some(entry.sequence);
                }
                Err(RecoveryReadError::Io(e)) => return Err(RecoveryReadError::Io(e)),
                Err(e) => invalid = Some(e),
            }
        }

        report.valid_len = iter.valid_len;
        report.corruption = invalid.map(|e| Corruption {
            offset: e.offset().unwrap_or(report.valid_len),
            reason: e.to_string(),
        });
        Ok(report)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Iterator over recovery entries with position tracking
pub struct RecoveryEntryIter {
    reader: Option<BufReader<File>>,
    /// Bytes consumed by valid entries
    valid_len: u64,
    last_sequence: Option<u64>,
}

impl RecoveryEntryIter {
    fn new(path: &Path) -> Result<Self, RecoveryReadError> {
        let reader = match File::open(path) {
            Ok(file) => Some(BufReader::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            reader,
            valid_len: 0,
            last_sequence: None,
        })
    }

    /// Byte position after the last valid entry returned
    pub fn valid_len(&self) -> u64 {
        self.valid_len
    }

    fn read_next(&mut self) -> Option<Result<RecoveryEntry, RecoveryReadError>> {
        let reader = self.reader.as_mut()?;
        let offset = self.valid_len;

        // Clean end of file: nothing buffered and nothing left to read
        match reader.fill_buf() {
            Ok([]) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e.into())),
        }

        let mut counted = CountingReader::new(reader);
        let entry: RecoveryEntry = match read_delimited(&mut counted) {
            Ok(entry) => entry,
            Err(e) if e.is_eof() => return Some(Err(RecoveryReadError::Truncated { offset })),
            Err(e) => {
                return Some(Err(RecoveryReadError::Corrupted {
                    offset,
                    reason: e.to_string(),
                }))
            }
        };
        let consumed = counted.count;

        if !entry.verify() {
            return Some(Err(RecoveryReadError::ChecksumMismatch {
                sequence: entry.sequence,
                offset,
            }));
        }

        if self.last_sequence.is_some_and(|last| entry.sequence <= last) {
            return Some(Err(RecoveryReadError::Corrupted {
                offset,
                reason: format!("sequence {} does not follow {:?}", entry.sequence, self.last_sequence),
            }));
        }

        self.valid_len += consumed;
        self.last_sequence = Some(entry.sequence);
        Some(Ok(entry))
    }
}

impl Iterator for RecoveryEntryIter {
    type Item = Result<RecoveryEntry, RecoveryReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.read_next()?;
        if item.is_err() {
            // Nothing after an invalid entry can be trusted
            self.reader = None;
        }
        Some(item)
    }
}

struct CountingReader<'a, R> {
    inner: &'a mut R,
    count: u64,
}

impl<'a, R> CountingReader<'a, R> {
    fn new(inner: &'a mut R) -> Self {
        Self { inner, count: 0 }
    }
}

impl<R: Read> Read for CountingReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
