// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! File-backed history sinks
//!
//! - [`RecoveryLog`]: append-only binary log of recovery events, synced per append
//! - [`RecoveryReader`]: iterates and validates a recovery log
//! - [`TimelineLog`]: timeline entities as JSON lines

mod error;
pub mod recovery;
pub mod timeline_log;

pub use error::StorageError;
pub use recovery::{
    Corruption, RecoveryEntry, RecoveryEntryIter, RecoveryLog, RecoveryReadError, RecoveryReader,
    ValidationReport,
};
pub use timeline_log::TimelineLog;
