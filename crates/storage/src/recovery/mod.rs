// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recovery log: durable record of recovery-applicable events
//!
//! The file is a concatenation of length-delimited [`RecoveryEntry`]
//! records. Each entry wraps one event's own record as an opaque payload
//! together with a CRC32 of that payload, so a torn write at the tail is
//! detected and the log is usable up to the last complete entry.

mod entry;
mod log;
mod reader;

pub use entry::RecoveryEntry;
pub use log::RecoveryLog;
pub use reader::{Corruption, RecoveryEntryIter, RecoveryReadError, RecoveryReader, ValidationReport};
