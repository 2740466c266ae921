// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal states reported by finish events

use crate::codec::CodecError;
use std::fmt;

/// Final state of a DAG or vertex
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum TerminalState {
    Succeeded = 1,
    Failed = 2,
    Killed = 3,
    Error = 4,
}

impl TerminalState {
    pub fn as_str(self) -> &'static str {
        match self {
            TerminalState::Succeeded => "SUCCEEDED",
            TerminalState::Failed => "FAILED",
            TerminalState::Killed => "KILLED",
            TerminalState::Error => "ERROR",
        }
    }

    pub(crate) fn from_record(value: Option<i32>) -> Result<Self, CodecError> {
        let value = crate::codec::required(value, "state")?;
        TerminalState::try_from(value).map_err(|_| CodecError::UnknownEnum {
            kind: "TerminalState",
            value,
        })
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
