// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recovery log entry with checksum verification

use dagh_core::{CodecError, DagHistoryEvent, DagId, EventType, HistoryEvent};

/// A single entry in the recovery log
#[derive(Clone, PartialEq, prost::Message)]
pub struct RecoveryEntry {
    /// Monotonically increasing, starting at 1
    #[prost(uint64, tag = "1")]
    pub sequence: u64,
    #[prost(enumeration = "EventType", tag = "2")]
    pub event_type: i32,
    #[prost(string, optional, tag = "3")]
    pub dag_id: Option<String>,
    /// The event's own length-delimited record
    #[prost(bytes = "vec", tag = "4")]
    pub payload: Vec<u8>,
    /// CRC32 of `payload`
    #[prost(fixed32, tag = "5")]
    pub checksum: u32,
}

impl RecoveryEntry {
    /// Create an entry for `event` with computed checksum
    pub fn from_event(sequence: u64, event: &DagHistoryEvent) -> Result<Self, CodecError> {
        let mut payload = Vec::new();
        event.history_event().encode(&mut payload)?;

        Ok(Self {
            sequence,
            event_type: event.event_type() as i32,
            dag_id: event.dag_id().map(|id| id.to_string()),
            checksum: crc32fast::hash(&payload),
            payload,
        })
    }

    /// Verify the checksum matches the payload
    pub fn verify(&self) -> bool {
        self.checksum == crc32fast::hash(&self.payload)
    }

    /// The tag, rejecting values this build does not know
    pub fn kind(&self) -> Result<EventType, CodecError> {
        EventType::try_from(self.event_type).map_err(|_| CodecError::UnknownEnum {
            kind: "EventType",
            value: self.event_type,
        })
    }

    /// Rebuild the routed event
    pub fn to_event(&self) -> Result<DagHistoryEvent, CodecError> {
        let event = HistoryEvent::decode(self.kind()?, &mut self.payload.as_slice())?;
        Ok(DagHistoryEvent::new(self.dag_id.clone().map(DagId::from), event))
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
