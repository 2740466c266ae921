// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::recovery::RecoveryReadError;
use dagh_adapters::SinkError;
use dagh_core::CodecError;
use std::io;
use thiserror::Error;

/// Errors from the file-backed sinks
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("read error: {0}")]
    Read(#[from] RecoveryReadError),
}

impl From<StorageError> for SinkError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Io(e) => SinkError::Io(e),
            StorageError::Codec(e) => SinkError::Codec(e),
            StorageError::Json(e) => SinkError::Delivery(e.to_string()),
            StorageError::Read(e) => SinkError::Delivery(e.to_string()),
        }
    }
}
