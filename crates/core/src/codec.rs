// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Length-delimited binary records
//!
//! Every record is a protobuf message preceded by its encoded length as a
//! base-128 varint. A reader consumes exactly one record per call, so
//! records can be concatenated on a stream without any other framing.
//!
//! Decoding skips fields it does not know about, which keeps older readers
//! working against records written by newer producers.

use prost::Message;
use std::io::{self, Read, Write};
use thiserror::Error;

/// Upper bound on a single record's payload
pub const MAX_RECORD_LEN: u64 = 64 * 1024 * 1024;

const MAX_VARINT_BYTES: usize = 10;

/// Errors raised while encoding or decoding records
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed record: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("malformed length prefix")]
    MalformedLength,
    #[error("record of {0} bytes exceeds limit")]
    TooLarge(u64),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("unknown {kind} value: {value}")]
    UnknownEnum { kind: &'static str, value: i32 },
}

impl CodecError {
    /// True when the source ended before a complete record was read
    pub fn is_eof(&self) -> bool {
        matches!(self, CodecError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// Write one length-delimited record
pub fn write_delimited<W, M>(sink: &mut W, message: &M) -> Result<(), CodecError>
where
    W: Write + ?Sized,
    M: Message,
{
    sink.write_all(&message.encode_length_delimited_to_vec())?;
    Ok(())
}

/// Read exactly one length-delimited record
pub fn read_delimited<R, M>(source: &mut R) -> Result<M, CodecError>
where
    R: Read + ?Sized,
    M: Message + Default,
{
    let len = read_length(source)?;
    if len > MAX_RECORD_LEN {
        return Err(CodecError::TooLarge(len));
    }

    let mut buf = vec![0u8; len as usize];
    source.read_exact(&mut buf)?;
    Ok(M::decode(buf.as_slice())?)
}

fn read_length<R: Read + ?Sized>(source: &mut R) -> Result<u64, CodecError> {
    let mut value = 0u64;
    for i in 0..MAX_VARINT_BYTES {
        let mut byte = [0u8; 1];
        source.read_exact(&mut byte)?;
        value |= u64::from(byte[0] & 0x7f) << (7 * i);
        if byte[0] & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(CodecError::MalformedLength)
}

/// Unwrap a presence-tracked record field
pub fn required<T>(field: Option<T>, name: &'static str) -> Result<T, CodecError> {
    field.ok_or(CodecError::MissingField(name))
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
