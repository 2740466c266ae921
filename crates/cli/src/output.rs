// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands
//!
//! Text mode uses each value's `Display`. JSON mode writes a pretty document
//! for a single value and one compact document per line for a sequence, so
//! dumps can be piped into line-oriented tools.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write one value
pub fn write_value<W, T>(out: &mut W, value: &T, format: OutputFormat) -> Result<()>
where
    W: Write,
    T: Serialize + Display,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", value)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write one item of a streamed sequence as a single line
pub fn write_value_line<W, T>(out: &mut W, item: &T, format: OutputFormat) -> Result<()>
where
    W: Write,
    T: Serialize + Display,
{
    match format {
        OutputFormat::Text => writeln!(out, "{}", item)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, item)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
