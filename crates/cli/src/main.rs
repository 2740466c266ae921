// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow unwrap in test code
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! dagh - DAG history log tool

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{dump, replay, verify};

#[derive(Parser)]
#[command(
    name = "dagh",
    version,
    about = "dagh - inspect, verify and replay DAG recovery logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every valid entry of a recovery log
    Dump(dump::DumpArgs),
    /// Check a recovery log for corruption
    Verify(verify::VerifyArgs),
    /// Route recovered events through a history router
    Replay(replay::ReplayArgs),
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump(args) => dump::dump(args),
        Commands::Verify(args) => verify::verify(args),
        Commands::Replay(args) => replay::replay(args),
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("DAGH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
