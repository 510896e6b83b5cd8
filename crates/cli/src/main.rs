// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! blocc: runs shell commands and blocks Claude Code hooks by exiting 2 when
//! any of them fail.

mod commands;
mod exit_error;
mod report;

use clap::Parser;

use crate::exit_error::ExitError;

/// Block Claude Code hooks by exiting 2 when commands fail.
#[derive(Parser)]
#[command(name = "blocc", version)]
struct Cli {
    /// Commands to execute
    commands: Vec<String>,

    /// Run commands in parallel instead of sequentially
    #[arg(short, long)]
    parallel: bool,

    /// Custom message for the failure report
    #[arg(short, long)]
    message: Option<String>,

    /// Write a starter .claude/settings.local.json and exit
    #[arg(short, long)]
    init: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = dispatch(cli).await {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
    }
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    if cli.init {
        let cwd = std::env::current_dir()?;
        return commands::init::handle(&cwd, &cli.commands, cli.message.as_deref());
    }

    if cli.commands.is_empty() {
        anyhow::bail!("no commands provided");
    }

    commands::gate::handle(&cli.commands, cli.parallel, cli.message).await
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
