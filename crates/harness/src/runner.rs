// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-command execution through the shell.

use std::time::Instant;

use crate::result::CommandResult;

/// Run one command line under `sh -c`, capturing stdout and stderr to EOF.
///
/// Never fails: blank input, launch errors, and signal deaths are all folded
/// into the returned [`CommandResult`] with exit code 1. The `command` field
/// always carries the input string untouched.
pub async fn run(command: &str) -> CommandResult {
    let trimmed = command.trim();
    if trimmed.is_empty() {
        return CommandResult::failed(command, "empty command");
    }

    // Historical tokenization: split on whitespace and rejoin before handing
    // the line to the shell. Whitespace runs collapse, even inside quotes.
    let line = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");

    let start = Instant::now();
    let cmd_span = tracing::info_span!(
        "gate.cmd",
        cmd = %line,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut process = tokio::process::Command::new("sh");
    process.arg("-c").arg(&line);
    process.stdin(std::process::Stdio::null());
    process.stdout(std::process::Stdio::piped());
    process.stderr(std::process::Stdio::piped());

    let child = match process.spawn() {
        Ok(child) => child,
        Err(err) => return CommandResult::failed(command, err.to_string()),
    };

    let output = match child.wait_with_output().await {
        Ok(output) => output,
        Err(err) => return CommandResult::failed(command, err.to_string()),
    };

    // A process killed by a signal has no status code; report it as a plain
    // failure.
    let exit_code = output.status.code().unwrap_or(1);

    cmd_span.record("exit_code", exit_code);
    cmd_span.record("duration_ms", start.elapsed().as_millis() as u64);

    CommandResult {
        command: command.to_string(),
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
