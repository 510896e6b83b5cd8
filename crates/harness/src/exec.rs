// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential and parallel batch orchestration.

use crate::result::{CommandResult, BLOCKING_EXIT_CODE};
use crate::runner;

/// Run commands one at a time, in list order, returning only the failures.
///
/// Each command finishes before the next starts, so later commands may rely
/// on side effects of earlier ones. A command that exits with
/// [`BLOCKING_EXIT_CODE`] ends the batch: its result is recorded and nothing
/// after it is started.
pub async fn run_sequential(commands: &[String]) -> Vec<CommandResult> {
    let mut failures = Vec::new();

    for command in commands {
        let result = runner::run(command).await;
        if result.exit_code == 0 {
            continue;
        }
        let blocking = result.exit_code == BLOCKING_EXIT_CODE;
        failures.push(result);
        if blocking {
            tracing::debug!(command = %command, "blocking exit, batch aborted");
            break;
        }
    }

    failures
}

/// Run all commands concurrently, returning only the failures.
///
/// Every command is launched before any is awaited, and all of them run to
/// completion regardless of individual outcomes. When any failure carries
/// [`BLOCKING_EXIT_CODE`], the returned list holds exactly those entries.
pub async fn run_parallel(commands: &[String]) -> Vec<CommandResult> {
    // Launch everything up front.
    let mut handles = Vec::with_capacity(commands.len());
    for command in commands {
        let owned = command.clone();
        handles.push((command, tokio::spawn(async move { runner::run(&owned).await })));
    }

    // Join in launch order. A panicked task cannot surface as an error here;
    // it becomes a failure entry like any other.
    let mut results = Vec::with_capacity(handles.len());
    for (command, handle) in handles {
        match handle.await {
            Ok(result) => results.push(result),
            Err(err) => results.push(CommandResult::failed(command.as_str(), err.to_string())),
        }
    }

    filter_failures(results)
}

/// Reduce raw results to the reportable failure list.
///
/// Keeps non-zero exits; when any of them is [`BLOCKING_EXIT_CODE`], only
/// those entries survive.
pub(crate) fn filter_failures(results: Vec<CommandResult>) -> Vec<CommandResult> {
    let mut failures: Vec<CommandResult> =
        results.into_iter().filter(|r| r.exit_code != 0).collect();

    if failures.iter().any(|r| r.exit_code == BLOCKING_EXIT_CODE) {
        failures.retain(|r| r.exit_code == BLOCKING_EXIT_CODE);
    }

    failures
}
