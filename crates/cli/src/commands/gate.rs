// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Gate command: run the batch and block on failure.

use anyhow::Result;

use blocc_harness::{run_parallel, run_sequential, BLOCKING_EXIT_CODE};

use crate::exit_error::ExitError;
use crate::report::FailureReport;

/// Run `commands` in the selected mode. When any of them fail, returns an
/// [`ExitError`] with the blocking code, carrying the rendered failure
/// report as its message.
pub async fn handle(commands: &[String], parallel: bool, message: Option<String>) -> Result<()> {
    let failures = if parallel {
        run_parallel(commands).await
    } else {
        run_sequential(commands).await
    };

    if failures.is_empty() {
        return Ok(());
    }

    tracing::debug!(failed = failures.len(), "batch failed, blocking");
    let report = FailureReport::new(failures, message);
    Err(ExitError::new(BLOCKING_EXIT_CODE, report.render()?).into())
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
