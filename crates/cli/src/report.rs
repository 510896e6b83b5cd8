// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure report serialization for the hook host.

use blocc_harness::CommandResult;
use serde::{Deserialize, Serialize};

/// Report written to stderr when the batch fails.
#[derive(Debug, Serialize, Deserialize)]
pub struct FailureReport {
    pub message: String,
    pub results: Vec<CommandResult>,
}

impl FailureReport {
    /// Build a report over the failure list. An absent or empty message
    /// falls back to `"<N> command(s) failed"`.
    pub fn new(results: Vec<CommandResult>, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("{} command(s) failed", results.len()));
        Self { message, results }
    }

    /// Pretty JSON with 2-space indentation.
    pub fn render(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
