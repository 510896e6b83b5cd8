// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared result record flowing from the runner to the reporting layer.

use serde::{Deserialize, Serialize};

/// Exit status treated as a hard stop.
///
/// A sequential batch aborts after the first command that exits with this
/// code; a parallel batch reports only these failures when any are present.
/// It is also the process exit code that blocks the calling hook.
pub const BLOCKING_EXIT_CODE: i32 = 2;

/// Outcome of running a single command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// The command string exactly as submitted, never trimmed or re-split.
    pub command: String,
    /// Exit status of the process. Commands that are blank after trimming,
    /// fail to launch, or die without a status all record 1.
    #[serde(rename = "exitCode")]
    pub exit_code: i32,
    /// Everything the command wrote to stdout, decoded as UTF-8 (lossy).
    pub stdout: String,
    /// Everything the command wrote to stderr, decoded as UTF-8 (lossy).
    pub stderr: String,
}

impl CommandResult {
    /// A failure produced by the harness itself, before or instead of a
    /// process exit status.
    pub(crate) fn failed(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            exit_code: 1,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}
