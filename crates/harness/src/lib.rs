// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! blocc-harness: command execution and failure aggregation for the blocc gate.

pub mod exec;
pub mod result;
pub mod runner;


pub use exec::{run_parallel, run_sequential};
pub use result::{CommandResult, BLOCKING_EXIT_CODE};
pub use runner::run;
