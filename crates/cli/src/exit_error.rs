// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure report that carries a process exit code.
//!
//! `run()` returns errors instead of calling `std::process::exit()` so that
//! `main()` alone reports the failure and terminates the process.

/// Exit code for any failed run; the step is marked failed either way.
pub const FAILURE_CODE: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Convert any error from a run into a failed exit.
    ///
    /// Only the outermost message is kept so a failed command reads exactly
    /// `command <line> failed with exit code <n>`.
    pub fn from_run(err: anyhow::Error) -> Self {
        Self::new(FAILURE_CODE, err.to_string())
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
