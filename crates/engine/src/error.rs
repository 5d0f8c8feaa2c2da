// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that halt a run.

/// Why a run stopped before completing its plan.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A command exited non-zero while `continue_on_error` was off.
    #[error("command {command} failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    /// The program could not be started, or its output could not be read.
    #[error("failed to run `{program}` for command {command}: {source}")]
    LaunchFailed {
        command: String,
        program: String,
        source: std::io::Error,
    },
}

impl RunError {
    /// The script line that halted the run.
    pub fn command(&self) -> &str {
        match self {
            RunError::CommandFailed { command, .. } | RunError::LaunchFailed { command, .. } => {
                command
            }
        }
    }
}
