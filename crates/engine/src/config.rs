// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration and bracketing flags.

use crate::runner::Invocation;

/// Executable invoked for every command.
pub const DEFAULT_PROGRAM: &str = "git-metrics";

/// Backend used when none is configured.
pub const DEFAULT_BACKEND: &str = "command";

/// Verbosity level passed to the tool.
pub const DEFAULT_VERBOSITY: u8 = 5;

/// Environment variable selecting the tool's backend.
pub const BACKEND_ENV: &str = "GIT_BACKEND";

/// Environment variable carrying the tool's verbosity level.
pub const VERBOSITY_ENV: &str = "VERBOSITY";

/// Synthetic command prepended when pulling.
pub const PULL_COMMAND: &str = "pull";

/// Synthetic command appended when pushing.
pub const PUSH_COMMAND: &str = "push";

/// Settings that stay fixed for the lifetime of an [`Executor`](crate::Executor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub(crate) program: String,
    pub(crate) backend: String,
    pub(crate) verbosity: u8,
    pub(crate) continue_on_error: bool,
    pub(crate) echo: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            backend: DEFAULT_BACKEND.to_string(),
            verbosity: DEFAULT_VERBOSITY,
            continue_on_error: false,
            echo: false,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the executable to invoke.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the backend selector passed as `GIT_BACKEND`.
    pub fn backend(mut self, backend: impl Into<String>) -> Self {
        self.backend = backend.into();
        self
    }

    /// Set the verbosity passed as `VERBOSITY`.
    pub fn verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Keep going after a command exits non-zero.
    pub fn continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Forward the tool's output to our stderr while capturing it.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn program_name(&self) -> &str {
        &self.program
    }

    pub fn backend_name(&self) -> &str {
        &self.backend
    }

    pub fn continues_on_error(&self) -> bool {
        self.continue_on_error
    }

    /// Build the process invocation for one tokenized command.
    pub fn invocation(&self, args: Vec<String>) -> Invocation {
        Invocation {
            program: self.program.clone(),
            args,
            env: vec![
                (BACKEND_ENV.to_string(), self.backend.clone()),
                (VERBOSITY_ENV.to_string(), self.verbosity.to_string()),
            ],
            echo: self.echo,
        }
    }
}

/// Per-run bracketing flags.
///
/// `sync` is shorthand for both `pull` and `push`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    pub pull: bool,
    pub push: bool,
    pub sync: bool,
}

impl RunFlags {
    pub fn wants_pull(&self) -> bool {
        self.sync || self.pull
    }

    pub fn wants_push(&self) -> bool {
        self.sync || self.push
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
