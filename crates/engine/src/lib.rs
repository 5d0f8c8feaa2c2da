// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential executor for git-metrics scripts.
//!
//! An [`Executor`] turns a script into an ordered plan (optionally bracketed
//! by `pull` and `push`), runs each command through a [`ProcessRunner`] one
//! at a time, and collects an [`Execution`] record per command.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod error;
mod executor;
mod record;
pub mod runner;

pub use config::{
    RunConfig, RunFlags, BACKEND_ENV, DEFAULT_BACKEND, DEFAULT_PROGRAM, DEFAULT_VERBOSITY,
    PULL_COMMAND, PUSH_COMMAND, VERBOSITY_ENV,
};
pub use error::RunError;
pub use executor::{build_plan, Executor, RunReport, RunState};
pub use record::Execution;
pub use runner::{Invocation, ProcessOutput, ProcessRunner, TokioRunner};

#[cfg(any(test, feature = "test-support"))]
pub use runner::{FakeResponse, FakeRunner};
