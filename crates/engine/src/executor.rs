// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential command executor.
//!
//! A run walks its plan as a small state machine:
//! `Idle → Running(0) → … → Running(n) → Completed`, or `Halted` as soon as
//! a command fails with `continue_on_error` off or cannot be launched.
//! Commands never overlap: each one's process has exited and both of its
//! streams are drained before the next is started. No timeout is applied,
//! so a tool that never exits stalls the run.

use std::time::Instant;

use tracing::Instrument;

use crate::config::{RunConfig, RunFlags, PULL_COMMAND, PUSH_COMMAND};
use crate::error::RunError;
use crate::record::Execution;
use crate::runner::ProcessRunner;

/// Position of a run in its plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    /// Executing the command at this index.
    Running(usize),
    /// Stopped early; no further commands run.
    Halted,
    /// Every planned command ran.
    Completed,
}

/// Everything a run produced, including records collected before a halt.
#[derive(Debug)]
pub struct RunReport {
    pub records: Vec<Execution>,
    /// Final state: `Completed` or `Halted`.
    pub state: RunState,
    pub outcome: Result<(), RunError>,
}

impl RunReport {
    /// Publish the records only if the run completed.
    pub fn into_result(self) -> Result<Vec<Execution>, RunError> {
        self.outcome.map(|()| self.records)
    }
}

/// Build the ordered command list for a script.
///
/// `pull` comes first when pulling, the script's non-blank lines follow in
/// order, and `push` comes last when pushing.
pub fn build_plan(script: &str, flags: RunFlags) -> Vec<String> {
    let mut plan = Vec::new();
    if flags.wants_pull() {
        plan.push(PULL_COMMAND.to_string());
    }
    plan.extend(gms_shell::split_script(script));
    if flags.wants_push() {
        plan.push(PUSH_COMMAND.to_string());
    }
    plan
}

/// Runs scripts one command at a time through a [`ProcessRunner`].
pub struct Executor<R> {
    config: RunConfig,
    runner: R,
}

impl<R: ProcessRunner> Executor<R> {
    pub fn new(config: RunConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Run a script and return its records, or the error that halted it.
    ///
    /// Records gathered before a halt are not returned; use
    /// [`run_report`](Self::run_report) to inspect them.
    pub async fn run(&self, script: &str, flags: RunFlags) -> Result<Vec<Execution>, RunError> {
        self.run_report(script, flags).await.into_result()
    }

    /// Run a script and report every record regardless of outcome.
    pub async fn run_report(&self, script: &str, flags: RunFlags) -> RunReport {
        let plan = build_plan(script, flags);
        tracing::info!(
            commands = plan.len(),
            backend = %self.config.backend,
            continue_on_error = self.config.continue_on_error,
            "starting run"
        );

        let mut records = Vec::with_capacity(plan.len());
        let mut outcome = Ok(());
        let mut state = RunState::Idle;

        loop {
            state = match state {
                RunState::Idle => RunState::Running(0),
                RunState::Running(index) => match plan.get(index) {
                    None => RunState::Completed,
                    Some(command) => match self.execute_command(command).await {
                        Ok(record) => {
                            let code = record.code;
                            records.push(record);
                            if code == 0 {
                                RunState::Running(index + 1)
                            } else if self.config.continue_on_error {
                                tracing::warn!(%command, code, "command failed, continuing");
                                RunState::Running(index + 1)
                            } else {
                                tracing::error!(%command, code, "command failed, halting run");
                                outcome =
                                    Err(RunError::CommandFailed { command: command.clone(), code });
                                RunState::Halted
                            }
                        }
                        Err(source) => {
                            tracing::error!(%command, error = %source, "failed to launch command");
                            outcome = Err(RunError::LaunchFailed {
                                command: command.clone(),
                                program: self.config.program.clone(),
                                source,
                            });
                            RunState::Halted
                        }
                    },
                },
                RunState::Halted | RunState::Completed => break,
            };
        }

        if state == RunState::Completed {
            tracing::info!(records = records.len(), "run completed");
        }

        RunReport { records, state, outcome }
    }

    /// Tokenize and run one command, producing its record.
    async fn execute_command(&self, command: &str) -> std::io::Result<Execution> {
        let args = gms_shell::tokenize(command);
        let dropped = gms_shell::dropped(command);
        if !dropped.is_empty() {
            tracing::debug!(%command, ?dropped, "ignoring non-literal tokens");
        }

        let span = tracing::info_span!(
            "gms.cmd",
            %command,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        async {
            tracing::debug!(?args, "executing command");
            let start = Instant::now();
            let output = self.runner.run(&self.config.invocation(args)).await?;

            let current = tracing::Span::current();
            current.record("exit_code", output.code);
            current.record("duration_ms", start.elapsed().as_millis() as u64);
            tracing::debug!(code = output.code, "exit code");

            Ok(Execution {
                command: command.to_string(),
                code: output.code,
                stdout: output.stdout,
                stderr: output.stderr,
            })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
