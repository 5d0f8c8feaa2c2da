// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process invocation seam.
//!
//! The executor never spawns processes itself; it hands an [`Invocation`] to
//! a [`ProcessRunner`]. [`TokioRunner`] is the real implementation and
//! `FakeRunner` (behind `test-support`) scripts responses for tests.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// One process launch: program, arguments and extra environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Added to the inherited environment.
    pub env: Vec<(String, String)>,
    /// Forward output to our stderr while it is captured.
    pub echo: bool,
}

/// Exit code and captured output of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs a process to completion.
///
/// A non-zero exit is a normal [`ProcessOutput`], not an error; `Err` is
/// reserved for failing to launch the program or read its output.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput>;
}

/// Spawns real processes with `tokio::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioRunner;

#[async_trait]
impl ProcessRunner for TokioRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
        let mut process = tokio::process::Command::new(&invocation.program);
        process.args(&invocation.args);
        process.envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        process.stdin(Stdio::null());
        process.stdout(Stdio::piped());
        process.stderr(Stdio::piped());

        // A read error abandons the child; it must not outlive the run.
        process.kill_on_drop(true);

        let mut child = process.spawn()?;
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let echo = || invocation.echo.then(tokio::io::stderr);

        // Both streams are drained while waiting so a chatty child never
        // blocks on a full pipe.
        let (stdout, stderr, status) = tokio::try_join!(
            drain(stdout, echo()),
            drain(stderr, echo()),
            child.wait(),
        )?;

        Ok(ProcessOutput { code: status.code().unwrap_or(-1), stdout, stderr })
    }
}

/// Read a stream to EOF chunk by chunk, copying each chunk to `echo`.
///
/// Only read errors are returned. A failed echo write stops echoing for the
/// rest of the stream; capture continues.
async fn drain<R, W>(reader: Option<R>, mut echo: Option<W>) -> io::Result<String>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(mut reader) = reader else {
        return Ok(String::new());
    };
    let mut captured = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        captured.extend_from_slice(&chunk[..n]);
        if let Some(out) = echo.as_mut() {
            if let Err(error) = out.write_all(&chunk[..n]).await {
                tracing::debug!(%error, "echo failed, capturing only");
                echo = None;
            }
        }
    }
    if let Some(mut out) = echo {
        if let Err(error) = out.flush().await {
            tracing::debug!(%error, "echo flush failed");
        }
    }
    // Decode once at the end so multi-byte characters split across chunks survive.
    Ok(String::from_utf8_lossy(&captured).into_owned())
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Invocation, ProcessOutput, ProcessRunner};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Arc;

    /// Scripted behaviour for one subcommand.
    #[derive(Debug, Clone)]
    pub enum FakeResponse {
        Exit(ProcessOutput),
        LaunchError(io::ErrorKind),
        /// Never finishes.
        Hang,
    }

    struct FakeRunnerState {
        responses: HashMap<String, FakeResponse>,
        calls: Vec<Invocation>,
    }

    /// Fake runner keyed on the first argument (the tool's subcommand).
    ///
    /// Unscripted subcommands exit 0 with no output. An empty argument
    /// vector is keyed as `""`.
    #[derive(Clone)]
    pub struct FakeRunner {
        inner: Arc<Mutex<FakeRunnerState>>,
    }

    impl Default for FakeRunner {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakeRunnerState {
                    responses: HashMap::new(),
                    calls: Vec::new(),
                })),
            }
        }
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script a response for a subcommand.
        pub fn respond(self, subcommand: &str, response: FakeResponse) -> Self {
            self.inner.lock().responses.insert(subcommand.to_string(), response);
            self
        }

        /// Script an exit code with captured output.
        pub fn exit(self, subcommand: &str, code: i32, stdout: &str, stderr: &str) -> Self {
            self.respond(
                subcommand,
                FakeResponse::Exit(ProcessOutput {
                    code,
                    stdout: stdout.to_string(),
                    stderr: stderr.to_string(),
                }),
            )
        }

        /// Get all recorded invocations, in call order
        pub fn calls(&self) -> Vec<Invocation> {
            self.inner.lock().calls.clone()
        }

        /// First argument of each recorded invocation
        pub fn subcommands(&self) -> Vec<String> {
            self.inner
                .lock()
                .calls
                .iter()
                .map(|call| call.args.first().cloned().unwrap_or_default())
                .collect()
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeRunner {
        async fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput> {
            let response = {
                let mut state = self.inner.lock();
                state.calls.push(invocation.clone());
                let key = invocation.args.first().map(String::as_str).unwrap_or("");
                state.responses.get(key).cloned()
            };
            match response {
                None => Ok(ProcessOutput::default()),
                Some(FakeResponse::Exit(output)) => Ok(output),
                Some(FakeResponse::LaunchError(kind)) => {
                    Err(io::Error::new(kind, format!("cannot launch {}", invocation.program)))
                }
                Some(FakeResponse::Hang) => std::future::pending().await,
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeResponse, FakeRunner};

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
