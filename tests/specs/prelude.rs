//! Shared helpers for black-box specs.
//!
//! Every spec runs the real `gms` binary against a fake `git-metrics` shell
//! script in a temp directory. The fake appends one line per call to
//! `calls.log` (`<GIT_BACKEND> <VERBOSITY>:<arg>|<arg>|…`) and answers a few
//! subcommands:
//!
//! - `show` prints `some output` / `some error`
//! - `fail` prints `bad value` to stderr and exits 3
//! - anything else exits 0 silently

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const FAKE_TOOL: &str = r#"#!/bin/sh
dir=$(dirname "$0")
{
  printf '%s %s:' "$GIT_BACKEND" "$VERBOSITY"
  for arg in "$@"; do printf '%s|' "$arg"; done
  printf '\n'
} >> "$dir/calls.log"
case "$1" in
  show) printf 'some output'; printf 'some error' >&2 ;;
  fail) printf 'bad value' >&2; exit 3 ;;
esac
exit 0
"#;

/// Inputs that would leak in from a CI environment.
const AMBIENT_ENV: &[&str] = &[
    "INPUT_SCRIPT",
    "INPUT_BACKEND",
    "INPUT_SYNC",
    "INPUT_PULL",
    "INPUT_PUSH",
    "INPUT_CONTINUEONERROR",
    "GMS_PROGRAM",
    "GMS_VERBOSITY",
    "GMS_ECHO",
    "GMS_LOG",
    "RUNNER_DEBUG",
    "GITHUB_OUTPUT",
];

/// A `gms` invocation with no project.
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// Temp directory holding a fake `git-metrics`.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("git-metrics");
        std::fs::write(&tool, FAKE_TOOL).unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tool(&self) -> PathBuf {
        self.path().join("git-metrics")
    }

    /// Write a file relative to the project root.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).unwrap_or_default()
    }

    /// Lines of `calls.log`, one per tool invocation.
    pub fn calls(&self) -> Vec<String> {
        self.read("calls.log").lines().map(str::to_string).collect()
    }

    /// `gms` wired to this project's fake tool.
    pub fn gms(&self) -> CliBuilder {
        cli().env("GMS_PROGRAM", self.tool().to_str().unwrap())
    }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    fn new() -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("gms").unwrap();
        for key in AMBIENT_ENV {
            cmd.env_remove(key);
        }
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and require exit code 0.
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert_eq!(run.code, 0, "expected success\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }

    /// Run and require a non-zero exit code.
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert_ne!(run.code, 0, "expected failure\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }
}

pub struct RunAssert {
    pub code: i32,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        self.stdout.clone()
    }

    pub fn stderr(&self) -> String {
        self.stderr.clone()
    }

    /// Parse stdout as the JSON result array.
    pub fn result(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }

    pub fn code_is(self, code: i32) -> Self {
        assert_eq!(self.code, code, "stdout:\n{}\nstderr:\n{}", self.stdout, self.stderr);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }
}
