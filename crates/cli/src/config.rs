// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line and environment inputs.
//!
//! Every input is a flag with an environment fallback following the GitHub
//! Actions `INPUT_<NAME>` convention, so the binary runs unchanged as an
//! action step or from a terminal.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use gms_engine::{RunConfig, RunFlags, DEFAULT_BACKEND, DEFAULT_PROGRAM, DEFAULT_VERBOSITY};

use crate::output::OutputFormat;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Input required and not supplied: {0}")]
    Required(&'static str),

    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {name}\n\
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBoolean { name: &'static str, value: String },

    #[error("failed to read script from {path}: {source}")]
    ReadScript { path: String, source: std::io::Error },
}

#[derive(Parser, Debug)]
#[command(name = "gms", version, about = "Run a git-metrics script one command at a time")]
pub struct Args {
    /// Script to run, one git-metrics command per line (`-` reads stdin)
    #[arg(long, env = "INPUT_SCRIPT", allow_hyphen_values = true)]
    pub script: Option<String>,

    /// Read the script from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "script")]
    pub script_file: Option<PathBuf>,

    /// Value passed to the tool as GIT_BACKEND
    #[arg(long, env = "INPUT_BACKEND", default_value = DEFAULT_BACKEND)]
    pub backend: String,

    /// Run `pull` before and `push` after the script
    #[arg(long, env = "INPUT_SYNC", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub sync: Option<String>,

    /// Run `pull` before the script
    #[arg(long, env = "INPUT_PULL", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub pull: Option<String>,

    /// Run `push` after the script
    #[arg(long, env = "INPUT_PUSH", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub push: Option<String>,

    /// Keep going when a command exits non-zero
    #[arg(
        long,
        env = "INPUT_CONTINUEONERROR",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub continue_on_error: Option<String>,

    /// Tool to invoke for every command
    #[arg(long, env = "GMS_PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub program: String,

    /// Value passed to the tool as VERBOSITY
    #[arg(long, env = "GMS_VERBOSITY", default_value_t = DEFAULT_VERBOSITY)]
    pub verbosity: u8,

    /// Stream tool output to stderr while it runs
    #[arg(long, env = "GMS_ECHO", value_parser = clap::builder::FalseyValueParser::new())]
    pub echo: bool,

    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Validated inputs for one run.
#[derive(Debug)]
pub struct Inputs {
    pub script: String,
    pub flags: RunFlags,
    pub config: RunConfig,
    pub format: OutputFormat,
}

impl Args {
    /// Validate the raw arguments, reading the script from `stdin` when asked.
    pub fn into_inputs(self, stdin: impl Read) -> Result<Inputs, InputError> {
        let script = resolve_script(self.script, self.script_file.as_deref(), stdin)?;
        let flags = RunFlags {
            pull: parse_bool("pull", self.pull.as_deref())?,
            push: parse_bool("push", self.push.as_deref())?,
            sync: parse_bool("sync", self.sync.as_deref())?,
        };
        let config = RunConfig::new()
            .program(self.program)
            .backend(self.backend)
            .verbosity(self.verbosity)
            .continue_on_error(parse_bool("continueOnError", self.continue_on_error.as_deref())?)
            .echo(self.echo);

        Ok(Inputs { script, flags, config, format: self.format })
    }
}

fn resolve_script(
    script: Option<String>,
    script_file: Option<&Path>,
    mut stdin: impl Read,
) -> Result<String, InputError> {
    let script = match (script_file, script.as_deref()) {
        (Some(path), _) => std::fs::read_to_string(path).map_err(|source| {
            InputError::ReadScript { path: path.display().to_string(), source }
        })?,
        (None, Some("-")) => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .map_err(|source| InputError::ReadScript { path: "stdin".to_string(), source })?;
            buf
        }
        (None, _) => script.unwrap_or_default(),
    };

    if script.trim().is_empty() {
        return Err(InputError::Required("script"));
    }
    Ok(script)
}

/// Parse a boolean input using the YAML 1.2 core schema. Absent or empty is false.
pub fn parse_bool(name: &'static str, value: Option<&str>) -> Result<bool, InputError> {
    match value.map(str::trim).unwrap_or("") {
        "" | "false" | "False" | "FALSE" => Ok(false),
        "true" | "True" | "TRUE" => Ok(true),
        other => Err(InputError::InvalidBoolean { name, value: other.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
