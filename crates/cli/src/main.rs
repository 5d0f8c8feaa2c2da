// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gms: run a git-metrics script and publish its execution records.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod exit_error;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use gms_engine::{Executor, TokioRunner};

use crate::config::Args;
use crate::exit_error::ExitError;

/// Environment variable naming the step's output file.
const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();

    if let Err(err) = run(args).await {
        let exit = ExitError::from_run(err);
        tracing::error!(code = exit.code, error = %exit.message, "run failed");
        println!("{}", output::error_annotation(&exit.message));
        std::process::exit(exit.code);
    }
}

async fn run(args: Args) -> Result<()> {
    let inputs = args.into_inputs(std::io::stdin())?;
    tracing::debug!(script = %inputs.script, flags = ?inputs.flags, "inputs");

    let executor = Executor::new(inputs.config, TokioRunner);
    let records = executor.run(&inputs.script, inputs.flags).await?;

    let json = output::result_json(&records)?;
    output::print_result(&records, &json, inputs.format);
    if let Some(path) = std::env::var_os(GITHUB_OUTPUT_ENV).filter(|p| !p.is_empty()) {
        output::write_github_output(std::path::Path::new(&path), output::RESULT_OUTPUT, &json)?;
    }
    Ok(())
}
