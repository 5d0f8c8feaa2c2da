// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result publishing: stdout, the `GITHUB_OUTPUT` file and workflow commands.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use clap::ValueEnum;
use gms_engine::Execution;

/// Name of the published output.
pub const RESULT_OUTPUT: &str = "result";

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    #[default]
    Json,
}

/// Serialize records as the compact JSON array published as `result`.
pub fn result_json(records: &[Execution]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// Human-readable summary, one block per record.
pub fn render_text(records: &[Execution]) -> String {
    let mut out = String::new();
    for record in records {
        let mark = if record.code == 0 { "ok" } else { "FAILED" };
        let _ = writeln!(out, "{} [{}] {}", mark, record.code, record.command);
        for (label, text) in [("stdout", &record.stdout), ("stderr", &record.stderr)] {
            for line in text.lines() {
                let _ = writeln!(out, "  {label}: {line}");
            }
        }
    }
    out
}

/// Print the result to stdout in the requested format.
pub fn print_result(records: &[Execution], json: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{json}"),
        OutputFormat::Text => print!("{}", render_text(records)),
    }
}

/// Append a `name` output to a `GITHUB_OUTPUT` file using the delimiter form.
pub fn write_github_output(path: &Path, name: &str, value: &str) -> anyhow::Result<()> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    let entry = format_output_entry(name, value, &delimiter)?;
    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(entry.as_bytes())?;
    Ok(())
}

fn format_output_entry(name: &str, value: &str, delimiter: &str) -> anyhow::Result<String> {
    if name.contains(delimiter) || value.contains(delimiter) {
        anyhow::bail!("unexpected input: output value contains the delimiter {delimiter}");
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// Escape a message for a workflow command such as `::error::`.
pub fn escape_data(message: &str) -> String {
    message.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Render the `::error::` workflow command that marks the step failed.
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
