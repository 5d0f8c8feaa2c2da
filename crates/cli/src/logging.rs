// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter directives, e.g. `gms_engine=debug`.
pub const LOG_ENV: &str = "GMS_LOG";

/// Set to `1` by GitHub Actions when debug logging is enabled for a run.
pub const RUNNER_DEBUG_ENV: &str = "RUNNER_DEBUG";

/// Pick the filter directives from `GMS_LOG`, then `RUNNER_DEBUG`, then `info`.
pub fn directives(log: Option<&str>, runner_debug: Option<&str>) -> String {
    match log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(log) => log.to_string(),
        None if runner_debug == Some("1") => "debug".to_string(),
        None => "info".to_string(),
    }
}

/// Install the global subscriber. Stdout is left for the result.
pub fn init() {
    let log = std::env::var(LOG_ENV).ok();
    let runner_debug = std::env::var(RUNNER_DEBUG_ENV).ok();
    let directives = directives(log.as_deref(), runner_debug.as_deref());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
