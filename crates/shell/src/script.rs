// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Split a script into its command lines.
///
/// Lines are trimmed and blank lines dropped; the remaining lines keep their
/// script order. CRLF line endings are handled by the trim.
pub fn split_script(script: &str) -> Vec<String> {
    script.split('\n').map(str::trim).filter(|line| !line.is_empty()).map(String::from).collect()
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
