// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

/// Result of one attempted command.
///
/// `command` is the original script line, not the tokenized arguments.
/// Serializes as `{"command":…,"code":…,"stdout":…,"stderr":…}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Execution {
    pub command: String,
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}
