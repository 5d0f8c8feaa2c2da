//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("--script");
}

#[test]
fn help_lists_env_fallbacks() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("INPUT_SCRIPT")
        .stdout_has("INPUT_CONTINUEONERROR")
        .stdout_has("GMS_PROGRAM");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
