//! Input validation specs
//!
//! Inputs come from flags or `INPUT_*` variables; bad inputs fail the step
//! before any command runs.

use crate::prelude::*;

#[test]
fn missing_script_fails_without_running_anything() {
    let temp = Project::empty();
    temp.gms()
        .fails()
        .code_is(1)
        .stdout_has("::error::Input required and not supplied: script");
    assert!(temp.calls().is_empty());
}

#[test]
fn blank_script_counts_as_missing() {
    let temp = Project::empty();
    temp.gms()
        .env("INPUT_SCRIPT", "\n   \n")
        .fails()
        .stdout_has("::error::Input required and not supplied: script");
}

#[test]
fn invalid_boolean_names_the_input() {
    let temp = Project::empty();
    let run = temp
        .gms()
        .env("INPUT_SCRIPT", "show")
        .env("INPUT_CONTINUEONERROR", "yes")
        .fails()
        .code_is(1);
    // Multi-line messages are folded into one workflow command
    assert_eq!(run.stdout().lines().count(), 1);
    assert!(run.stdout().contains("continueOnError%0A"));
    assert!(temp.calls().is_empty());
}

#[test]
fn env_inputs_drive_the_run() {
    let temp = Project::empty();
    temp.gms()
        .env("INPUT_SCRIPT", "add name 12.3")
        .env("INPUT_BACKEND", "go-git")
        .env("INPUT_SYNC", "true")
        .env("GMS_VERBOSITY", "2")
        .passes();
    assert_eq!(
        temp.calls(),
        vec!["go-git 2:pull|", "go-git 2:add|name|12.3|", "go-git 2:push|"]
    );
}

#[test]
fn flags_override_env() {
    let temp = Project::empty();
    temp.gms()
        .env("INPUT_SCRIPT", "ignored")
        .env("INPUT_PULL", "TRUE")
        .args(&["--script", "show", "--pull", "false"])
        .passes();
    assert_eq!(temp.calls(), vec!["command 5:show|"]);
}

#[test]
fn script_from_stdin() {
    let temp = Project::empty();
    temp.gms().args(&["--script", "-"]).stdin("add a 1\nshow\n").passes();
    assert_eq!(temp.calls(), vec!["command 5:add|a|1|", "command 5:show|"]);
}

#[test]
fn script_from_file() {
    let temp = Project::empty();
    let path = temp.file("metrics.gms", "\n  add a 1\n\n  show\n");
    temp.gms().args(&["--script-file", path.to_str().unwrap()]).passes();
    assert_eq!(temp.calls().len(), 2);
}

#[test]
fn missing_program_fails_the_run() {
    let temp = Project::empty();
    let missing = temp.path().join("no-such-tool");
    cli()
        .env("GMS_PROGRAM", missing.to_str().unwrap())
        .env("INPUT_SCRIPT", "show")
        .fails()
        .code_is(1)
        .stdout_has("::error::failed to run")
        .stdout_has("for command show");
}
