//! Script execution specs
//!
//! Commands run one at a time, bracketed by `pull`/`push` when asked, and
//! the first failure halts the run unless continue-on-error is set.

use crate::prelude::*;

const SCRIPT: &str = "
    add name 12.3
    show
    ";

#[test]
fn sync_brackets_the_script() {
    let temp = Project::empty();
    let run = temp.gms().env("INPUT_SCRIPT", SCRIPT).args(&["--sync"]).passes();

    let commands: Vec<_> = run.result().as_array().unwrap().iter().map(|r| r["command"].clone()).collect();
    assert_eq!(commands, vec!["pull", "add name 12.3", "show", "push"]);
    assert_eq!(temp.calls().len(), 4);
}

#[test]
fn failure_halts_and_skips_push() {
    let temp = Project::empty();
    temp.gms()
        .env("INPUT_SCRIPT", "add a 1\nfail\nshow")
        .env("INPUT_SYNC", "true")
        .fails()
        .code_is(1)
        .stdout_has("::error::command fail failed with exit code 3")
        .stdout_lacks("[{");
    assert_eq!(temp.calls(), vec!["command 5:pull|", "command 5:add|a|1|", "command 5:fail|"]);
}

#[test]
fn continue_on_error_records_failure() {
    let temp = Project::empty();
    let run = temp
        .gms()
        .env("INPUT_SCRIPT", "fail\nshow")
        .env("INPUT_CONTINUEONERROR", "true")
        .passes();

    let result = run.result();
    assert_eq!(result.as_array().unwrap().len(), 2);
    assert_eq!(result[0]["code"], 3);
    assert_eq!(result[0]["stderr"], "bad value");
    assert_eq!(result[1]["code"], 0);
}

#[test]
fn empty_lines_are_skipped() {
    let temp = Project::empty();
    temp.gms().env("INPUT_SCRIPT", "\n\n  show  \n\n").passes();
    assert_eq!(temp.calls(), vec!["command 5:show|"]);
}
