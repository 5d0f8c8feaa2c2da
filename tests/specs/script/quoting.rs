//! Argument quoting specs
//!
//! Script lines reach the tool as literal arguments; nothing in a line is
//! interpreted by a shell.

use crate::prelude::*;

#[test]
fn quoted_argument_stays_whole() {
    let temp = Project::empty();
    temp.gms().env("INPUT_SCRIPT", r#"add name --tag "foo: bar" 12.3"#).passes();
    assert_eq!(temp.calls(), vec!["command 5:add|name|--tag|foo: bar|12.3|"]);
}

#[test]
fn operators_do_not_chain_commands() {
    let temp = Project::empty();
    let run = temp.gms().env("INPUT_SCRIPT", "show && push").passes();
    assert_eq!(temp.calls(), vec!["command 5:show|push|"]);
    assert_eq!(run.result()[0]["command"], "show && push");
}

#[test]
fn substitutions_are_never_executed() {
    let temp = Project::empty();
    let marker = temp.path().join("marker");
    let line = format!("show $(touch {0}) `touch {0}`", marker.display());
    temp.gms().env("INPUT_SCRIPT", &line).passes();

    assert!(!marker.exists());
    assert_eq!(temp.calls(), vec!["command 5:show|"]);
}

#[test]
fn redirections_do_not_create_files() {
    let temp = Project::empty();
    temp.gms().env("INPUT_SCRIPT", "show > out.txt").passes();
    assert!(!temp.path().join("out.txt").exists());
    assert_eq!(temp.calls(), vec!["command 5:show|out.txt|"]);
}

#[test]
fn variables_are_not_expanded() {
    let temp = Project::empty();
    temp.gms()
        .env("INPUT_SCRIPT", "add $HOME 'literal $HOME' 1")
        .passes();
    assert_eq!(temp.calls(), vec!["command 5:add|literal $HOME|1|"]);
}
