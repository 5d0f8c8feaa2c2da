//! Result publishing specs

use crate::prelude::*;

#[test]
fn json_result_on_stdout() {
    let temp = Project::empty();
    let run = temp.gms().env("INPUT_SCRIPT", "add name 12.3\nshow").passes();
    assert_eq!(
        run.stdout().trim(),
        r#"[{"command":"add name 12.3","code":0,"stdout":"","stderr":""},{"command":"show","code":0,"stdout":"some output","stderr":"some error"}]"#
    );
}

#[test]
fn result_is_written_to_github_output() {
    let temp = Project::empty();
    let out = temp.file("github_output", "");
    temp.gms()
        .env("INPUT_SCRIPT", "show")
        .env("GITHUB_OUTPUT", out.to_str().unwrap())
        .passes();

    let contents = temp.read("github_output");
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "{contents}");
    let delimiter = lines[0].strip_prefix("result<<").unwrap();
    assert!(delimiter.starts_with("ghadelimiter_"));
    let value: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(value[0]["stdout"], "some output");
    assert_eq!(lines[2], delimiter);
}

#[test]
fn failed_run_writes_no_result() {
    let temp = Project::empty();
    let out = temp.file("github_output", "");
    temp.gms()
        .env("INPUT_SCRIPT", "fail")
        .env("GITHUB_OUTPUT", out.to_str().unwrap())
        .fails();
    assert_eq!(temp.read("github_output"), "");
}

#[test]
fn text_format_prints_summary() {
    let temp = Project::empty();
    temp.gms()
        .env("INPUT_SCRIPT", "add a 1\nshow")
        .args(&["--output-format", "text"])
        .passes()
        .stdout_has("ok [0] add a 1")
        .stdout_has("  stdout: some output")
        .stdout_lacks("[{");
}

#[test]
fn echo_streams_tool_output_to_stderr() {
    let temp = Project::empty();
    temp.gms()
        .env("INPUT_SCRIPT", "show")
        .env("GMS_ECHO", "1")
        .passes()
        .stderr_has("some output")
        .stdout_has(r#""stdout":"some output""#);
}

#[test]
fn logs_go_to_stderr() {
    let temp = Project::empty();
    let run = temp.gms().env("INPUT_SCRIPT", "show").env("RUNNER_DEBUG", "1").passes();
    assert!(run.stderr().contains("starting run"));
    assert!(run.result().is_array());
}
