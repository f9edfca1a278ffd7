//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for command in ["login", "logout", "clone", "rebase", "submit", "shelve", "review"] {
        assert!(out.contains(command), "help missing {}: {}", command, out);
    }
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gp "));
}

#[test]
fn test_clone_requires_depot_path() {
    let t = Test::new();

    let output = t.cmd().arg("clone").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "DEPOT_PATH");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "_gp");
    assert_stdout_contains(&output, "--reviewers");
}

#[test]
fn test_reviewer_group_must_be_a_config_name() {
    let t = Test::repo("fix bug");

    let output = t.review(&["-r", "x; touch pwned"], "Alice\n");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid reviewer group");
    assert!(!t.dir.path().join("pwned").exists());
    assert_eq!(t.head_message().trim_end(), "fix bug");
}

#[test]
fn test_completions_zsh_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef gp"))
        .stderr(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_submit_outside_repository_fails() {
    let t = Test::new();
    t.set_global_config("gp.P4PORT", HOST);
    t.set_global_config("gp.P4USER", USER);
    t.set_global_config("gp.key", KEY);

    // password is still missing, so login reads it from stdin first
    let output = t
        .cmd()
        .arg("submit")
        .write_stdin("hunter2\n")
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "✗");
}
