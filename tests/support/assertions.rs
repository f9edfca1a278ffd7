//! Test assertion helpers.

use std::process::Output;

use super::Test;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert stderr does NOT contain a string.
pub fn assert_stderr_excludes(output: &Output, excluded: &str) {
    let err = stderr(output);
    assert!(
        !err.contains(excluded),
        "stderr should not contain '{}', got: {}",
        excluded,
        err
    );
}

/// Assert that `rev` carries the note `gp` writes for `change`.
pub fn assert_note(t: &Test, rev: &str, change: &str) {
    let note = t.git(&["notes", "show", rev]);
    assert_eq!(
        note.trim(),
        format!("p4:{}", change),
        "unexpected note on {}",
        rev
    );
}

/// Assert the pending changes ledger holds exactly `changes`, in order.
pub fn assert_ledger(t: &Test, changes: &[&str]) {
    let stored = t.read_ledger();
    let stored: Vec<&str> = stored.lines().collect();
    assert_eq!(stored, changes, "unexpected pending changes");
}
