//! Tests for `gp review` on a real git repository.

use crate::support::*;

#[test]
fn test_review_adds_trailer_with_reviewers() {
    let t = Test::repo("fix bug");

    let output = t.review(&["-r", "core"], "Alice, Bob\n");
    assert_success(&output);
    assert_stderr_contains(&output, "review trailer added");

    assert_eq!(t.head_message().trim_end(), "fix bug\n\n#review\nAlice, Bob");
    assert_eq!(
        t.global_config("gp.reviewers.core").as_deref(),
        Some("Alice, Bob")
    );
}

#[test]
fn test_review_resolves_tag_from_ledger() {
    let t = Test::repo("fix bug\n\n#review\nAlice, Bob");
    t.write_ledger("1050\n1042\n");

    let output = t.review(&[], "");
    assert_success(&output);
    assert_stderr_contains(&output, "#review-1043");

    assert_eq!(
        t.head_message().trim_end(),
        "fix bug\n\n#review-1043\nAlice, Bob"
    );
    assert_ledger(&t, &["1050"]);
    assert_note(&t, "HEAD", "1042");
}

#[test]
fn test_review_replaces_stale_number() {
    let t = Test::repo("fix bug\n\n#review-900\nAlice");
    t.write_ledger("1042\n");

    assert_success(&t.review(&[], ""));

    assert_eq!(t.head_message().trim_end(), "fix bug\n\n#review-1043\nAlice");
    assert_eq!(t.read_ledger(), "");
}

#[test]
fn test_review_without_pending_changes_is_noop() {
    let t = Test::repo("fix bug\n\n#review-1043\nAlice");
    let before = t.git(&["rev-parse", "HEAD"]);

    let output = t.review(&[], "");
    assert_success(&output);
    assert_stderr_contains(&output, "no pending changes");

    assert_eq!(t.git(&["rev-parse", "HEAD"]), before);
}

#[test]
fn test_review_rejects_malformed_entry() {
    let t = Test::repo("fix bug\n\n#review");
    t.write_ledger("not-a-number\n");

    let output = t.review(&[], "");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid change list id");

    assert_eq!(t.head_message().trim_end(), "fix bug\n\n#review");
    assert_eq!(t.read_ledger(), "not-a-number\n");
}

#[test]
fn test_review_keeps_tree_of_content_commit() {
    let t = Test::repo_with_file("fix bug\n\n#review\nAlice, Bob", "main.c", "int main;\n");
    let tree = t.git(&["rev-parse", "HEAD^{tree}"]);
    t.write_ledger("1042\n");

    assert_success(&t.review(&[], ""));

    assert_eq!(
        t.head_message().trim_end(),
        "fix bug\n\n#review-1043\nAlice, Bob"
    );
    assert_eq!(t.git(&["rev-parse", "HEAD^{tree}"]), tree);
    assert_eq!(t.git(&["show", "HEAD:main.c"]), "int main;\n");
}
