use crate::cli::support::{create_note, init_store, scribe, stdout_json, RUST_SUMMARY, RUST_TEXT};
use predicates::prelude::*;

#[test]
fn test_note_summary_uses_plain_text() {
    let dir = init_store();
    let body = format!("<p>{}</p>", RUST_TEXT.replace("borrow checker", "<em>borrow checker</em>"));
    let id = create_note(dir.path(), "Rust notes", &body);

    scribe()
        .current_dir(dir.path())
        .args(["note-summary", &id, "--local"])
        .assert()
        .success()
        .stdout(format!("{}\n", RUST_SUMMARY));
}

#[test]
fn test_note_summary_insert_appends_block() {
    let dir = init_store();
    let id = create_note(dir.path(), "Rust notes", &format!("<p>{}</p>", RUST_TEXT));

    let output = scribe()
        .current_dir(dir.path())
        .args(["--format", "json", "note-summary", &id, "--insert"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["summary"], RUST_SUMMARY);
    assert_eq!(json["source"], "extractive");
    assert_eq!(json["inserted"], true);

    scribe()
        .current_dir(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "<div class=\"ai-summary\"><h3>📝 AI Summary</h3><p>{}</p></div>",
            RUST_SUMMARY
        )));
}

#[test]
fn test_note_summary_without_insert_leaves_note() {
    let dir = init_store();
    let id = create_note(dir.path(), "Rust notes", RUST_TEXT);

    scribe()
        .current_dir(dir.path())
        .args(["note-summary", &id, "--local"])
        .assert()
        .success();

    scribe()
        .current_dir(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("ai-summary").not());
}

#[test]
fn test_note_summary_short_note() {
    let dir = init_store();
    let id = create_note(dir.path(), "Tiny", "<p>Too short.</p>");

    scribe()
        .current_dir(dir.path())
        .args(["note-summary", &id])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 50 characters"));
}
