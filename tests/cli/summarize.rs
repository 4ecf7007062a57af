use crate::cli::support::{scribe, stdout_json, RUST_SUMMARY, RUST_TEXT};
use predicates::prelude::*;
use tempfile::tempdir;

const TWO_SENTENCES: &str =
    "The meeting covered the budget for next year. Everyone agreed to cut travel costs.";

#[test]
fn test_local_summary_from_stdin() {
    let dir = tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["summarize", "--local"])
        .write_stdin(RUST_TEXT)
        .assert()
        .success()
        .stdout(format!("{}\n", RUST_SUMMARY));
}

#[test]
fn test_short_text_passes_through() {
    let dir = tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["summarize", "--local"])
        .write_stdin(TWO_SENTENCES)
        .assert()
        .success()
        .stdout(format!("{}\n", TWO_SENTENCES));
}

#[test]
fn test_summarize_file_argument() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("input.txt");
    std::fs::write(&file, RUST_TEXT).unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["summarize", "--local"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(RUST_SUMMARY));
}

#[test]
fn test_summarize_missing_file() {
    let dir = tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["summarize", "--local", "nope.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.txt"));
}

#[test]
fn test_html_input_is_stripped() {
    let dir = tempdir().unwrap();
    let markup = format!("<h1>Notes</h1><p>{}</p>", TWO_SENTENCES.replace("budget", "<b>budget</b>"));

    let output = scribe()
        .current_dir(dir.path())
        .args(["summarize", "--local", "--html"])
        .write_stdin(markup)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('<'));
    assert!(stdout.contains("the budget for next year"));
}

#[test]
fn test_missing_api_key_falls_back() {
    let dir = tempdir().unwrap();

    let output = scribe()
        .current_dir(dir.path())
        .args(["--format", "json", "summarize"])
        .write_stdin(RUST_TEXT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["summary"], RUST_SUMMARY);
    assert_eq!(json["source"], "extractive");
    assert_eq!(json["fallback_reason"], "API key not configured");
}

#[test]
fn test_unreachable_remote_falls_back() {
    let dir = tempdir().unwrap();

    let output = scribe()
        .current_dir(dir.path())
        .env("GEMINI_API_KEY", "test-key")
        .env("SCRIBE_REMOTE_URL", "http://127.0.0.1:9")
        .args(["--format", "json", "summarize"])
        .write_stdin(RUST_TEXT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["summary"], RUST_SUMMARY);
    assert_eq!(json["source"], "extractive");
    assert!(json["fallback_reason"]
        .as_str()
        .unwrap()
        .starts_with("transport error"));
}

#[test]
fn test_local_flag_reports_remote_disabled() {
    let dir = tempdir().unwrap();

    let output = scribe()
        .current_dir(dir.path())
        .args(["summarize", "--local", "--format", "json"])
        .write_stdin(RUST_TEXT)
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["source"], "extractive");
    assert_eq!(json["fallback_reason"], "remote summarizer disabled");
}

#[test]
fn test_too_short_input_is_usage_error() {
    let dir = tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["summarize", "--local"])
        .write_stdin("Too short to summarize.   ")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "text must be at least 50 characters long (got 23)",
        ));
}

#[test]
fn test_store_config_sets_minimum_length() {
    let dir = crate::cli::support::init_store();
    std::fs::write(
        dir.path().join(".scribe/config.toml"),
        "[summarize]\nmin_input_chars = 5\nremote_enabled = false\n",
    )
    .unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["--format", "json", "summarize"])
        .write_stdin("Tiny note.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\": \"Tiny note.\""))
        .stdout(predicate::str::contains("remote summarizer disabled"));
}

#[test]
fn test_zero_max_length_rejected() {
    scribe()
        .args(["summarize", "--max-length", "0"])
        .assert()
        .code(2);
}
