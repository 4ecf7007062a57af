use crate::cli::support::{scribe, RUST_TEXT};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_fallback_warning_goes_to_stderr() {
    let dir = tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .arg("summarize")
        .write_stdin(RUST_TEXT)
        .assert()
        .success()
        .stderr(predicate::str::contains("falling back to extractive summary"))
        .stdout(predicate::str::contains("falling back").not());
}

#[test]
fn test_log_level_error_silences_warning() {
    let dir = tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["--log-level", "error", "summarize"])
        .write_stdin(RUST_TEXT)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();

    let output = scribe()
        .current_dir(dir.path())
        .args(["--log-json", "summarize"])
        .write_stdin(RUST_TEXT)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|l| l.contains("falling back"))
        .expect("fallback warning logged");
    let record: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(record["level"], "WARN");
}

#[test]
fn test_verbose_logs_debug_events() {
    let dir = tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["--verbose", "summarize", "--local"])
        .write_stdin(RUST_TEXT)
        .assert()
        .success()
        .stderr(predicate::str::contains("summarize_params"));
}
