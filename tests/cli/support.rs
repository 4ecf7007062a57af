use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;
use std::process::Output;
use tempfile::{tempdir, TempDir};

/// Five sentences; the extractive summary keeps the first two
pub const RUST_TEXT: &str = "Rust is a systems language. Rust has a strong type system. \
The borrow checker keeps memory safe. Cargo builds Rust projects quickly. \
Many teams now ship Rust in production.";

/// Extractive summary of [`RUST_TEXT`]
pub const RUST_SUMMARY: &str = "Rust is a systems language. Rust has a strong type system.";

/// Get a Command for scribe with remote settings cleared from the environment
pub fn scribe() -> Command {
    let mut cmd = cargo_bin_cmd!("scribe");
    for var in [
        "GEMINI_API_KEY",
        "SCRIBE_REMOTE_URL",
        "SCRIBE_REMOTE_TIMEOUT",
        "SCRIBE_LOG",
        "SCRIBE_LOG_LEVEL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a temporary directory with an initialized store
pub fn init_store() -> TempDir {
    let dir = tempdir().unwrap();
    scribe()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Create a note and return its ID (first line of `new` output)
pub fn create_note(dir: &Path, title: &str, body: &str) -> String {
    let output = scribe()
        .current_dir(dir)
        .args(["new", "--title", title])
        .write_stdin(body)
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {:?}", output);
    extract_id(&output)
}

/// Extract note ID from `new` output (first line)
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.to_string())
        .unwrap_or_default()
}

/// Parse stdout as JSON
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
