use crate::cli::support::scribe;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized scribe store"));

    assert!(dir.path().join(".scribe/notes").is_dir());
    assert!(dir.path().join(".scribe/config.toml").is_file());
}

#[test]
fn test_init_twice_is_a_data_error() {
    let dir = tempdir().unwrap();
    scribe().current_dir(dir.path()).arg("init").assert().success();

    scribe()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_with_root_flag() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("project");
    std::fs::create_dir_all(&root).unwrap();

    scribe()
        .current_dir(dir.path())
        .arg("--root")
        .arg(&root)
        .arg("init")
        .assert()
        .success();

    assert!(root.join(".scribe").is_dir());
}

#[test]
fn test_no_command_prints_version() {
    scribe()
        .assert()
        .success()
        .stdout(predicate::str::contains("scribe "))
        .stdout(predicate::str::contains("scribe --help"));
}

#[test]
fn test_help_lists_commands() {
    scribe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: scribe"))
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("note-summary"));
}
