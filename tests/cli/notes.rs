use crate::cli::support::{create_note, init_store, scribe, stdout_json};
use predicates::prelude::*;

#[test]
fn test_new_reads_body_from_stdin() {
    let dir = init_store();

    let output = scribe()
        .current_dir(dir.path())
        .args([
            "--format", "json", "new", "--title", "Trip plan", "--category", "Travel", "--tag",
            "japan",
        ])
        .write_stdin("<p>Fly to Osaka on Monday.</p>\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["title"], "Trip plan");
    assert_eq!(json["category"], "Travel");
    assert_eq!(json["tags"][0], "japan");
    assert_eq!(json["word_count"], 5);
    assert!(json["id"].as_str().unwrap().starts_with("sc-"));
    assert!(json["path"]
        .as_str()
        .unwrap()
        .ends_with("-trip-plan.md"));
}

#[test]
fn test_new_from_template() {
    let dir = init_store();

    let output = scribe()
        .current_dir(dir.path())
        .args(["--format", "json", "new", "--title", "Monday", "--template", "daily-journal"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["category"], "Personal");
    let id = json["id"].as_str().unwrap().to_string();

    let output = scribe()
        .current_dir(dir.path())
        .args(["show", &id, "--format", "json"])
        .output()
        .unwrap();
    let body = stdout_json(&output)["body"].as_str().unwrap().to_string();
    assert!(body.starts_with("# Daily Journal - "));
    assert!(body.contains("## What are you grateful for?"));
}

#[test]
fn test_new_template_yields_to_explicit_values() {
    let dir = init_store();

    let output = scribe()
        .current_dir(dir.path())
        .args([
            "--format", "json", "new", "--title", "Sync", "--template", "meeting-notes",
            "--category", "Clients",
        ])
        .write_stdin("<p>Agreed on the launch date.</p>")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["category"], "Clients");
    let id = json["id"].as_str().unwrap().to_string();

    let output = scribe()
        .current_dir(dir.path())
        .args(["show", &id, "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output)["body"], "<p>Agreed on the launch date.</p>");
}

#[test]
fn test_new_unknown_template() {
    let dir = init_store();

    scribe()
        .current_dir(dir.path())
        .args(["new", "--title", "Dinner", "--template", "recipe"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid template: recipe"))
        .stderr(predicate::str::contains("book-notes"));

    let output = scribe()
        .current_dir(dir.path())
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 0);
}

#[test]
fn test_new_requires_store() {
    let dir = tempfile::tempdir().unwrap();

    scribe()
        .current_dir(dir.path())
        .args(["new", "--title", "Orphan"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("store not found"));
}

#[test]
fn test_show_prints_note_file() {
    let dir = init_store();
    let id = create_note(dir.path(), "Groceries", "<p>Milk and eggs</p>");

    scribe()
        .current_dir(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("title: Groceries"))
        .stdout(predicate::str::contains("category: Personal"))
        .stdout(predicate::str::contains("<p>Milk and eggs</p>"));
}

#[test]
fn test_show_json_includes_body() {
    let dir = init_store();
    let id = create_note(dir.path(), "Groceries", "<p>Milk and eggs</p>");

    let output = scribe()
        .current_dir(dir.path())
        .args(["show", &id, "--format", "json"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["id"], id.as_str());
    assert_eq!(json["body"], "<p>Milk and eggs</p>");
    assert_eq!(json["favorite"], false);
}

#[test]
fn test_show_unknown_note() {
    let dir = init_store();

    scribe()
        .current_dir(dir.path())
        .args(["show", "sc-0000000000"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: sc-0000000000"));
}

#[test]
fn test_list_orders_and_filters() {
    let dir = init_store();
    let first = create_note(dir.path(), "First", "");
    let second = create_note(dir.path(), "Second", "");

    scribe()
        .current_dir(dir.path())
        .args(["update", &first, "--favorite", "true", "--category", "Work"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated {}", first)));

    let output = scribe()
        .current_dir(dir.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    let ids: Vec<String> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec![first.clone(), second.clone()]);

    scribe()
        .current_dir(dir.path())
        .args(["list", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{} [Work] First ★", first)))
        .stdout(predicate::str::contains("Second").not());

    scribe()
        .current_dir(dir.path())
        .args(["list", "--category", "personal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Second"))
        .stdout(predicate::str::contains("First").not());

    scribe()
        .current_dir(dir.path())
        .args(["list", "--recent", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First"))
        .stdout(predicate::str::contains("Second").not());
}

#[test]
fn test_list_empty_store() {
    let dir = init_store();

    scribe()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found"));

    scribe()
        .current_dir(dir.path())
        .args(["list", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_search_title_and_text() {
    let dir = init_store();
    create_note(dir.path(), "Groceries", "<p>Milk and eggs</p>");
    create_note(dir.path(), "Recipes", "<p>Omelette needs <b>EGGS</b></p>");
    create_note(dir.path(), "Travel", "<p>Pack light</p>");

    let output = scribe()
        .current_dir(dir.path())
        .args(["search", "eggs", "--format", "json"])
        .output()
        .unwrap();
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 2);

    scribe()
        .current_dir(dir.path())
        .args(["search", "TRAV"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Travel"));

    scribe()
        .current_dir(dir.path())
        .args(["search", "nothing-matches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_update_replaces_body_from_stdin() {
    let dir = init_store();
    let id = create_note(dir.path(), "Draft", "<p>old text</p>");

    let output = scribe()
        .current_dir(dir.path())
        .args(["update", &id, "--title", "Final", "--format", "json"])
        .write_stdin("<p>brand new text here</p>")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["title"], "Final");
    assert_eq!(json["word_count"], 4);
    assert!(json["path"].as_str().unwrap().ends_with("-final.md"));

    scribe()
        .current_dir(dir.path())
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("brand new text here"))
        .stdout(predicate::str::contains("old text").not());
}

#[test]
fn test_update_without_changes_is_usage_error() {
    let dir = init_store();
    let id = create_note(dir.path(), "Draft", "<p>text</p>");

    scribe()
        .current_dir(dir.path())
        .args(["update", &id])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to update"));
}

#[test]
fn test_delete_removes_note() {
    let dir = init_store();
    let id = create_note(dir.path(), "Temporary", "");

    scribe()
        .current_dir(dir.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted {}", id)));

    scribe()
        .current_dir(dir.path())
        .args(["show", &id])
        .assert()
        .code(3);
}

#[test]
fn test_store_discovered_from_subdirectory() {
    let dir = init_store();
    let id = create_note(dir.path(), "Nested lookup", "");
    let nested = dir.path().join("deep/er");
    std::fs::create_dir_all(&nested).unwrap();

    scribe()
        .current_dir(&nested)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(id));
}

#[test]
fn test_explicit_store_flag() {
    let dir = init_store();
    create_note(dir.path(), "Elsewhere", "");
    let other = tempfile::tempdir().unwrap();

    scribe()
        .current_dir(other.path())
        .arg("--store")
        .arg(dir.path().join(".scribe"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Elsewhere"));
}
