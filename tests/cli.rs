use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn add(home: &Path, title: &str, author: &str, isbn: &str) -> assert_cmd::assert::Assert {
    shelf(home)
        .args(["add", "--title", title, "--author", author, "--isbn", isbn])
        .assert()
}

#[test]
fn empty_shelf_shows_empty_state() {
    let temp = tempfile::tempdir().unwrap();

    shelf(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No books on the shelf yet."));
}

#[test]
fn add_then_list() {
    let temp = tempfile::tempdir().unwrap();

    add(temp.path(), "Dune", "Frank Herbert", "123")
        .success()
        .stdout(predicate::str::contains("Book added successfully!"));

    shelf(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Frank Herbert"))
        .stdout(predicate::str::contains("No books on the shelf yet.").not());

    let raw = fs::read_to_string(temp.path().join("books.json")).unwrap();
    let books: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        books,
        serde_json::json!([{"title": "Dune", "author": "Frank Herbert", "isbn": "123"}])
    );
}

#[test]
fn duplicate_isbn_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), "Dune", "Frank Herbert", "123").success();
    let before = fs::read_to_string(temp.path().join("books.json")).unwrap();

    add(temp.path(), "Emma", "Jane Austen", "123")
        .success()
        .stdout(predicate::str::contains("A book with this ISBN already exists!"));

    let after = fs::read_to_string(temp.path().join("books.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn missing_field_is_rejected() {
    let temp = tempfile::tempdir().unwrap();

    shelf(temp.path())
        .args(["add", "--title", "Dune", "--isbn", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please fill in all fields"));

    assert!(!temp.path().join("books.json").exists());
}

#[test]
fn delete_last_book_restores_empty_state() {
    let temp = tempfile::tempdir().unwrap();
    add(temp.path(), "Dune", "Frank Herbert", "123").success();

    shelf(temp.path())
        .args(["rm", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book removed successfully!"));

    shelf(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No books on the shelf yet."));
}

#[test]
fn delete_unknown_isbn_warns() {
    let temp = tempfile::tempdir().unwrap();

    shelf(temp.path())
        .args(["delete", "404"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No book with ISBN 404"));
}

#[test]
fn corrupt_slot_fails_by_default() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("books.json"), "{oops").unwrap();

    shelf(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn corrupt_slot_reads_empty_when_configured() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("books.json"), "{oops").unwrap();

    shelf(temp.path())
        .args(["config", "on-corrupt", "empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("on-corrupt set to empty"));

    shelf(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No books on the shelf yet."));
}

#[test]
fn config_lists_all_keys() {
    let temp = tempfile::tempdir().unwrap();

    shelf(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("slot-key = books"))
        .stdout(predicate::str::contains("on-corrupt = fail"));
}

#[test]
fn data_dir_flag_overrides_env() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    shelf(env_home.path())
        .arg("--data-dir")
        .arg(flag_home.path())
        .args(["add", "-t", "Dune", "-a", "Frank Herbert", "-i", "123"])
        .assert()
        .success();

    assert!(flag_home.path().join("books.json").exists());
    assert!(!env_home.path().join("books.json").exists());
}

#[test]
fn slot_key_cannot_point_at_config_file() {
    let temp = tempfile::tempdir().unwrap();

    for key in ["config", "../outside"] {
        shelf(temp.path())
            .args(["config", "slot-key", key])
            .assert()
            .success()
            .stdout(predicate::str::contains("slot-key"))
            .stdout(predicate::str::contains("set to").not());
    }

    add(temp.path(), "Dune", "Frank Herbert", "123").success();
    assert!(temp.path().join("books.json").exists());

    shelf(temp.path())
        .args(["config", "slot-key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("books"));
    shelf(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
}
