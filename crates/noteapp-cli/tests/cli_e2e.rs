#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn noteapp_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("noteapp"));
    cmd.env("NOTEAPP_HOME", home.path().as_os_str())
        .env("CLICOLOR", "0")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_shows_sample_notes_in_memory() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. A good day"))
        .stdout(predicate::str::contains("Garden"));

    // Memory storage never writes notes
    assert!(!home.path().join("notes.json").exists());
}

#[test]
fn test_no_seed_lists_empty_hint() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home)
        .args(["list", "--no-seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn test_add_then_list_with_file_storage() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home)
        .args(["--storage", "file", "--no-seed", "add", "Groceries", "Milk and eggs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note Added"));

    assert!(home.path().join("notes.json").exists());

    noteapp_cmd(&home)
        .args(["--storage", "file", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Groceries"))
        .stdout(predicate::str::contains("     Milk and eggs"));
}

#[test]
fn test_add_with_digits_is_silent_noop() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home)
        .args(["--storage", "file", "--no-seed", "add", "Room 101", "Meeting"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    noteapp_cmd(&home)
        .args(["--storage", "file", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn test_tap_removes_row_and_missing_row_is_silent() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    let data_arg = data.to_str().unwrap();

    noteapp_cmd(&home)
        .args(["--data-dir", data_arg, "--no-seed", "add", "First", "one"])
        .assert()
        .success();
    noteapp_cmd(&home)
        .args(["--data-dir", data_arg, "add", "Second", "two"])
        .assert()
        .success();

    noteapp_cmd(&home)
        .args(["--data-dir", data_arg, "tap", "1"])
        .assert()
        .success();

    noteapp_cmd(&home)
        .args(["--data-dir", data_arg, "rm", "7"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    noteapp_cmd(&home)
        .args(["--data-dir", data_arg, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Second"))
        .stdout(predicate::str::contains("First").not());
}

#[test]
fn test_tap_zero_is_a_usage_error() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home).args(["tap", "0"]).assert().failure();
}

#[test]
fn test_clear_empties_file_store_without_reseeding() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home)
        .args(["--storage", "file", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 7 note"));

    noteapp_cmd(&home)
        .args(["--storage", "file", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet."));
}

#[test]
fn test_session_reads_events_from_stdin() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home)
        .args(["--no-seed"])
        .write_stdin("title Groceries\ndesc Milk and eggs\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note App"))
        .stdout(predicate::str::contains("Note Added"))
        .stdout(predicate::str::contains("  1. Groceries"));
}

#[test]
fn test_session_tap_removes_sample_row() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");

    noteapp_cmd(&home)
        .args(["--data-dir", data.to_str().unwrap(), "session"])
        .write_stdin("1\n")
        .assert()
        .success();

    let saved = fs::read_to_string(data.join("notes.json")).unwrap();
    assert!(!saved.contains("A good day"));
    assert!(saved.contains("Garden"));
}

#[test]
fn test_config_set_persists() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home)
        .args(["config", "set", "date_format", "%Y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date_format = %Y"));

    noteapp_cmd(&home)
        .args(["config", "get", "date_format"])
        .assert()
        .success()
        .stdout(predicate::str::diff("%Y\n"));

    noteapp_cmd(&home)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage = memory"))
        .stdout(predicate::str::contains("line_width = 60"));
}

#[test]
fn test_config_rejects_bad_values() {
    let home = TempDir::new().unwrap();

    noteapp_cmd(&home)
        .args(["config", "set", "line_width", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line_width"));

    assert!(!home.path().join("config.json").exists());
}
