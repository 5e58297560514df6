//! Integration tests for the sansuf binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_list_command() {
    let dir = tempdir().unwrap();
    let user_file = dir.path().join("USER_SANS2D.txt");
    fs::write(
        &user_file,
        "SAMPLE/OFFSET 120\nGRAVITY/ON\nL/Q 0.1 0.5 0.01/LOG\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("sansuf").unwrap();
    cmd.args(["list", user_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample_offset"))
        .stdout(predicate::str::contains("gravity_on"))
        .stdout(predicate::str::contains("limits_q"))
        .stdout(predicate::str::contains("Total: 3 settings"));
}

#[test]
fn test_list_family_filter() {
    let dir = tempdir().unwrap();
    let user_file = dir.path().join("user.txt");
    fs::write(&user_file, "SAMPLE/OFFSET 120\nGRAVITY/ON\n").unwrap();

    let mut cmd = Command::cargo_bin("sansuf").unwrap();
    cmd.args(["list", user_file.to_str().unwrap(), "--family", "gravity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gravity_on"))
        .stdout(predicate::str::contains("sample_offset").not());
}

#[test]
fn test_list_json_output() {
    let dir = tempdir().unwrap();
    let user_file = dir.path().join("user.txt");
    fs::write(&user_file, "TRANS/MASK=MyMask.xml\n").unwrap();

    let mut cmd = Command::cargo_bin("sansuf").unwrap();
    cmd.args(["list", user_file.to_str().unwrap(), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"trans_mask\""))
        .stdout(predicate::str::contains("MyMask.xml"));
}

#[test]
fn test_check_clean_file() {
    let dir = tempdir().unwrap();
    let user_file = dir.path().join("user.txt");
    fs::write(&user_file, "! comment\nGRAVITY/ON\n").unwrap();

    let mut cmd = Command::cargo_bin("sansuf").unwrap();
    cmd.args(["check", user_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_check_echoes_malformed_line() {
    let dir = tempdir().unwrap();
    let user_file = dir.path().join("user.txt");
    fs::write(&user_file, "GRAVITY/ON\nBOGUS/THING 1 2\n").unwrap();

    let mut cmd = Command::cargo_bin("sansuf").unwrap();
    cmd.args(["check", user_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 2"))
        .stdout(predicate::str::contains("unknown command"))
        .stdout(predicate::str::contains("BOGUS/THING 1 2"));
}

#[test]
fn test_show_command() {
    let dir = tempdir().unwrap();
    let user_file = dir.path().join("user.txt");
    fs::write(&user_file, "SAMPLE/OFFSET 120\nSAMPLE/OFFSET 75\n").unwrap();

    let mut cmd = Command::cargo_bin("sansuf").unwrap();
    cmd.args(["show", user_file.to_str().unwrap(), "sample_offset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("120"))
        .stdout(predicate::str::contains("75"))
        .stdout(predicate::str::contains("the last one takes effect"));
}

#[test]
fn test_show_unknown_key_fails() {
    let dir = tempdir().unwrap();
    let user_file = dir.path().join("user.txt");
    fs::write(&user_file, "GRAVITY/ON\n").unwrap();

    let mut cmd = Command::cargo_bin("sansuf").unwrap();
    cmd.args(["show", user_file.to_str().unwrap(), "not_a_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting key"));
}

#[test]
fn test_missing_file_fails_with_context() {
    let mut cmd = Command::cargo_bin("sansuf").unwrap();
    cmd.args(["check", "/no/such/user_file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read user file"));
}
