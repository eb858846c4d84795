use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn roster_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn fresh_start_add_list_exit() {
    let dir = TempDir::new().unwrap();
    roster_in(&dir)
        .write_stdin("1\n1\nAda\nEngineer\n90000\nada@x.com\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data file found"))
        .stdout(predicate::str::contains("added successfully"))
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("Goodbye."));

    let content = fs::read_to_string(dir.path().join("employees.csv")).unwrap();
    assert_eq!(content, "id,name,position,salary,email\n1,Ada,Engineer,90000,ada@x.com\n");
}

#[test]
fn existing_csv_is_discovered_and_loaded() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("staff.csv"),
        "id,name,position,salary,email\n4,Grace,Admiral,120000,grace@navy.mil\n",
    )
    .unwrap();

    roster_in(&dir)
        .write_stdin("5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using data file"))
        .stdout(predicate::str::contains("Grace"));
}

#[test]
fn retry_exhaustion_aborts_without_writing_a_record() {
    let dir = TempDir::new().unwrap();
    roster_in(&dir)
        .write_stdin("1\n1\nAda\nEngineer\nabc\n-5\nxyz\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("maximum attempts reached for salary"));

    let content = fs::read_to_string(dir.path().join("employees.csv")).unwrap();
    assert_eq!(content, "id,name,position,salary,email\n");
}

#[test]
fn file_flag_overrides_discovery() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("aaa.csv"),
        "id,name,position,salary,email\n",
    )
    .unwrap();

    roster_in(&dir)
        .args(["--file", "custom.csv"])
        .write_stdin("6\n")
        .assert()
        .success();
    assert!(dir.path().join("custom.csv").exists());
}

#[test]
fn delete_roundtrip_via_search() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("employees.csv"),
        "id,name,position,salary,email\n1,Ada,Engineer,90000,ada@x.com\n",
    )
    .unwrap();

    roster_in(&dir)
        .write_stdin("4\n1\n3\n1\ny\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ada"))
        .stdout(predicate::str::contains("deleted"));

    let content = fs::read_to_string(dir.path().join("employees.csv")).unwrap();
    assert_eq!(content, "id,name,position,salary,email\n");
}
