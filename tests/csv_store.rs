use roster::error::RosterError;
use roster::model::{Employee, EmployeeUpdate};
use roster::store::csv::{CsvBackend, HEADER};
use roster::store::Roster;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("employees.csv")
}

fn open(dir: &TempDir) -> Roster<CsvBackend> {
    Roster::open(CsvBackend::new(data_path(dir))).unwrap()
}

#[test]
fn open_creates_a_header_only_file() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);
    assert!(store.is_empty());

    let content = fs::read_to_string(data_path(&dir)).unwrap();
    assert_eq!(content, format!("{HEADER}\n"));
}

#[test]
fn reopening_reproduces_the_same_records() {
    let dir = TempDir::new().unwrap();
    let originals = vec![
        Employee::new(1, "Ada", "Engineer", 90_000.0, "ada@x.com"),
        Employee::new(2, "Lovelace, Ada", "\"Chief\" Engineer", 123_456.78, "a@b.co"),
        Employee::new(3, "Grace", "Admiral", 120_000.5, "grace@navy.mil"),
    ];

    let mut store = open(&dir);
    for e in &originals {
        store.add(e.clone()).unwrap();
    }
    drop(store);

    let reopened = open(&dir);
    assert_eq!(reopened.employees(), originals.as_slice());
}

#[test]
fn every_mutation_rewrites_the_file() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);

    store
        .add(Employee::new(1, "Ada", "Engineer", 90_000.0, "ada@x.com"))
        .unwrap();
    let content = fs::read_to_string(data_path(&dir)).unwrap();
    assert!(content.contains("1,Ada,Engineer,90000,ada@x.com"));

    store
        .update(
            1,
            EmployeeUpdate {
                salary: Some(95_000.0),
                ..Default::default()
            },
        )
        .unwrap();
    let content = fs::read_to_string(data_path(&dir)).unwrap();
    assert!(content.contains("95000"));
    assert!(!content.contains("90000"));

    store.delete(1).unwrap();
    let content = fs::read_to_string(data_path(&dir)).unwrap();
    assert_eq!(content, format!("{HEADER}\n"));
}

#[test]
fn failed_mutations_leave_the_file_alone() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store
        .add(Employee::new(1, "Ada", "Engineer", 90_000.0, "ada@x.com"))
        .unwrap();
    let before = fs::read_to_string(data_path(&dir)).unwrap();

    assert!(matches!(
        store.delete(2),
        Err(RosterError::NotFound(2))
    ));
    assert!(matches!(
        store.add(Employee::new(1, "Twin", "Engineer", 1.0, "t@x.co")),
        Err(RosterError::DuplicateId(1))
    ));

    assert_eq!(fs::read_to_string(data_path(&dir)).unwrap(), before);
}

#[test]
fn no_tmp_files_left_behind() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    store
        .add(Employee::new(1, "Ada", "Engineer", 90_000.0, "ada@x.com"))
        .unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let name = entry.unwrap().file_name();
        let name = name.to_string_lossy().into_owned();
        assert!(!name.ends_with(".tmp"), "leftover tmp file: {name}");
    }
}

#[test]
fn malformed_file_fails_to_open_with_the_offending_line() {
    let dir = TempDir::new().unwrap();
    fs::write(
        data_path(&dir),
        format!("{HEADER}\n1,Ada,Engineer,90000,ada@x.com\n2,Bad,Row,not-a-number,b@x.co\n"),
    )
    .unwrap();

    match Roster::open(CsvBackend::new(data_path(&dir))) {
        Err(RosterError::Parse { line: 3, .. }) => {}
        other => panic!("expected parse error on line 3, got {other:?}"),
    }
}
