#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tc() -> Command {
    cargo_bin_cmd!("timeclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{db_path}.cache.json")).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema and register one employee (id 1).
pub fn init_db_with_employee(db_path: &str) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tc().args([
        "--db",
        db_path,
        "--test",
        "employee",
        "add",
        "Ana Perez",
        "1234567",
    ])
    .assert()
    .success();
}
