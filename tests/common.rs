#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rrl() -> Command {
    cargo_bin_cmd!("rreadlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rreadlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
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

/// Initialize DB and register one edition useful for many tests
pub fn init_db_with_book(db_path: &str) {
    rrl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rrl()
        .args([
            "--db",
            db_path,
            "book",
            "9780000000001",
            "--title",
            "The Long Ships",
            "--author",
            "Frans G. Bengtsson",
            "--pages",
            "100",
        ])
        .assert()
        .success();
}

/// Log a couple of reading sessions for the registered edition
pub fn add_sample_logs(db_path: &str) {
    rrl()
        .args([
            "--db",
            db_path,
            "add",
            "9780000000001",
            "20",
            "--date",
            "2025-03-01",
        ])
        .assert()
        .success();

    rrl()
        .args([
            "--db",
            db_path,
            "add",
            "9780000000001",
            "35",
            "--date",
            "2025-03-02",
        ])
        .assert()
        .success();
}
