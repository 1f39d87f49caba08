use std::fs;

mod common;
use common::{add_sample_logs, init_db_with_book, rrl, setup_test_db, temp_out};

#[test]
fn test_export_logs_csv_all() {
    let db_path = setup_test_db("export_logs_csv_all");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    let out = temp_out("export_logs_csv_all", "csv");

    rrl()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("read_date"));
    assert!(content.contains("2025-03-01"));
    assert!(content.contains("2025-03-02"));
    assert!(content.contains("9780000000001"));
}

#[test]
fn test_export_logs_json_range() {
    let db_path = setup_test_db("export_logs_json_range");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    let out = temp_out("export_logs_json_range", "json");

    rrl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range",
            "2025-03-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-03-01"));
    assert!(!content.contains("2025-03-02"));
}

#[test]
fn test_export_logs_classifies_events() {
    let db_path = setup_test_db("export_logs_classifies_events");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args([
            "--db",
            &db_path,
            "finish",
            "9780000000001",
            "--date",
            "2025-03-03",
        ])
        .assert()
        .success();

    let out = temp_out("export_logs_classifies_events", "json");

    rrl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"event\""));
    assert!(content.contains("finish"));
}

#[test]
fn test_export_shelf_csv() {
    let db_path = setup_test_db("export_shelf_csv");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    let out = temp_out("export_shelf_csv", "csv");

    rrl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--shelf",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported shelf csv");
    assert!(content.contains("The Long Ships"));
    assert!(content.contains("55"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let db_path = setup_test_db("export_xlsx_creates_file");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    let out = temp_out("export_xlsx_creates_file", "xlsx");

    rrl()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    let out = temp_out("export_empty_range", "csv");

    rrl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2020",
        ])
        .assert()
        .success();

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_rejects_relative_path");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure();
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force_overwrites");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    let out = temp_out("export_force_overwrites", "csv");
    fs::write(&out, "stale content").expect("seed existing file");

    rrl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("stale content"));
    assert!(content.contains("9780000000001"));
}

#[test]
fn test_export_invalid_range_fails() {
    let db_path = setup_test_db("export_invalid_range");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    let out = temp_out("export_invalid_range", "csv");

    rrl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range",
            "03-2025",
        ])
        .assert()
        .failure();
}
