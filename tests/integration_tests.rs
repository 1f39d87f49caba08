use predicates::str::contains;
use std::fs;

mod common;
use common::{add_sample_logs, init_db_with_book, rrl, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rrl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("rReadlogger initialization completed"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_add_logs_pages() {
    let db_path = setup_test_db("add_logs_pages");
    init_db_with_book(&db_path);

    rrl()
        .args([
            "--db",
            &db_path,
            "add",
            "9780000000001",
            "20",
            "--date",
            "2025-03-01",
        ])
        .assert()
        .success()
        .stdout(contains("Logged 20 pages of '9780000000001' on 2025-03-01"));
}

#[test]
fn test_add_unregistered_edition_warns_but_succeeds() {
    let db_path = setup_test_db("add_unregistered_edition");

    rrl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rrl()
        .args([
            "--db",
            &db_path,
            "add",
            "9999999999",
            "12",
            "--date",
            "2025-03-01",
        ])
        .assert()
        .success()
        .stdout(contains("not registered"))
        .stdout(contains("Logged 12 pages"));
}

#[test]
fn test_add_rejects_negative_pages() {
    let db_path = setup_test_db("add_rejects_negative_pages");
    init_db_with_book(&db_path);

    rrl()
        .args([
            "--db",
            &db_path,
            "add",
            "9780000000001",
            "--",
            "-5",
        ])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = setup_test_db("add_rejects_invalid_date");
    init_db_with_book(&db_path);

    rrl()
        .args([
            "--db",
            &db_path,
            "add",
            "9780000000001",
            "10",
            "--date",
            "not-a-date",
        ])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_book_list_shows_registered_edition() {
    let db_path = setup_test_db("book_list_shows_edition");
    init_db_with_book(&db_path);

    rrl()
        .args(["--db", &db_path, "book", "--list"])
        .assert()
        .success()
        .stdout(contains("9780000000001"))
        .stdout(contains("The Long Ships"))
        .stdout(contains("Frans G. Bengtsson"));
}

#[test]
fn test_book_duplicate_isbn_fails() {
    let db_path = setup_test_db("book_duplicate_isbn");
    init_db_with_book(&db_path);

    rrl()
        .args([
            "--db",
            &db_path,
            "book",
            "9780000000001",
            "--title",
            "Another Title",
            "--pages",
            "200",
        ])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_book_requires_pages() {
    let db_path = setup_test_db("book_requires_pages");

    rrl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rrl()
        .args([
            "--db",
            &db_path,
            "book",
            "9780000000002",
            "--title",
            "No Pages Given",
        ])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_list_period_month() {
    let db_path = setup_test_db("list_period_month");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args(["--db", &db_path, "list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("2025-03-01"))
        .stdout(contains("2025-03-02"))
        .stdout(contains("9780000000001"));
}

#[test]
fn test_list_period_range() {
    let db_path = setup_test_db("list_period_range");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args(["--db", &db_path, "list", "--period", "2025-03-01:2025-03-01"])
        .assert()
        .success()
        .stdout(contains("2025-03-01"))
        .stdout(contains("(20 pages)"));
}

#[test]
fn test_list_empty_period() {
    let db_path = setup_test_db("list_empty_period");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args(["--db", &db_path, "list", "--period", "2020"])
        .assert()
        .success()
        .stdout(contains("No read logs for the selected period"));
}

#[test]
fn test_del_all_logs_for_date() {
    let db_path = setup_test_db("del_all_logs_for_date");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args(["--db", &db_path, "del", "2025-03-01"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted 1 read log(s) for 2025-03-01"));

    rrl()
        .args(["--db", &db_path, "list", "--period", "2025-03-01"])
        .assert()
        .success()
        .stdout(contains("No read logs for the selected period"));
}

#[test]
fn test_del_cancelled_keeps_logs() {
    let db_path = setup_test_db("del_cancelled_keeps_logs");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args(["--db", &db_path, "del", "2025-03-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rrl()
        .args(["--db", &db_path, "list", "--period", "2025-03-01"])
        .assert()
        .success()
        .stdout(contains("2025-03-01"));
}

#[test]
fn test_del_unknown_date_fails() {
    let db_path = setup_test_db("del_unknown_date_fails");
    init_db_with_book(&db_path);

    rrl()
        .args(["--db", &db_path, "del", "2025-01-01"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn test_del_by_id() {
    let db_path = setup_test_db("del_by_id");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args(["--db", &db_path, "del", "2025-03-02", "--id", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted 1 read log(s)"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maintenance_commands");
    init_db_with_book(&db_path);

    rrl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rrl()
        .args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Database optimized"));

    rrl()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));

    rrl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Read logs"))
        .stdout(contains("Badges"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("internal_log_records");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_copies_database");
    init_db_with_book(&db_path);

    let dest = common::temp_out("backup_copies_database", "sqlite");

    rrl()
        .args(["--db", &db_path, "backup", &dest])
        .assert()
        .success();

    assert!(fs::metadata(&dest).is_ok());
}
