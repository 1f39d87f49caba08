use predicates::str::contains;

mod common;
use common::{add_sample_logs, init_db_with_book, rrl, setup_test_db};

#[test]
fn test_shelf_shows_reading_progress() {
    let db_path = setup_test_db("shelf_shows_reading_progress");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args(["--db", &db_path, "shelf"])
        .assert()
        .success()
        .stdout(contains("Reading"))
        .stdout(contains("The Long Ships"))
        .stdout(contains("page 55 of 100"));
}

#[test]
fn test_shelf_empty() {
    let db_path = setup_test_db("shelf_empty");

    rrl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rrl()
        .args(["--db", &db_path, "shelf"])
        .assert()
        .success()
        .stdout(contains("Your shelf is empty"));
}

#[test]
fn test_shelf_unregistered_edition_gets_placeholder_title() {
    let db_path = setup_test_db("shelf_placeholder_title");

    rrl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rrl()
        .args([
            "--db",
            &db_path,
            "add",
            "5555555555",
            "30",
            "--date",
            "2025-03-01",
        ])
        .assert()
        .success();

    rrl()
        .args(["--db", &db_path, "shelf"])
        .assert()
        .success()
        .stdout(contains("Untitled book"));
}

#[test]
fn test_finish_logs_remaining_pages() {
    let db_path = setup_test_db("finish_logs_remaining_pages");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    // 55 of 100 pages read, finishing logs the missing 45
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
        .success()
        .stdout(contains("45 closing pages"));

    rrl()
        .args(["--db", &db_path, "shelf"])
        .assert()
        .success()
        .stdout(contains("finished 2025-03-03"));
}

#[test]
fn test_drop_moves_book_to_dropped_section() {
    let db_path = setup_test_db("drop_moves_to_dropped");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args([
            "--db",
            &db_path,
            "drop",
            "9780000000001",
            "--date",
            "2025-03-03",
        ])
        .assert()
        .success()
        .stdout(contains("Dropped '9780000000001'"));

    rrl()
        .args(["--db", &db_path, "shelf"])
        .assert()
        .success()
        .stdout(contains("55p of 100p"));
}

#[test]
fn test_finish_after_drop_wins() {
    let db_path = setup_test_db("finish_after_drop_wins");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path);

    rrl()
        .args([
            "--db",
            &db_path,
            "drop",
            "9780000000001",
            "--date",
            "2025-03-03",
        ])
        .assert()
        .success();

    rrl()
        .args([
            "--db",
            &db_path,
            "finish",
            "9780000000001",
            "--date",
            "2025-03-04",
        ])
        .assert()
        .success();

    rrl()
        .args(["--db", &db_path, "shelf"])
        .assert()
        .success()
        .stdout(contains("finished 2025-03-04"));
}

#[test]
fn test_dashboard_shows_active_book_and_streak() {
    let db_path = setup_test_db("dashboard_active_book");
    init_db_with_book(&db_path);

    // logged today so the streak counter is alive
    rrl()
        .args(["--db", &db_path, "add", "9780000000001", "25"])
        .assert()
        .success();

    rrl()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Now reading: The Long Ships"))
        .stdout(contains("1 day(s)"))
        .stdout(contains("Daily goal: 20 pages"));
}

#[test]
fn test_dashboard_without_active_book() {
    let db_path = setup_test_db("dashboard_no_active_book");
    init_db_with_book(&db_path);

    rrl()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("No active book"));
}

#[test]
fn test_badges_reflect_total_pages() {
    let db_path = setup_test_db("badges_reflect_total_pages");
    init_db_with_book(&db_path);
    add_sample_logs(&db_path); // 55 pages total

    rrl()
        .args(["--db", &db_path, "badges"])
        .assert()
        .success()
        .stdout(contains("★ First Steps")) // 50 pages, earned
        .stdout(contains("☆ Page Turner")); // 500 pages, not yet
}

#[test]
fn test_badges_count_finished_books() {
    let db_path = setup_test_db("badges_count_finished_books");
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

    rrl()
        .args(["--db", &db_path, "badges"])
        .assert()
        .success()
        .stdout(contains("★ Finisher"));
}
