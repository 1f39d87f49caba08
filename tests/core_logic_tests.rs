use chrono::NaiveDate;
use rreadlogger::core::aggregate::aggregate;
use rreadlogger::core::badges::BadgeLogic;
use rreadlogger::core::classifier::{classify, event_note};
use rreadlogger::core::normalize::{effective_page_count, normalize};
use rreadlogger::core::streak::reading_streak;
use rreadlogger::models::badge::{Badge, Requirement};
use rreadlogger::models::event_tag::EventTag;
use rreadlogger::models::progress::{DashboardMetrics, ShelfSection};
use rreadlogger::models::read_log::ReadLogEntry;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn log(isbn: &str, pages: i64, date: &str, note: Option<&str>) -> ReadLogEntry {
    ReadLogEntry::new(isbn, pages, d(date), note.map(|n| n.to_string()))
}

#[test]
fn test_classifier_recognizes_markers() {
    assert_eq!(classify(Some("[KT_EVENT]START")), Some(EventTag::Start));
    assert_eq!(classify(Some("[KT_EVENT]DROP")), Some(EventTag::Drop));
    assert_eq!(classify(Some("[KT_EVENT]FINISH")), Some(EventTag::Finish));
    assert_eq!(classify(Some("just a note")), None);
    assert_eq!(classify(None), None);
}

#[test]
fn test_classifier_marker_is_substring_match() {
    assert_eq!(
        classify(Some("picked it up again [KT_EVENT]START")),
        Some(EventTag::Start)
    );
    // start wins over finish when both markers appear
    assert_eq!(
        classify(Some("[KT_EVENT]START [KT_EVENT]FINISH")),
        Some(EventTag::Start)
    );
    // drop wins over finish
    assert_eq!(
        classify(Some("[KT_EVENT]FINISH [KT_EVENT]DROP")),
        Some(EventTag::Drop)
    );
}

#[test]
fn test_event_note_builder() {
    assert_eq!(event_note(EventTag::Finish, None), "[KT_EVENT]FINISH");
    assert_eq!(
        event_note(EventTag::Drop, Some("too slow")),
        "[KT_EVENT]DROP too slow"
    );
}

#[test]
fn test_aggregate_sums_pages_per_isbn() {
    // logs arrive newest first, as the queries layer returns them
    let logs = vec![
        log("111", 35, "2025-03-02", None),
        log("111", 20, "2025-03-01", None),
    ];
    let partials = aggregate(&logs);
    assert_eq!(partials.len(), 1);
    assert_eq!(partials[0].isbn, "111");
    assert_eq!(partials[0].accumulated_pages, 55);
    assert_eq!(partials[0].last_read_date, d("2025-03-02"));
    assert_eq!(partials[0].latest_event, EventTag::Read);
}

#[test]
fn test_aggregate_ignores_negative_pages_and_empty_isbn() {
    let logs = vec![
        log("", 40, "2025-03-03", None),
        log("111", -10, "2025-03-02", None),
        log("111", 20, "2025-03-01", None),
    ];
    let partials = aggregate(&logs);
    assert_eq!(partials.len(), 1);
    assert_eq!(partials[0].accumulated_pages, 20);
}

#[test]
fn test_aggregate_latest_event_from_newest_log_only() {
    let logs = vec![
        log("111", 0, "2025-03-05", Some("[KT_EVENT]DROP")),
        log("111", 30, "2025-03-01", Some("[KT_EVENT]START")),
    ];
    let partials = aggregate(&logs);
    assert_eq!(partials[0].latest_event, EventTag::Drop);

    // an older drop buried under a plain reading log does not count
    let logs = vec![
        log("111", 12, "2025-03-06", None),
        log("111", 0, "2025-03-05", Some("[KT_EVENT]DROP")),
    ];
    let partials = aggregate(&logs);
    assert_eq!(partials[0].latest_event, EventTag::Read);
}

#[test]
fn test_aggregate_preserves_first_seen_order() {
    let logs = vec![
        log("222", 5, "2025-03-04", None),
        log("111", 5, "2025-03-03", None),
        log("222", 5, "2025-03-02", None),
    ];
    let partials = aggregate(&logs);
    assert_eq!(partials.len(), 2);
    assert_eq!(partials[0].isbn, "222");
    assert_eq!(partials[1].isbn, "111");
}

#[test]
fn test_aggregate_captures_finish_date() {
    let logs = vec![
        log("111", 10, "2025-03-08", Some("[KT_EVENT]FINISH")),
        log("111", 90, "2025-03-01", None),
    ];
    let partials = aggregate(&logs);
    assert_eq!(partials[0].finished_date, Some(d("2025-03-08")));
}

#[test]
fn test_normalize_progress_percent() {
    let logs = vec![
        log("111", 35, "2025-03-02", None),
        log("111", 20, "2025-03-01", None),
    ];
    let partials = aggregate(&logs);
    let book = normalize(&partials[0], "The Long Ships", "Frans G. Bengtsson", 100);
    assert_eq!(book.current_page, 55);
    assert_eq!(book.progress_percent, 55);
    assert!(!book.finished);
    assert_eq!(book.section(), ShelfSection::Reading);
}

#[test]
fn test_normalize_clamps_and_finishes_by_page_count() {
    let logs = vec![log("111", 130, "2025-03-02", None)];
    let partials = aggregate(&logs);
    let book = normalize(&partials[0], "T", "A", 100);
    assert_eq!(book.current_page, 100);
    assert_eq!(book.progress_percent, 100);
    assert!(book.finished);
    assert_eq!(book.finished_date, Some(d("2025-03-02")));
}

#[test]
fn test_normalize_drop_precedence() {
    // dropped book stays dropped even when fully read by page count
    let logs = vec![
        log("111", 0, "2025-03-05", Some("[KT_EVENT]DROP")),
        log("111", 100, "2025-03-01", None),
    ];
    let partials = aggregate(&logs);
    let book = normalize(&partials[0], "T", "A", 100);
    assert!(book.dropped);
    assert_eq!(book.section(), ShelfSection::Dropped);

    // but an explicit finish wins over an earlier drop
    let logs = vec![
        log("111", 0, "2025-03-06", Some("[KT_EVENT]FINISH")),
        log("111", 0, "2025-03-05", Some("[KT_EVENT]DROP")),
        log("111", 100, "2025-03-01", None),
    ];
    let partials = aggregate(&logs);
    let book = normalize(&partials[0], "T", "A", 100);
    assert_eq!(book.section(), ShelfSection::Finished);
}

#[test]
fn test_effective_page_count_fallback() {
    assert_eq!(effective_page_count(Some(320), 50), 320);
    assert_eq!(effective_page_count(Some(0), 50), 50);
    assert_eq!(effective_page_count(None, 50), 50);
    assert_eq!(effective_page_count(None, 0), 1);
}

#[test]
fn test_streak_consecutive_days() {
    let today = d("2025-03-10");
    let dates = vec![d("2025-03-08"), d("2025-03-09"), d("2025-03-10")];
    assert_eq!(reading_streak(&dates, today), 3);
}

#[test]
fn test_streak_broken_by_gap() {
    let today = d("2025-03-10");
    let dates = vec![d("2025-03-06"), d("2025-03-07"), d("2025-03-08")];
    assert_eq!(reading_streak(&dates, today), 0);
}

#[test]
fn test_streak_yesterday_still_counts() {
    let today = d("2025-03-10");
    let dates = vec![d("2025-03-09")];
    assert_eq!(reading_streak(&dates, today), 1);
}

#[test]
fn test_streak_deduplicates_dates() {
    let today = d("2025-03-10");
    let dates = vec![d("2025-03-10"), d("2025-03-10"), d("2025-03-09")];
    assert_eq!(reading_streak(&dates, today), 2);
}

#[test]
fn test_streak_empty() {
    assert_eq!(reading_streak(&[], d("2025-03-10")), 0);
}

#[test]
fn test_badge_progress_and_earning() {
    let badges = vec![
        Badge {
            id: 1,
            name: "Page Turner".into(),
            description: "Read 100 pages in total".into(),
            requirement_type: Requirement::TotalPages,
            requirement_value: 100,
        },
        Badge {
            id: 2,
            name: "On Fire".into(),
            description: "Keep a 7 day reading streak".into(),
            requirement_type: Requirement::ReadStreak,
            requirement_value: 7,
        },
        Badge {
            id: 3,
            name: "Finisher".into(),
            description: "Finish your first book".into(),
            requirement_type: Requirement::TotalBooks,
            requirement_value: 1,
        },
    ];
    let metrics = DashboardMetrics {
        total_pages: 250,
        streak_days: 3,
        read_books_count: 0,
    };
    let statuses = BadgeLogic::evaluate(badges, &metrics);
    assert_eq!(statuses.len(), 3);

    assert!(statuses[0].earned);
    assert_eq!(statuses[0].progress_percent, 100); // capped

    assert!(!statuses[1].earned);
    assert_eq!(statuses[1].progress_percent, 43); // round(3/7*100)

    assert!(!statuses[2].earned);
    assert_eq!(statuses[2].progress_percent, 0);
    assert_eq!(statuses[2].current_value, 0);
}

#[test]
fn test_requirement_db_round_trip() {
    for req in [
        Requirement::TotalPages,
        Requirement::ReadStreak,
        Requirement::TotalBooks,
    ] {
        assert_eq!(Requirement::from_db_str(req.to_db_str()), Some(req));
    }
    assert_eq!(Requirement::from_db_str("nonsense"), None);
}
