use crate::models::progress::{BookProgress, PartialProgress};

/// Effective page count for an edition: the recorded count when known
/// and positive, otherwise max(accumulated pages, 1) so the percent
/// math never divides by zero.
pub fn effective_page_count(recorded: Option<i64>, accumulated_pages: i64) -> i64 {
    match recorded {
        Some(n) if n > 0 => n,
        _ => accumulated_pages.max(1),
    }
}

/// Derive the final progress record from an aggregated partial.
///
/// `finished` is an OR: an explicit finish event is enough, and so is
/// reaching the page count without one. `dropped` reflects the latest
/// event only, so a dropped book that crossed its page count carries
/// both flags — display precedence is resolved by
/// `BookProgress::section()`, where only an explicit finish event
/// outranks the drop.
pub fn normalize(
    partial: &PartialProgress,
    title: &str,
    author: &str,
    page_count: i64,
) -> BookProgress {
    let page_count = page_count.max(1);
    let current_page = partial.accumulated_pages.clamp(0, page_count);
    let progress_percent = ((current_page as f64 / page_count as f64) * 100.0).round() as i64;

    let finished_by_page = current_page >= page_count;
    let finished = partial.latest_event.is_finish() || finished_by_page;
    let dropped = partial.latest_event.is_drop();

    let finished_date = partial.finished_date.or(if finished {
        Some(partial.last_read_date)
    } else {
        None
    });

    BookProgress {
        isbn: partial.isbn.clone(),
        title: title.to_string(),
        author: author.to_string(),
        page_count,
        current_page,
        progress_percent,
        last_read_date: partial.last_read_date,
        latest_event: partial.latest_event,
        finished,
        dropped,
        finished_date,
    }
}
