use crate::models::event_tag::EventTag;
use chrono::NaiveDate;
use serde::Serialize;

/// Per-edition accumulator produced by the aggregator. Title, author and
/// page count are filled in later from the editions/books metadata.
#[derive(Debug, Clone)]
pub struct PartialProgress {
    pub isbn: String,
    pub accumulated_pages: i64,
    pub last_read_date: NaiveDate,
    pub latest_event: EventTag,
    pub finished_date: Option<NaiveDate>,
}

/// Fully derived progress record for one edition.
#[derive(Debug, Clone, Serialize)]
pub struct BookProgress {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub page_count: i64,
    pub current_page: i64,
    pub progress_percent: i64,
    pub last_read_date: NaiveDate,
    pub latest_event: EventTag,
    pub finished: bool,
    pub dropped: bool,
    pub finished_date: Option<NaiveDate>,
}

/// Display section of a shelf entry. Both `finished` and `dropped` can be
/// true on the raw record; this resolves the precedence for rendering:
/// an explicit finish event wins over a drop, but merely crossing the
/// page count does not un-drop a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShelfSection {
    Reading,
    Finished,
    Dropped,
}

impl BookProgress {
    pub fn section(&self) -> ShelfSection {
        if self.dropped && !self.latest_event.is_finish() {
            ShelfSection::Dropped
        } else if self.finished {
            ShelfSection::Finished
        } else {
            ShelfSection::Reading
        }
    }
}

/// Headline numbers for the dashboard view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardMetrics {
    pub total_pages: i64,
    pub streak_days: u32,
    pub read_books_count: i64,
}

/// The book currently being read, shown front and center on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub page_count: i64,
    pub current_page: i64,
}

impl ActiveBook {
    pub fn progress_percent(&self) -> i64 {
        let count = self.page_count.max(1);
        let page = self.current_page.clamp(0, count);
        ((page as f64 / count as f64) * 100.0).round() as i64
    }
}
