use crate::core::aggregate::aggregate;
use crate::core::normalize::{effective_page_count, normalize};
use crate::core::streak::reading_streak;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::progress::{ActiveBook, BookProgress, DashboardMetrics};
use chrono::NaiveDate;

/// Placeholders for editions logged before their metadata was registered.
pub const UNKNOWN_TITLE: &str = "Untitled book";
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// High-level derivation of shelf, dashboard and active-book views.
/// Loads rows through the db layer and feeds them to the pure pipeline
/// (aggregate → metadata lookup → normalize).
pub struct ShelfLogic;

impl ShelfLogic {
    /// One progress record per edition ever logged, most recently read
    /// first.
    pub fn build_shelf(pool: &mut DbPool) -> AppResult<Vec<BookProgress>> {
        let logs = queries::load_all_logs_desc(pool)?;
        let partials = aggregate(&logs);

        let mut shelf = Vec::with_capacity(partials.len());
        for partial in &partials {
            let meta = queries::find_edition_meta(&pool.conn, &partial.isbn)?;

            let (title, author, recorded) = match &meta {
                Some(m) => (m.title.as_str(), m.author.as_str(), Some(m.page_count)),
                None => (UNKNOWN_TITLE, UNKNOWN_AUTHOR, None),
            };

            let page_count = effective_page_count(recorded, partial.accumulated_pages);
            shelf.push(normalize(partial, title, author, page_count));
        }

        shelf.sort_by(|a, b| b.last_read_date.cmp(&a.last_read_date));
        Ok(shelf)
    }

    /// Headline metrics: total positive pages, current streak, number
    /// of finished books. Only rows with pages_read > 0 feed the page
    /// total and the streak, so marker-only rows don't count.
    pub fn dashboard(pool: &mut DbPool, today: NaiveDate) -> AppResult<DashboardMetrics> {
        let shelf = Self::build_shelf(pool)?;
        let read_books_count = shelf.iter().filter(|b| b.finished).count() as i64;

        let logs = queries::load_all_logs_desc(pool)?;
        let total_pages: i64 = logs
            .iter()
            .filter(|l| !l.isbn.is_empty() && l.pages_read > 0)
            .map(|l| l.pages_read)
            .sum();

        let dates = queries::distinct_reading_dates(pool)?;
        let streak_days = reading_streak(&dates, today);

        Ok(DashboardMetrics {
            total_pages,
            streak_days,
            read_books_count,
        })
    }

    /// The edition to feature on the dashboard: the most recently read
    /// one that is neither dropped nor finished. When everything is
    /// closed, fall back to the most recent non-dropped edition.
    /// Editions without registered metadata are never featured.
    pub fn active_book(pool: &mut DbPool) -> AppResult<Option<ActiveBook>> {
        let logs = queries::load_all_logs_desc(pool)?;
        let partials = aggregate(&logs);

        let pick = partials
            .iter()
            .find(|p| !p.latest_event.is_drop() && !p.latest_event.is_finish())
            .or_else(|| partials.iter().find(|p| !p.latest_event.is_drop()));

        let Some(partial) = pick else {
            return Ok(None);
        };

        let Some(meta) = queries::find_edition_meta(&pool.conn, &partial.isbn)? else {
            return Ok(None);
        };

        let page_count = effective_page_count(Some(meta.page_count), partial.accumulated_pages);

        Ok(Some(ActiveBook {
            isbn: partial.isbn.clone(),
            title: meta.title,
            author: meta.author,
            page_count,
            current_page: partial.accumulated_pages.clamp(0, page_count),
        }))
    }
}
