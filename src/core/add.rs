use crate::core::classifier::event_note;
use crate::core::normalize::effective_page_count;
use crate::db::log::rlog;
use crate::db::pool::DbPool;
use crate::db::queries::{accumulated_pages, find_edition_meta, insert_read_log};
use crate::errors::{AppError, AppResult};
use crate::models::event_tag::EventTag;
use crate::models::read_log::ReadLogEntry;
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;

/// High-level business logic for `add` and the event commands.
pub struct AddLogic;

impl AddLogic {
    /// Record pages read on a date. The edition does not have to be
    /// registered; unknown editions still aggregate, they just render
    /// with placeholder metadata until `book add` fills it in.
    pub fn log_pages(
        pool: &mut DbPool,
        isbn: &str,
        pages: i64,
        date: NaiveDate,
        note: Option<String>,
    ) -> AppResult<()> {
        if isbn.trim().is_empty() {
            return Err(AppError::InvalidIsbn("empty ISBN".into()));
        }
        if pages < 0 {
            return Err(AppError::InvalidPageCount(pages.to_string()));
        }

        if find_edition_meta(&pool.conn, isbn)?.is_none() {
            warning(format!(
                "Edition '{}' is not registered; run `book add` to attach title and page count.",
                isbn
            ));
        }

        let entry = ReadLogEntry::new(isbn, pages, date, note);
        insert_read_log(&pool.conn, &entry)?;

        rlog(
            &pool.conn,
            "add",
            isbn,
            &format!("Logged {} pages on {}", pages, entry.date_str()),
        )?;

        success(format!("Logged {} pages of '{}' on {}.", pages, isbn, date));
        Ok(())
    }

    /// Record a start/drop/finish event as a marker-note log row.
    ///
    /// Start and drop rows carry zero pages. A finish row carries the
    /// remaining pages so the aggregate lands exactly on the page
    /// count, matching what the reader actually did.
    pub fn event(
        pool: &mut DbPool,
        tag: EventTag,
        isbn: &str,
        date: NaiveDate,
        extra: Option<&str>,
    ) -> AppResult<()> {
        if isbn.trim().is_empty() {
            return Err(AppError::InvalidIsbn("empty ISBN".into()));
        }

        let pages = match tag {
            EventTag::Finish => {
                let done = accumulated_pages(&pool.conn, isbn)?;
                let recorded = find_edition_meta(&pool.conn, isbn)?.map(|m| m.page_count);
                let page_count = effective_page_count(recorded, done);
                (page_count - done).max(0)
            }
            _ => 0,
        };

        let entry = ReadLogEntry::new(isbn, pages, date, Some(event_note(tag, extra)));
        insert_read_log(&pool.conn, &entry)?;

        rlog(
            &pool.conn,
            tag.as_str(),
            isbn,
            &format!("Marked '{}' as {} on {}", isbn, tag.as_str(), date),
        )?;

        match tag {
            EventTag::Start => success(format!("Started reading '{}'.", isbn)),
            EventTag::Drop => success(format!("Dropped '{}'.", isbn)),
            EventTag::Finish => success(format!(
                "Finished '{}' on {} ({} closing pages logged).",
                isbn, date, pages
            )),
            EventTag::Read => {}
        }

        Ok(())
    }
}
