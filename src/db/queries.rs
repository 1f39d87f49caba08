use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::badge::{Badge, Requirement};
use crate::models::edition::EditionMeta;
use crate::models::read_log::ReadLogEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_log_row(row: &Row) -> Result<ReadLogEntry> {
    let date_str: String = row.get("read_date")?;

    let read_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let note: Option<String> = row.get("note")?;

    Ok(ReadLogEntry {
        id: row.get("id")?,
        isbn: row.get("isbn")?,
        pages_read: row.get("pages_read")?,
        read_date,
        note: note.filter(|n| !n.is_empty()),
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

/// All read logs, most recent day first; same-day rows keep insertion
/// order. The aggregator depends on exactly this ordering.
pub fn load_all_logs_desc(pool: &mut DbPool) -> AppResult<Vec<ReadLogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM read_logs
         ORDER BY read_date DESC, id ASC",
    )?;

    let rows = stmt.query_map([], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_logs_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<ReadLogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM read_logs
         WHERE read_date = ?1
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_log_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_read_log(conn: &Connection, entry: &ReadLogEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO read_logs (isbn, pages_read, read_date, note, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.isbn,
            entry.pages_read,
            entry.date_str(),
            entry.note.as_deref().unwrap_or(""),
            entry.source,
            entry.created_at,
        ],
    )?;
    Ok(())
}

pub fn delete_log_by_id(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM read_logs WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn delete_logs_for_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<usize> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let n = pool
        .conn
        .execute("DELETE FROM read_logs WHERE read_date = ?1", [date_str])?;
    Ok(n)
}

/// Positive pages accumulated so far for one edition. Used by the
/// finish command to compute the remaining pages.
pub fn accumulated_pages(conn: &Connection, isbn: &str) -> AppResult<i64> {
    let total: i64 = conn.query_row(
        "SELECT COALESCE(SUM(CASE WHEN pages_read > 0 THEN pages_read ELSE 0 END), 0)
         FROM read_logs WHERE isbn = ?1",
        [isbn],
        |row| row.get(0),
    )?;
    Ok(total)
}

/// Distinct dates with at least one positive-page log. Feeds the
/// streak calculator; marker-only rows never extend a streak.
pub fn distinct_reading_dates(pool: &mut DbPool) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = pool.conn.prepare(
        "SELECT DISTINCT read_date FROM read_logs
         WHERE pages_read > 0
         ORDER BY read_date ASC",
    )?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let s = r?;
        let d = NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(s.clone()))?;
        out.push(d);
    }
    Ok(out)
}

// ---------------------------
// Books / editions metadata
// ---------------------------

pub fn find_edition_meta(conn: &Connection, isbn: &str) -> AppResult<Option<EditionMeta>> {
    let meta = conn
        .query_row(
            "SELECT e.isbn, b.title, b.author, e.page_count
             FROM editions e
             JOIN books b ON b.id = e.book_id
             WHERE e.isbn = ?1",
            [isbn],
            |row| {
                Ok(EditionMeta {
                    isbn: row.get(0)?,
                    title: row.get(1)?,
                    author: row.get(2)?,
                    page_count: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(meta)
}

pub fn list_editions(pool: &mut DbPool) -> AppResult<Vec<EditionMeta>> {
    let mut stmt = pool.conn.prepare(
        "SELECT e.isbn, b.title, b.author, e.page_count
         FROM editions e
         JOIN books b ON b.id = e.book_id
         ORDER BY b.title ASC, e.isbn ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(EditionMeta {
            isbn: row.get(0)?,
            title: row.get(1)?,
            author: row.get(2)?,
            page_count: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Register an edition, reusing the book row when the same title/author
/// pair is already known (multiple printings of one work).
pub fn insert_book_edition(
    conn: &Connection,
    isbn: &str,
    title: &str,
    author: &str,
    page_count: i64,
) -> AppResult<()> {
    if find_edition_meta(conn, isbn)?.is_some() {
        return Err(AppError::InvalidIsbn(format!(
            "edition '{}' is already registered",
            isbn
        )));
    }

    let existing: Option<i64> = conn
        .query_row(
            "SELECT id FROM books WHERE title = ?1 AND author = ?2",
            params![title, author],
            |row| row.get(0),
        )
        .optional()?;

    let book_id = match existing {
        Some(id) => id,
        None => {
            conn.execute(
                "INSERT INTO books (title, author) VALUES (?1, ?2)",
                params![title, author],
            )?;
            conn.last_insert_rowid()
        }
    };

    conn.execute(
        "INSERT INTO editions (isbn, book_id, page_count) VALUES (?1, ?2, ?3)",
        params![isbn, book_id, page_count],
    )?;
    Ok(())
}

// ---------------------------
// Badges
// ---------------------------

pub fn load_badges(pool: &mut DbPool) -> AppResult<Vec<Badge>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, name, description, requirement_type, requirement_value
         FROM badges
         ORDER BY requirement_type ASC, requirement_value ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let req_str: String = row.get(3)?;
        let requirement_type = Requirement::from_db_str(&req_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(AppError::Other(format!(
                    "Invalid requirement type: {}",
                    req_str
                ))),
            )
        })?;

        Ok(Badge {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            requirement_type,
            requirement_value: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
