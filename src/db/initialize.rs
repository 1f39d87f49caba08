use crate::db::migrate::run_pending_migrations;
use rusqlite::{Connection, Result};

/// Initialize the database schema.
/// Creates the reading tables plus the internal `log` table, then runs
/// any pending migrations (including badge seeding).
pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS read_logs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            isbn        TEXT NOT NULL DEFAULT '',   -- edition identifier; rows with '' are ignored by aggregation
            pages_read  INTEGER NOT NULL DEFAULT 0,
            read_date   TEXT NOT NULL,              -- YYYY-MM-DD
            note        TEXT DEFAULT '',            -- free text, may carry an event marker
            source      TEXT NOT NULL DEFAULT 'cli',
            created_at  TEXT NOT NULL               -- ISO 8601 timestamp
        );

        CREATE TABLE IF NOT EXISTS books (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            title   TEXT NOT NULL,
            author  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS editions (
            isbn        TEXT PRIMARY KEY,
            book_id     INTEGER NOT NULL REFERENCES books(id),
            page_count  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS badges (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            name               TEXT NOT NULL UNIQUE,
            description        TEXT NOT NULL DEFAULT '',
            requirement_type   TEXT NOT NULL CHECK (requirement_type IN ('total_pages','read_streak','total_books')),
            requirement_value  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_read_logs_date ON read_logs(read_date);
        CREATE INDEX IF NOT EXISTS idx_read_logs_isbn ON read_logs(isbn);
        ",
    )?;
    run_pending_migrations(conn)?;
    Ok(())
}
