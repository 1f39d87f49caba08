use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Default badge set, seeded once on an empty `badges` table.
const DEFAULT_BADGES: &[(&str, &str, &str, i64)] = &[
    ("First Steps", "Read 50 pages in total", "total_pages", 50),
    ("Page Turner", "Read 500 pages in total", "total_pages", 500),
    ("Bookworm", "Read 2500 pages in total", "total_pages", 2500),
    ("Warming Up", "Keep a 3-day reading streak", "read_streak", 3),
    ("On Fire", "Keep a 7-day reading streak", "read_streak", 7),
    ("Unstoppable", "Keep a 30-day reading streak", "read_streak", 30),
    ("Finisher", "Finish your first book", "total_books", 1),
    ("Collector", "Finish 5 books", "total_books", 5),
    ("Librarian", "Finish 20 books", "total_books", 20),
];

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Databases created before 0.3 lack the `source` column on read_logs.
fn migrate_add_source_to_read_logs(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "read_logs")? || table_has_column(conn, "read_logs", "source")? {
        return Ok(());
    }

    warning("Adding 'source' column to read_logs table...");
    conn.execute_batch(
        "ALTER TABLE read_logs ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';",
    )?;
    Ok(())
}

/// Databases created before 0.4 lack the badges table entirely.
fn migrate_create_badges(conn: &Connection) -> Result<()> {
    if table_exists(conn, "badges")? {
        return Ok(());
    }

    warning("Creating 'badges' table...");
    conn.execute_batch(
        "
        CREATE TABLE badges (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            name               TEXT NOT NULL UNIQUE,
            description        TEXT NOT NULL DEFAULT '',
            requirement_type   TEXT NOT NULL CHECK (requirement_type IN ('total_pages','read_streak','total_books')),
            requirement_value  INTEGER NOT NULL
        );
        ",
    )?;
    Ok(())
}

fn seed_default_badges(conn: &Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM badges", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }

    let mut stmt = conn.prepare_cached(
        "INSERT INTO badges (name, description, requirement_type, requirement_value)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    for (name, description, req_type, req_value) in DEFAULT_BADGES {
        stmt.execute(rusqlite::params![name, description, req_type, req_value])?;
    }
    Ok(())
}

/// Run all pending schema migrations. Each step is a cheap probe that
/// no-ops when the schema is already current, so this is safe to call
/// on every `init` and from `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    migrate_add_source_to_read_logs(conn)?;
    migrate_create_badges(conn)?;
    seed_default_badges(conn)?;
    Ok(())
}
