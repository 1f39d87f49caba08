use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one row to the internal `log` table. Every mutating command
/// records what it did here; `log --print` renders the table.
pub fn rlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![
        Local::now().to_rfc3339(),
        operation,
        target,
        message
    ])?;
    Ok(())
}
