use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
}

/// Report for `db --info`: file size, row counts, date coverage and the
/// average reading pace over the covered span.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    let size_mb = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0) as f64 / (1024.0 * 1024.0);

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, size_mb);

    for table in ["read_logs", "editions", "badges"] {
        let n = count(pool, table)?;
        let label = match table {
            "read_logs" => "Read logs",
            "editions" => "Editions",
            _ => "Badges",
        };
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, n, RESET);
    }

    let span: Option<(String, String)> = pool
        .conn
        .query_row(
            "SELECT MIN(read_date), MAX(read_date) FROM read_logs WHERE read_date IS NOT NULL",
            [],
            |row| Ok((row.get::<_, Option<String>>(0)?, row.get::<_, Option<String>>(1)?)),
        )
        .optional()?
        .and_then(|(lo, hi)| lo.zip(hi));

    match &span {
        Some((first, last)) => {
            println!("{}• Date range:{} {} → {}", CYAN, RESET, first, last);
        }
        None => {
            println!("{}• Date range:{} {}--{}", CYAN, RESET, GREY, RESET);
        }
    }

    if let Some((first, last)) = span {
        let d1 = parse_date(&first)?;
        let d2 = parse_date(&last)?;
        let days = (d2 - d1).num_days().max(1);

        let pages: i64 = pool.conn.query_row(
            "SELECT COALESCE(SUM(CASE WHEN pages_read > 0 THEN pages_read ELSE 0 END), 0)
             FROM read_logs",
            [],
            |row| row.get(0),
        )?;

        println!(
            "{}• Average pages/day:{} {:.2}",
            CYAN,
            RESET,
            pages as f64 / days as f64
        );
    }

    println!();
    Ok(())
}

fn parse_date(date_str: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}