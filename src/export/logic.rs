use crate::core::classifier;
use crate::core::shelf::ShelfLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ReadLogExport, ShelfExport, logs_table, shelf_table};
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::event_tag::EventTag;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use rusqlite::{Row, params};

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export read logs (default) or the derived shelf (`--shelf`).
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or one of
    ///   YYYY / YYYY-MM / YYYY-MM-DD / start:end in the same shapes.
    ///   For shelf exports the range filters on last_read_date.
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        shelf: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        let path = path.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        if shelf {
            let rows = load_shelf(pool, date_bounds)?;
            if rows.is_empty() {
                warning("No shelf entries found for selected range.");
                return Ok(());
            }
            match format {
                ExportFormat::Csv => export_csv(&rows, path)?,
                ExportFormat::Json => export_json(&rows, path)?,
                ExportFormat::Xlsx => export_xlsx(&shelf_table(&rows), path)?,
            }
        } else {
            let rows = load_logs(pool, date_bounds)?;
            if rows.is_empty() {
                warning("No read logs found for selected range.");
                return Ok(());
            }
            match format {
                ExportFormat::Csv => export_csv(&rows, path)?,
                ExportFormat::Json => export_json(&rows, path)?,
                ExportFormat::Xlsx => export_xlsx(&logs_table(&rows), path)?,
            }
        }

        Ok(())
    }
}

/// Load raw read logs inside the bounds, oldest first.
fn load_logs(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<ReadLogExport>> {
    let conn = &mut pool.conn;

    let mut rows_out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT id, read_date, isbn, pages_read, note, source
                 FROM read_logs
                 ORDER BY read_date ASC, id ASC",
            )?;

            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                rows_out.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT id, read_date, isbn, pages_read, note, source
                 FROM read_logs
                 WHERE read_date BETWEEN ?1 AND ?2
                 ORDER BY read_date ASC, id ASC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_row)?;
            for r in rows {
                rows_out.push(r?);
            }
        }
    }

    Ok(rows_out)
}

/// Derived shelf, filtered on last_read_date when bounds are given.
fn load_shelf(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<ShelfExport>> {
    let shelf = ShelfLogic::build_shelf(pool)?;

    Ok(shelf
        .iter()
        .filter(|b| match bounds {
            Some((start, end)) => b.last_read_date >= start && b.last_read_date <= end,
            None => true,
        })
        .map(ShelfExport::from)
        .collect())
}

/// Mapping DB → ReadLogExport. The note is classified here so the
/// export carries a readable event column.
fn map_row(row: &Row<'_>) -> rusqlite::Result<ReadLogExport> {
    let note: String = row.get::<_, Option<String>>(4)?.unwrap_or_default();
    let event = classifier::classify(Some(note.as_str()))
        .unwrap_or(EventTag::Read)
        .as_str()
        .to_string();

    Ok(ReadLogExport {
        id: row.get(0)?,
        read_date: row.get(1)?,
        isbn: row.get(2)?,
        pages_read: row.get(3)?,
        event,
        note,
        source: row.get(5)?,
    })
}
