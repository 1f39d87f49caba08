use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

fn export_err(kind: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Export(format!("{kind} error: {e}"))
}

/// Pretty-printed JSON array of the rows.
pub(crate) fn export_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let body = serde_json::to_string_pretty(rows).map_err(|e| export_err("JSON", e))?;
    fs::write(path, body)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row derived from the serde field names.
pub(crate) fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut writer = csv::Writer::from_path(path).map_err(|e| export_err("CSV", e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| export_err("CSV", e))?;
    }
    writer.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
