use crate::errors::{AppError, AppResult};
use crate::export::model::ExportTable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: Color = Color::RGB(0x2F75B5);
const BAND_BG: Color = Color::RGB(0xEAF3FB);

fn cell_format(bg: Option<Color>) -> Format {
    let fmt = Format::new().set_border(FormatBorder::Thin);
    match bg {
        Some(color) => fmt.set_background_color(color),
        None => fmt,
    }
}

/// Export a string table as a styled worksheet: bold header row,
/// alternating row banding, date cells stored as real Excel dates,
/// numeric cells right-aligned, column widths fitted to content.
pub(crate) fn export_xlsx(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let header_fmt = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_BG)
        .set_border(FormatBorder::Thin);

    let mut widths: Vec<usize> = Vec::with_capacity(table.headers.len());
    for (col, title) in table.headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *title, &header_fmt)
            .map_err(xlsx_err)?;
        widths.push(UnicodeWidthStr::width(*title));
    }
    sheet.set_freeze_panes(1, 0).ok();

    for (i, row) in table.rows.iter().enumerate() {
        let bg = if i % 2 == 0 { Some(BAND_BG) } else { None };

        for (col, value) in row.iter().enumerate() {
            write_cell(sheet, (i + 1) as u32, col as u16, value, bg)?;
            widths[col] = widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (col, w) in widths.iter().enumerate() {
        sheet
            .set_column_width(col as u16, *w as f64 + 2.0)
            .map_err(xlsx_err)?;
    }

    let target = path
        .to_str()
        .ok_or_else(|| AppError::Export("invalid path".into()))?;
    workbook.save(target).map_err(xlsx_err)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Dates and numbers are written typed; everything else as text.
fn write_cell(
    sheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: &str,
    bg: Option<Color>,
) -> AppResult<()> {
    if let Ok(date) = ExcelDateTime::parse_from_str(value) {
        let fmt = cell_format(bg).set_num_format("yyyy-mm-dd");
        sheet
            .write_with_format(row, col, &date, &fmt)
            .map_err(xlsx_err)?;
    } else if let Ok(num) = value.parse::<f64>() {
        let fmt = cell_format(bg).set_align(FormatAlign::Right);
        sheet
            .write_with_format(row, col, num, &fmt)
            .map_err(xlsx_err)?;
    } else {
        sheet
            .write_with_format(row, col, value, &cell_format(bg))
            .map_err(xlsx_err)?;
    }
    Ok(())
}

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(e.to_string())
}
