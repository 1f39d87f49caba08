use crate::models::progress::BookProgress;
use serde::Serialize;

/// Flat row for exporting raw read logs.
#[derive(Serialize, Clone, Debug)]
pub struct ReadLogExport {
    pub id: i64,
    pub read_date: String,
    pub isbn: String,
    pub pages_read: i64,
    pub event: String, // classified tag, so spreadsheets don't need the marker rules
    pub note: String,
    pub source: String,
}

/// Flat row for exporting the derived shelf.
#[derive(Serialize, Clone, Debug)]
pub struct ShelfExport {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub page_count: i64,
    pub current_page: i64,
    pub progress_percent: i64,
    pub last_read_date: String,
    pub latest_event: String,
    pub finished: bool,
    pub dropped: bool,
    pub finished_date: String,
}

impl From<&BookProgress> for ShelfExport {
    fn from(b: &BookProgress) -> Self {
        Self {
            isbn: b.isbn.clone(),
            title: b.title.clone(),
            author: b.author.clone(),
            page_count: b.page_count,
            current_page: b.current_page,
            progress_percent: b.progress_percent,
            last_read_date: b.last_read_date.format("%Y-%m-%d").to_string(),
            latest_event: b.latest_event.as_str().to_string(),
            finished: b.finished,
            dropped: b.dropped,
            finished_date: b
                .finished_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Generic string table used by the XLSX backend.
pub(crate) struct ExportTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub(crate) fn logs_table(rows: &[ReadLogExport]) -> ExportTable {
    ExportTable {
        headers: vec!["id", "read_date", "isbn", "pages_read", "event", "note", "source"],
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.read_date.clone(),
                    r.isbn.clone(),
                    r.pages_read.to_string(),
                    r.event.clone(),
                    r.note.clone(),
                    r.source.clone(),
                ]
            })
            .collect(),
    }
}

pub(crate) fn shelf_table(rows: &[ShelfExport]) -> ExportTable {
    ExportTable {
        headers: vec![
            "isbn",
            "title",
            "author",
            "page_count",
            "current_page",
            "progress_percent",
            "last_read_date",
            "latest_event",
            "finished",
            "dropped",
            "finished_date",
        ],
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.isbn.clone(),
                    r.title.clone(),
                    r.author.clone(),
                    r.page_count.to_string(),
                    r.current_page.to_string(),
                    r.progress_percent.to_string(),
                    r.last_read_date.clone(),
                    r.latest_event.clone(),
                    r.finished.to_string(),
                    r.dropped.to_string(),
                    r.finished_date.clone(),
                ]
            })
            .collect(),
    }
}
