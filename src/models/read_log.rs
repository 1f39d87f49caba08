use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReadLogEntry {
    pub id: i64,
    pub isbn: String,           // ⇔ read_logs.isbn (TEXT, may be empty)
    pub pages_read: i64,        // ⇔ read_logs.pages_read (INT, default 0)
    pub read_date: NaiveDate,   // ⇔ read_logs.read_date (TEXT "YYYY-MM-DD")
    pub note: Option<String>,   // ⇔ read_logs.note (TEXT, may carry event marker)
    pub source: String,         // ⇔ read_logs.source (TEXT, default 'cli')
    pub created_at: String,     // ⇔ read_logs.created_at (TEXT, ISO8601)
}

impl ReadLogEntry {
    /// High-level constructor for entries created from the CLI.
    /// - Sets `source = "cli"`
    /// - Sets `created_at = now() in ISO8601`
    pub fn new(isbn: &str, pages_read: i64, read_date: NaiveDate, note: Option<String>) -> Self {
        Self {
            id: 0,
            isbn: isbn.to_string(),
            pages_read,
            read_date,
            note,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.read_date.format("%Y-%m-%d").to_string()
    }
}
