use serde::Serialize;

/// What a badge measures. Values map to the dashboard metrics.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Requirement {
    TotalPages,
    ReadStreak,
    TotalBooks,
}

impl Requirement {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Requirement::TotalPages => "total_pages",
            Requirement::ReadStreak => "read_streak",
            Requirement::TotalBooks => "total_books",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "total_pages" => Some(Requirement::TotalPages),
            "read_streak" => Some(Requirement::ReadStreak),
            "total_books" => Some(Requirement::TotalBooks),
            _ => None,
        }
    }
}

/// Badge definition row.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub requirement_type: Requirement,
    pub requirement_value: i64,
}

/// A badge evaluated against the current metrics.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeStatus {
    pub badge: Badge,
    pub current_value: i64,
    pub progress_percent: i64,
    pub earned: bool,
}
