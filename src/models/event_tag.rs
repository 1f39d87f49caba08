use serde::Serialize;

/// Semantic intent of a read-log entry.
/// `Read` is the default for plain page logging; the other three are
/// produced by marker notes (see `core::classifier`).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventTag {
    Start,
    Read,
    Drop,
    Finish,
}

impl EventTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventTag::Start => "start",
            EventTag::Read => "read",
            EventTag::Drop => "drop",
            EventTag::Finish => "finish",
        }
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, EventTag::Drop)
    }

    pub fn is_finish(&self) -> bool {
        matches!(self, EventTag::Finish)
    }
}
