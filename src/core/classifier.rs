use crate::models::event_tag::EventTag;

/// Marker substrings embedded in the free-text note of a read log.
/// These are a data-compatibility contract (exports from older
/// installations carry them), so they are matched by containment, not
/// by exact equality.
pub const MARKER_START: &str = "[KT_EVENT]START";
pub const MARKER_DROP: &str = "[KT_EVENT]DROP";
pub const MARKER_FINISH: &str = "[KT_EVENT]FINISH";

/// Classify a note into an event tag.
///
/// Checked in order start, drop, finish; the first marker found wins
/// even if a note pathologically contains more than one. Returns None
/// when no marker is present.
pub fn classify(note: Option<&str>) -> Option<EventTag> {
    let note = note?;
    if note.contains(MARKER_START) {
        return Some(EventTag::Start);
    }
    if note.contains(MARKER_DROP) {
        return Some(EventTag::Drop);
    }
    if note.contains(MARKER_FINISH) {
        return Some(EventTag::Finish);
    }
    None
}

/// Build the note text for an event command, with optional trailing
/// free text after the marker.
pub fn event_note(tag: EventTag, extra: Option<&str>) -> String {
    let marker = match tag {
        EventTag::Start => MARKER_START,
        EventTag::Drop => MARKER_DROP,
        EventTag::Finish => MARKER_FINISH,
        EventTag::Read => return extra.unwrap_or_default().to_string(),
    };

    match extra {
        Some(text) if !text.trim().is_empty() => format!("{} {}", marker, text.trim()),
        _ => marker.to_string(),
    }
}
