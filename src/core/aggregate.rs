use crate::core::classifier;
use crate::models::event_tag::EventTag;
use crate::models::progress::PartialProgress;
use crate::models::read_log::ReadLogEntry;
use std::collections::HashMap;

/// Group read logs by edition (ISBN) into partial progress records.
///
/// Input MUST already be sorted by read_date descending, ties in fetch
/// order — the queries layer guarantees `read_date DESC, id ASC`. The
/// function trusts that order and does not re-sort: the first log seen
/// for an ISBN is its most recent one, and that is the only log whose
/// note decides `latest_event`.
///
/// Output preserves first-seen (i.e. most-recently-read) order.
pub fn aggregate(logs: &[ReadLogEntry]) -> Vec<PartialProgress> {
    let mut out: Vec<PartialProgress> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for log in logs {
        // Rows without an edition identifier are skipped entirely.
        if log.isbn.is_empty() {
            continue;
        }

        let idx = match index.get(&log.isbn) {
            Some(&i) => i,
            None => {
                let tag = classifier::classify(log.note.as_deref()).unwrap_or(EventTag::Read);

                out.push(PartialProgress {
                    isbn: log.isbn.clone(),
                    accumulated_pages: 0,
                    last_read_date: log.read_date,
                    latest_event: tag,
                    // An explicit finish event carries its own date.
                    finished_date: if tag.is_finish() {
                        Some(log.read_date)
                    } else {
                        None
                    },
                });

                index.insert(log.isbn.clone(), out.len() - 1);
                out.len() - 1
            }
        };

        let entry = &mut out[idx];
        entry.accumulated_pages += log.pages_read.max(0);
        if log.read_date > entry.last_read_date {
            entry.last_read_date = log.read_date;
        }
    }

    out
}
