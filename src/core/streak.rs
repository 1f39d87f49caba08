use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Current consecutive-day reading streak.
///
/// Rules (the one place subtle bugs can appear, so spelled out):
/// - dates are whole calendar days; callers must derive `today` from a
///   fixed reference calendar (`utils::date::today()` uses UTC) so a
///   local-timezone day boundary can never skew the count;
/// - the streak is "current" only: the most recent reading day must be
///   today or yesterday, otherwise the streak is 0;
/// - from there, each strictly preceding day extends the count by 1
///   and the first gap stops the walk.
pub fn reading_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    // Dedup + sort ascending, then walk from the most recent backwards.
    let unique: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let mut desc = unique.into_iter().rev();

    let latest = match desc.next() {
        Some(d) => d,
        None => return 0,
    };

    let yesterday = match today.pred_opt() {
        Some(d) => d,
        None => return 0,
    };

    if latest != today && latest != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut prev = latest;

    for d in desc {
        match prev.pred_opt() {
            Some(expected) if d == expected => {
                streak += 1;
                prev = d;
            }
            _ => break,
        }
    }

    streak
}
