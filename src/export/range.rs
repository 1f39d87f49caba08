use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

fn bad(msg: &str) -> AppError {
    AppError::Export(msg.to_string())
}

/// Parse `--range` into inclusive date bounds.
///
/// A single period (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) spans itself; a
/// `start:end` pair takes the lower bound of `start` and the upper
/// bound of `end`. Both sides of a pair must use the same shape.
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(bad("start and end must have same format"));
            }
            let (lo, _) = period_bounds(start)?;
            let (_, hi) = period_bounds(end)?;
            Ok((lo, hi))
        }
        None => period_bounds(r.trim()),
    }
}

/// First and last day covered by one period string.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let year: i32 = p.parse().map_err(|_| bad("invalid year"))?;
            let lo = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| bad("invalid year"))?;
            let hi = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| bad("invalid year"))?;
            Ok((lo, hi))
        }
        7 => {
            let year: i32 = p[0..4].parse().map_err(|_| bad("invalid month"))?;
            let month: u32 = p[5..7].parse().map_err(|_| bad("invalid month"))?;
            month_bounds(year, month).ok_or_else(|| bad("invalid month"))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| bad("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(bad("unsupported --range format")),
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_month.pred_opt()?))
}
