use chrono::{Datelike, NaiveDate, Utc};
use std::iter::successors;

/// Today's date in UTC. The streak math works on whole calendar days
/// in one fixed reference calendar; taking the local date here would
/// reintroduce the DST / day-boundary off-by-one this avoids.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Expand a period string (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`) into the
/// list of days it covers.
pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    if let Some(d) = parse_date(p) {
        return Ok(vec![d]);
    }

    if let Some(first) = parse_date(&format!("{p}-01")) {
        return Ok(all_days_of_month(first.year(), first.month()));
    }

    if let Ok(year) = p.parse::<i32>() {
        return Ok(all_days_of_year(year));
    }

    Err(format!("Invalid period: {}", p))
}

/// Every day from the first day of `start` through the last day of
/// `end`, both given as period strings.
pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let first = *generate_from_period(start)?
        .first()
        .ok_or_else(|| format!("Invalid period: {}", start))?;
    let last = *generate_from_period(end)?
        .last()
        .ok_or_else(|| format!("Invalid period: {}", end))?;

    Ok(days_from(first).take_while(|d| *d <= last).collect())
}

pub fn current_month_dates() -> Result<Vec<NaiveDate>, String> {
    let now = today();
    Ok(all_days_of_month(now.year(), now.month()))
}

fn days_from(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    successors(Some(first), |d| d.succ_opt())
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    days_from(first)
        .take_while(|d| d.month() == month)
        .collect()
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return Vec::new();
    };
    days_from(first).take_while(|d| d.year() == year).collect()
}
