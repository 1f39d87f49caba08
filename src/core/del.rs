use crate::db::log::rlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_log_by_id, delete_logs_for_date};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete a single log row by id, or every row for a date.
    pub fn apply(pool: &mut DbPool, date: NaiveDate, id: Option<i64>) -> AppResult<usize> {
        let deleted = match id {
            Some(log_id) => {
                let n = delete_log_by_id(pool, log_id)?;
                if n == 0 {
                    return Err(AppError::InvalidLogId(log_id));
                }
                n
            }
            None => {
                let n = delete_logs_for_date(pool, &date)?;
                if n == 0 {
                    return Err(AppError::NoLogsForDate(date.to_string()));
                }
                n
            }
        };

        rlog(
            &pool.conn,
            "del",
            &date.to_string(),
            &format!("Deleted {} read log(s)", deleted),
        )?;

        Ok(deleted)
    }
}
