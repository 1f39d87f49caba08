use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::event_tag::EventTag;
use crate::utils::date;

/// Shared handler for the `start`, `drop` and `finish` commands.
/// They only differ in the tag written into the marker note.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (tag, isbn, date_str, note) = match cmd {
        Commands::Start { isbn, date, note } => (EventTag::Start, isbn, date, note),
        Commands::Drop { isbn, date, note } => (EventTag::Drop, isbn, date, note),
        Commands::Finish { isbn, date, note } => (EventTag::Finish, isbn, date, note),
        _ => return Ok(()),
    };

    let d = match date_str {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => date::today(),
    };

    let mut pool = DbPool::new(&cfg.database)?;
    AddLogic::event(&mut pool, tag, isbn, d, note.as_deref())?;

    Ok(())
}
