use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::classifier;
use crate::db::pool::DbPool;
use crate::db::queries::load_logs_by_date;
use crate::errors::AppResult;
use crate::models::event_tag::EventTag;
use crate::models::read_log::ReadLogEntry;
use crate::utils::date;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let dates = if *now {
            vec![date::today()]
        } else {
            resolve_period(period)?
        };

        let mut any = false;
        for d in dates {
            let logs = load_logs_by_date(&mut pool, &d)?;
            if logs.is_empty() {
                continue;
            }
            any = true;
            print_day(&d, &logs);
        }

        if !any {
            println!("No read logs for the selected period.");
        }
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Vec<NaiveDate>> {
    use crate::errors::AppError;

    if let Some(p) = period {
        if p.contains(':') {
            let parts: Vec<&str> = p.split(':').collect();
            if parts.len() == 2 {
                return date::generate_range(parts[0], parts[1]).map_err(AppError::InvalidDate);
            }
        }

        return date::generate_from_period(p).map_err(AppError::InvalidDate);
    }

    date::current_month_dates().map_err(AppError::InvalidDate)
}

fn print_day(d: &NaiveDate, logs: &[ReadLogEntry]) {
    let total: i64 = logs.iter().map(|l| l.pages_read.max(0)).sum();
    println!("\n{}  ({} pages)", d, total);

    for log in logs {
        let tag = classifier::classify(log.note.as_deref()).unwrap_or(EventTag::Read);
        println!(
            "  #{:<5} {:<15} {:>5} pages  [{}]",
            log.id,
            if log.isbn.is_empty() { "--" } else { &log.isbn },
            log.pages_read,
            tag.as_str()
        );
    }
}
