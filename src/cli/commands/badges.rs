use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::badges::BadgeLogic;
use crate::core::shelf::ShelfLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_badges;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::date;
use crate::utils::formatting::progress_bar;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Badges = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let metrics = ShelfLogic::dashboard(&mut pool, date::today())?;
        let defs = load_badges(&mut pool)?;
        let statuses = BadgeLogic::evaluate(defs, &metrics);

        header("Badges");

        if statuses.is_empty() {
            println!("No badges defined. Run `db --migrate` to seed the default set.");
            return Ok(());
        }

        for s in statuses {
            if s.earned {
                println!(
                    "  {}★ {:<14}{} {}",
                    GREEN, s.badge.name, RESET, s.badge.description
                );
            } else {
                println!(
                    "  {}☆ {:<14}{} {}  {} ({}/{})",
                    GREY,
                    s.badge.name,
                    RESET,
                    s.badge.description,
                    progress_bar(s.progress_percent, 10),
                    s.current_value,
                    s.badge.requirement_value
                );
            }
        }
        println!();
    }
    Ok(())
}
