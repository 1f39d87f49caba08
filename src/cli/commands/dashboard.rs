use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::shelf::ShelfLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, YELLOW};
use crate::utils::date;
use crate::utils::formatting::progress_bar;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let metrics = ShelfLogic::dashboard(&mut pool, date::today())?;
        let active = ShelfLogic::active_book(&mut pool)?;

        header("Dashboard");

        match active {
            Some(book) => {
                println!("📖 Now reading: {} — {}", book.title, book.author);
                println!(
                    "   {}  page {} of {}",
                    progress_bar(book.progress_percent(), 24),
                    book.current_page,
                    book.page_count
                );
            }
            None => {
                println!("{}No active book. Start one with `start <isbn>`.{}", GREY, RESET);
            }
        }

        println!();
        println!(
            "{}🔥 Streak:{} {} day(s)   {}📄 Pages:{} {}   {}📚 Finished:{} {}",
            YELLOW,
            RESET,
            metrics.streak_days,
            CYAN,
            RESET,
            metrics.total_pages,
            CYAN,
            RESET,
            metrics.read_books_count
        );
        println!("   Daily goal: {} pages", cfg.daily_page_goal);
        println!();
    }
    Ok(())
}
