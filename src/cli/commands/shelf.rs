use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::shelf::ShelfLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::progress::{BookProgress, ShelfSection};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, color_for_percent};
use crate::utils::formatting::{progress_bar, truncate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shelf = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let shelf = ShelfLogic::build_shelf(&mut pool)?;

        if shelf.is_empty() {
            println!("Your shelf is empty. Log some pages with `add` first.");
            return Ok(());
        }

        let reading: Vec<&BookProgress> = shelf
            .iter()
            .filter(|b| b.section() == ShelfSection::Reading)
            .collect();
        let finished: Vec<&BookProgress> = shelf
            .iter()
            .filter(|b| b.section() == ShelfSection::Finished)
            .collect();
        let dropped: Vec<&BookProgress> = shelf
            .iter()
            .filter(|b| b.section() == ShelfSection::Dropped)
            .collect();

        header("Reading");
        if reading.is_empty() {
            println!("{}(nothing in progress){}", GREY, RESET);
        }
        for b in reading {
            print_progress_row(b);
        }

        header("Finished");
        if finished.is_empty() {
            println!("{}(no finished books yet){}", GREY, RESET);
        }
        for b in finished {
            let when = b
                .finished_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "--".into());
            println!(
                "  {:<32} {:<18} finished {}",
                truncate(&b.title, 32),
                truncate(&b.author, 18),
                when
            );
        }

        if cfg.show_dropped {
            header("Dropped");
            if dropped.is_empty() {
                println!("{}(no dropped books){}", GREY, RESET);
            }
            for b in dropped {
                println!(
                    "  {:<32} {:<18} {}p of {}p",
                    truncate(&b.title, 32),
                    truncate(&b.author, 18),
                    b.current_page,
                    b.page_count
                );
            }
        }

        println!();
    }
    Ok(())
}

fn print_progress_row(b: &BookProgress) {
    let color = color_for_percent(b.progress_percent);
    println!(
        "  {:<32} {}{}{}  page {} of {}  (last read {})",
        truncate(&b.title, 32),
        color,
        progress_bar(b.progress_percent, 20),
        RESET,
        b.current_page,
        b.page_count,
        b.last_read_date
    );
}
