use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::rlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_book_edition, list_editions};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::formatting::truncate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Book {
        isbn,
        title,
        author,
        pages,
        list,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *list {
            print_editions(&mut pool)?;
            return Ok(());
        }

        //
        // Register a new edition: isbn, title and pages are mandatory.
        //
        let isbn = isbn
            .as_deref()
            .ok_or_else(|| AppError::InvalidIsbn("missing ISBN".into()))?;
        let title = title
            .as_deref()
            .ok_or_else(|| AppError::Config("missing --title".into()))?;
        let author = author.as_deref().unwrap_or("");

        let page_count = pages.ok_or_else(|| AppError::InvalidPageCount("missing --pages".into()))?;
        if page_count <= 0 {
            return Err(AppError::InvalidPageCount(page_count.to_string()));
        }

        insert_book_edition(&pool.conn, isbn, title, author, page_count)?;

        rlog(
            &pool.conn,
            "book",
            isbn,
            &format!("Registered '{}' ({} pages)", title, page_count),
        )?;

        success(format!(
            "Registered edition '{}': {} — {} pages.",
            isbn, title, page_count
        ));
    }

    Ok(())
}

fn print_editions(pool: &mut DbPool) -> AppResult<()> {
    let editions = list_editions(pool)?;

    if editions.is_empty() {
        println!("No editions registered yet.");
        return Ok(());
    }

    println!("{:<15} {:<32} {:<22} {:>6}", "ISBN", "TITLE", "AUTHOR", "PAGES");
    for e in editions {
        println!(
            "{:<15} {:<32} {:<22} {:>6}",
            e.isbn,
            truncate(&e.title, 32),
            truncate(&e.author, 22),
            e.page_count
        );
    }
    Ok(())
}
