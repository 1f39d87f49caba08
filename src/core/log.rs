use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const OP_COL_MAX: usize = 60;

struct LogRow {
    id: i32,
    date: String,
    operation: String,
    target: String,
    message: String,
}

impl LogRow {
    /// `operation (target)` or bare operation for rows without a target.
    fn op_target(&self) -> String {
        if self.target.is_empty() {
            self.operation.clone()
        } else {
            format!("{} ({})", self.operation, self.target)
        }
    }
}

/// ANSI colour per operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "start" => Colour::Cyan,
        "drop" => Colour::Yellow,
        "finish" => Colour::Purple,
        "book" | "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("migrate_") => Colour::Purple,
        _ => Colour::White,
    }
}

fn visible_len(s: &str) -> usize {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").chars().count()
}

fn clip(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    /// Print the internal operation log as an aligned table, colouring
    /// the operation word by kind.
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get(3)?,
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.op_target().len())
            .max()
            .unwrap_or(10)
            .min(OP_COL_MAX);

        println!("📜 Internal log:\n");

        for entry in entries {
            let clipped = clip(&entry.op_target(), OP_COL_MAX);
            let color = color_for_operation(&entry.operation);

            // Colour only the operation word, keep the target plain.
            let painted = match clipped.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(clipped.as_str()).to_string(),
            };
            let pad = " ".repeat(op_w.saturating_sub(visible_len(&painted)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id, entry.date, painted, pad, entry.message
            );
        }

        Ok(())
    }
}
