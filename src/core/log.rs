use crate::config::Config;
use crate::core::journal;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Colour of an operation in the journal listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "remove" => Colour::Red,
        "edit" | "settings" => Colour::Yellow,
        "migrate" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "new" | "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = journal::read_all(cfg)?;

        if entries.is_empty() {
            println!("📜 Journal is empty.");
            return Ok(());
        }

        let rows: Vec<(usize, String, &str, String, &str)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                // single op+target column
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (i + 1, date, e.operation.as_str(), op_target, e.message.as_str())
            })
            .collect();

        // widest op+target, capped at 40
        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| op_target.len())
            .max()
            .unwrap_or(10)
            .min(40);
        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _, _, _)| d.len()).max().unwrap_or(25);

        println!("📜 Journal:\n");

        for (id, date, op, op_target, msg) in &rows {
            let padded = format!("{:<op_w$}", op_target, op_w = op_w);
            println!(
                "{:>id_w$}  {:<date_w$}  {}  {}",
                id,
                date,
                color_for_operation(op).paint(padded),
                msg,
                id_w = id_w,
                date_w = date_w,
            );
        }

        Ok(())
    }
}
