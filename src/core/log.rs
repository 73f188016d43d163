use crate::db::pool::DbPool;
use crate::db::queries::{LogEntry, load_log};
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to `MAX_OP_WIDTH` visible characters.
fn op_target(entry: &LogEntry) -> String {
    let text = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if text.chars().count() > MAX_OP_WIDTH {
        let mut cut: String = text.chars().take(MAX_OP_WIDTH - 3).collect();
        cut.push_str("...");
        cut
    } else {
        text
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(pool)?;
        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let labels: Vec<String> = entries.iter().map(op_target).collect();
        let dates: Vec<String> = entries.iter().map(|e| display_date(&e.date)).collect();

        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = dates.iter().map(String::len).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for ((entry, label), date) in entries.iter().zip(&labels).zip(&dates) {
            let color = color_for_operation(&entry.operation);

            // only the operation word is coloured
            let painted = match label.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(label.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                painted,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(operation: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 1,
            date: "2024-12-20T10:00:00+01:00".into(),
            operation: operation.into(),
            target: target.into(),
            message: String::new(),
        }
    }

    #[test]
    fn target_is_shown_in_parentheses() {
        assert_eq!(op_target(&entry("add", "12")), "add (12)");
        assert_eq!(op_target(&entry("init", "")), "init");
    }

    #[test]
    fn long_labels_are_truncated() {
        let label = op_target(&entry("migration_applied", &"x".repeat(80)));
        assert_eq!(label.chars().count(), MAX_OP_WIDTH);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn unparsable_dates_are_shown_raw() {
        assert_eq!(display_date("yesterday"), "yesterday");
        assert_eq!(
            display_date("2024-12-20T10:00:00+01:00"),
            "2024-12-20T10:00:00+01:00"
        );
    }
}
