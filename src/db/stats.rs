use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Record counts shown by `db --info`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
}

pub fn count_events(pool: &DbPool) -> AppResult<EventCounts> {
    let (total, completed): (i64, i64) = pool.conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(CASE WHEN completed THEN 1 ELSE 0 END), 0) FROM events",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(EventCounts {
        total,
        completed,
        pending: total - completed,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let counts = count_events(pool)?;
    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, counts.total, RESET
    );
    println!("    completed: {}", counts.completed);
    println!("    pending:   {}", counts.pending);

    let last_id: Option<i64> = pool
        .conn
        .query_row("SELECT seq FROM sqlite_sequence WHERE name = 'events'", [], |row| {
            row.get(0)
        })
        .optional()?;

    match last_id {
        Some(id) => println!("{}• Last assigned id:{} {}", CYAN, RESET, id),
        None => println!("{}• Last assigned id:{} {GREY}--{RESET}", CYAN, RESET),
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_split_by_status() {
        let pool = DbPool::in_memory().unwrap();
        pool.conn
            .execute_batch(
                "INSERT INTO events (name, completed) VALUES ('A', 0);
                 INSERT INTO events (name, completed) VALUES ('B', 1);
                 INSERT INTO events (name) VALUES ('C');",
            )
            .unwrap();

        let c = count_events(&pool).unwrap();
        assert_eq!(
            c,
            EventCounts {
                total: 3,
                completed: 1,
                pending: 2
            }
        );
    }

    #[test]
    fn empty_table_counts_zero() {
        let pool = DbPool::in_memory().unwrap();
        assert_eq!(count_events(&pool).unwrap(), EventCounts::default());
    }
}
