use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

const CREATE_EVENTS: &str = "20241220_0001_create_events";
const ADD_COMPLETED: &str = "20241222_0002_add_completed_flag";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `events` table exists.
fn events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `events` table has a `completed` column.
fn events_has_completed_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('events')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "completed" {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `events` table. Column names keep the camelCase spelling used
/// on the wire so databases written by earlier servers open unchanged.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            churchName TEXT,
            name       TEXT,
            no         TEXT,
            token      TEXT,
            author     TEXT,
            mobileNo   TEXT,
            completed  BOOLEAN DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

fn migrate_add_completed_column(conn: &Connection) -> AppResult<()> {
    if migration_applied(conn, ADD_COMPLETED)? || events_has_completed_column(conn)? {
        return Ok(());
    }

    warning("Adding 'completed' column to events table...");

    conn.execute("ALTER TABLE events ADD COLUMN completed BOOLEAN DEFAULT 0;", [])
        .map_err(|e| AppError::Migration(format!("Failed to add 'completed' column: {e}")))?;

    mark_applied(conn, ADD_COMPLETED, "Added completed flag to events")?;

    success(format!(
        "Migration applied: {} → added 'completed' to events table",
        ADD_COMPLETED
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !events_table_exists(conn)? {
        create_events_table(conn)?;
        mark_applied(conn, CREATE_EVENTS, "Created events table")?;
        tracing::debug!(version = CREATE_EVENTS, "created events table");
        return Ok(());
    }

    migrate_add_completed_column(conn)?;
    Ok(())
}
