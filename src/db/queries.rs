use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::{Event, EventFields, EventUpdate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Text columns may hold NULL when a row was written by a client that
/// omitted the field; they read back as empty strings.
fn text(row: &Row, col: &str) -> Result<String> {
    Ok(row.get::<_, Option<String>>(col)?.unwrap_or_default())
}

pub fn map_row(row: &Row) -> Result<Event> {
    Ok(Event {
        id: row.get("id")?,
        church_name: text(row, "churchName")?,
        name: text(row, "name")?,
        no: text(row, "no")?,
        token: text(row, "token")?,
        author: text(row, "author")?,
        mobile_no: text(row, "mobileNo")?,
        completed: row.get::<_, Option<bool>>("completed")?.unwrap_or(false),
    })
}

/// Insert a new record and return the id SQLite assigned to it.
pub fn insert_event(conn: &Connection, fields: &EventFields) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (churchName, name, no, token, author, mobileNo)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            fields.church_name,
            fields.name,
            fields.no,
            fields.token,
            fields.author,
            fields.mobile_no,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All records in insertion order.
pub fn load_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare("SELECT * FROM events ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let ev = conn
        .query_row("SELECT * FROM events WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(ev)
}

/// Overwrite every text field and `completed` (all fields except id).
/// Returns the number of rows touched: 0 when the id does not exist.
pub fn update_event(conn: &Connection, id: i64, update: &EventUpdate) -> AppResult<usize> {
    let f = &update.fields;
    let n = conn.execute(
        "UPDATE events
         SET churchName = ?1, name = ?2, no = ?3,
             token = ?4, author = ?5, mobileNo = ?6,
             completed = ?7
         WHERE id = ?8",
        params![
            f.church_name,
            f.name,
            f.no,
            f.token,
            f.author,
            f.mobile_no,
            update.completed,
            id,
        ],
    )?;
    Ok(n)
}

/// Hard delete. Returns the number of rows removed.
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    Ok(n)
}

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
