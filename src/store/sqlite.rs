use super::RecordStore;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_event, insert_event, load_event, load_events, update_event};
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFields, EventUpdate};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

/// Record store over the SQLite `events` table.
///
/// One connection behind a mutex; every operation touches at most one row
/// so statements never need to be grouped in a transaction. Statements run
/// on tokio's blocking pool, never on a runtime worker.
pub struct SqliteStore {
    pool: Arc<Mutex<DbPool>>,
    path: String,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: Arc::new(Mutex::new(DbPool::new(path)?)),
            path: path.to_string(),
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: Arc::new(Mutex::new(DbPool::in_memory()?)),
            path: ":memory:".to_string(),
        })
    }

    #[cfg(test)]
    fn pool(&self) -> AppResult<MutexGuard<'_, DbPool>> {
        lock(&self.pool)
    }

    /// Run `op` against the connection on the blocking pool.
    async fn blocking<T, F>(&self, op: F) -> AppResult<T>
    where
        F: FnOnce(&DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || op(&*lock(&pool)?))
            .await
            .map_err(|e| AppError::Other(format!("database task failed: {e}")))?
    }
}

fn lock(pool: &Mutex<DbPool>) -> AppResult<MutexGuard<'_, DbPool>> {
    pool.lock()
        .map_err(|_| AppError::Other("database mutex poisoned".into()))
}

/// Audit entries never fail the operation they describe.
fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&pool.conn, operation, target, message) {
        warn!(error = %e, operation, "failed to write internal log");
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn create(&self, fields: EventFields) -> AppResult<Event> {
        self.blocking(move |pool| {
            let id = insert_event(&pool.conn, &fields)?;
            let ev = Event::created(id, fields);

            audit(pool, "add", &format!("event {id}"), &ev.label());
            info!(id, name = %ev.name, "event created");
            Ok(ev)
        })
        .await
    }

    async fn list(&self) -> AppResult<Vec<Event>> {
        self.blocking(|pool| load_events(&pool.conn)).await
    }

    async fn update(&self, id: i64, update: EventUpdate) -> AppResult<Event> {
        self.blocking(move |pool| {
            let touched = update_event(&pool.conn, id, &update)?;
            let ev = Event::from_update(id, update);

            if touched == 0 {
                warn!(id, "update matched no event");
            } else {
                audit(
                    pool,
                    "edit",
                    &format!("event {id}"),
                    &format!("{} [{}]", ev.label(), ev.status_str()),
                );
                info!(id, completed = ev.completed, "event updated");
            }
            Ok(ev)
        })
        .await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.blocking(move |pool| {
            let removed = delete_event(&pool.conn, id)?;

            if removed == 0 {
                warn!(id, "delete matched no event");
            } else {
                audit(pool, "del", &format!("event {id}"), "Event deleted");
                info!(id, "event deleted");
            }
            Ok(())
        })
        .await
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path)
    }

    async fn find(&self, id: i64) -> AppResult<Option<Event>> {
        self.blocking(move |pool| load_event(&pool.conn, id)).await
    }
}
