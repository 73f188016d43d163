//! Record store adapters.
//!
//! Every surface (HTTP server, one-shot commands, interactive console,
//! viewer) talks to records through [`RecordStore`]. Three adapters exist:
//! - [`SqliteStore`]: the single `events` table, the source of truth
//! - [`RemoteStore`]: HTTP client for a running `stagelist serve`
//! - [`LocalStore`]: one JSON file, for offline use without a server

mod local;
mod remote;
mod sqlite;

pub use local::LocalStore;
pub use remote::RemoteStore;
pub use sqlite::SqliteStore;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::event::{Event, EventFields, EventUpdate};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a record with `completed = false` and return it with its id.
    async fn create(&self, fields: EventFields) -> AppResult<Event>;

    /// Every record, in insertion order.
    async fn list(&self) -> AppResult<Vec<Event>>;

    /// Overwrite all fields of `id`. Absent ids are not an error: the
    /// returned record echoes what was requested.
    async fn update(&self, id: i64, update: EventUpdate) -> AppResult<Event>;

    /// Remove `id`. Removing an absent id is not an error.
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Human-readable location, used in logs and CLI banners.
    fn describe(&self) -> String;

    async fn find(&self, id: i64) -> AppResult<Option<Event>> {
        Ok(self.list().await?.into_iter().find(|ev| ev.id == id))
    }
}

/// Build the store selected by the configuration.
pub fn open(cfg: &Config) -> AppResult<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match cfg.backend {
        Backend::Sqlite => Arc::new(SqliteStore::open(&cfg.database)?),
        Backend::Remote => Arc::new(RemoteStore::new(&cfg.server_url)?),
        Backend::Local => Arc::new(LocalStore::new(&cfg.local_store)),
    };
    tracing::debug!(store = %store.describe(), "record store ready");
    Ok(store)
}
