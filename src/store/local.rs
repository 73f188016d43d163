use super::RecordStore;
use crate::errors::AppResult;
use crate::models::event::{Event, EventFields, EventUpdate};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Offline record store: the whole list lives in a single JSON file.
///
/// Ids come from a counter kept in the file, so a deleted id is never handed
/// out again even when it was the highest one.
pub struct LocalStore {
    path: PathBuf,
    lock: Mutex<()>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocalFile {
    #[serde(default)]
    next_id: i64,
    events: Vec<Event>,
}

/// Files exported from a browser hold a bare array of records.
#[derive(Deserialize)]
#[serde(untagged)]
enum OnDisk {
    Current(LocalFile),
    Bare(Vec<Event>),
}

impl LocalFile {
    /// Move the counter past every id currently in the list.
    fn reserve_existing(&mut self) {
        let floor = self.events.iter().map(|ev| ev.id).max().unwrap_or(0) + 1;
        self.next_id = self.next_id.max(floor);
    }

    fn allocate_id(&mut self) -> i64 {
        self.reserve_existing();
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl LocalStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> AppResult<LocalFile> {
        if !fs::try_exists(&self.path).await? {
            return Ok(LocalFile::default());
        }

        let raw = fs::read_to_string(&self.path).await?;
        if raw.trim().is_empty() {
            return Ok(LocalFile::default());
        }

        Ok(match serde_json::from_str::<OnDisk>(&raw)? {
            OnDisk::Current(file) => file,
            OnDisk::Bare(events) => LocalFile { next_id: 0, events },
        })
    }

    /// Write through a sibling temp file so a crash never leaves half a list.
    async fn save(&self, file: &LocalFile) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(file)?).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), events = file.events.len(), "local store saved");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for LocalStore {
    async fn create(&self, fields: EventFields) -> AppResult<Event> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;

        let ev = Event::created(file.allocate_id(), fields);
        file.events.push(ev.clone());

        self.save(&file).await?;
        Ok(ev)
    }

    async fn list(&self) -> AppResult<Vec<Event>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.events)
    }

    async fn update(&self, id: i64, update: EventUpdate) -> AppResult<Event> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;

        let ev = Event::from_update(id, update);
        if let Some(slot) = file.events.iter_mut().find(|e| e.id == id) {
            *slot = ev.clone();
            self.save(&file).await?;
        } else {
            tracing::warn!(id, "update matched no event");
        }
        Ok(ev)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;

        let before = file.events.len();
        file.reserve_existing();
        file.events.retain(|e| e.id != id);
        if file.events.len() != before {
            self.save(&file).await?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("local:{}", self.path.display())
    }
}
