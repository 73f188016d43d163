//! Event console: a local copy of the record list plus the editor form.
//!
//! [`EventConsole`] is plain state. [`ConsoleSession`] pairs it with a
//! [`RecordStore`]: each action calls the store first and patches the local
//! copy only after the call succeeded, so a failed call leaves the console
//! exactly as it was. The next poll reconciles whatever the patch guessed.

pub mod form;
pub mod poll;
pub mod views;

use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFields, EventUpdate};
use crate::store::RecordStore;
use form::EventForm;
use std::sync::{Arc, Mutex, MutexGuard};
use views::{OrderView, order_view};

/// What submitting the form will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(EventFields),
    Update { id: i64, update: EventUpdate },
}

#[derive(Debug, Default)]
pub struct EventConsole {
    events: Vec<Event>,
    pub form: EventForm,
    editing: Option<i64>,
}

impl EventConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn find(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|ev| ev.id == id)
    }

    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Poll result: the server order replaces the local one wholesale.
    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Load a record into the form. The record stays in the list; the
    /// next submit updates it in place.
    pub fn begin_edit(&mut self, id: i64) -> AppResult<()> {
        let ev = self.find(id).cloned().ok_or(AppError::NotFound(id))?;
        self.form.load(&ev);
        self.editing = Some(id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form.clear();
    }

    /// Validate the form and decide between create and in-place update.
    pub fn prepare_submission(&self) -> AppResult<Submission> {
        let fields = self.form.validate()?.clone();
        Ok(match self.editing {
            Some(id) => Submission::Update {
                id,
                update: EventUpdate {
                    fields,
                    completed: self.find(id).is_some_and(|ev| ev.completed),
                },
            },
            None => Submission::Create(fields),
        })
    }

    pub fn apply_created(&mut self, ev: Event) {
        self.events.push(ev);
        self.form.clear();
    }

    pub fn apply_updated(&mut self, ev: Event) {
        if self.editing == Some(ev.id) {
            self.cancel_edit();
        }
        if let Some(slot) = self.events.iter_mut().find(|e| e.id == ev.id) {
            *slot = ev;
        }
    }

    pub fn apply_deleted(&mut self, id: i64) {
        self.events.retain(|ev| ev.id != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
    }

    /// Move the record at `from` to `to` (drag and drop). Local only: the
    /// next poll restores the store order.
    pub fn reorder(&mut self, from: usize, to: usize) -> AppResult<()> {
        let len = self.events.len();
        if from >= len {
            return Err(AppError::InvalidPosition(from));
        }
        if to >= len {
            return Err(AppError::InvalidPosition(to));
        }
        let moved = self.events.remove(from);
        self.events.insert(to, moved);
        Ok(())
    }

    pub fn order_view(&self) -> OrderView<'_> {
        order_view(&self.events)
    }
}

/// Console state shared with the poll loop, plus the store it writes to.
#[derive(Clone)]
pub struct ConsoleSession {
    store: Arc<dyn RecordStore>,
    state: Arc<Mutex<EventConsole>>,
}

impl ConsoleSession {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(EventConsole::new())),
        }
    }

    pub fn store(&self) -> Arc<dyn RecordStore> {
        self.store.clone()
    }

    pub fn lock(&self) -> AppResult<MutexGuard<'_, EventConsole>> {
        self.state
            .lock()
            .map_err(|_| AppError::Other("console state poisoned".into()))
    }

    /// Fetch the full list once and replace the local copy.
    pub async fn refresh(&self) -> AppResult<usize> {
        let events = self.store.list().await?;
        let n = events.len();
        self.lock()?.replace_all(events);
        Ok(n)
    }

    pub async fn submit(&self) -> AppResult<Event> {
        let submission = self.lock()?.prepare_submission()?;
        match submission {
            Submission::Create(fields) => {
                let ev = self.store.create(fields).await?;
                self.lock()?.apply_created(ev.clone());
                Ok(ev)
            }
            Submission::Update { id, update } => {
                let ev = self.store.update(id, update).await?;
                self.lock()?.apply_updated(ev.clone());
                Ok(ev)
            }
        }
    }

    pub async fn toggle(&self, id: i64) -> AppResult<Event> {
        let update = self
            .lock()?
            .find(id)
            .map(Event::toggled)
            .ok_or(AppError::NotFound(id))?;
        let ev = self.store.update(id, update).await?;
        self.lock()?.apply_updated(ev.clone());
        Ok(ev)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await?;
        self.lock()?.apply_deleted(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::form::FormField;
    use super::*;
    use crate::store::SqliteStore;

    fn fill(console: &mut EventConsole, name: &str) {
        for (field, value) in FormField::ALL
            .into_iter()
            .zip(["St. Mary", name, "3", "T3", "Jane", "555-0100"])
        {
            console.form.set(field, value);
        }
    }

    fn session() -> ConsoleSession {
        ConsoleSession::new(Arc::new(SqliteStore::in_memory().unwrap()))
    }

    #[tokio::test]
    async fn submit_appends_and_clears_the_form() {
        let s = session();
        fill(&mut s.lock().unwrap(), "Choir");

        let ev = s.submit().await.unwrap();
        let console = s.lock().unwrap();
        assert_eq!(console.events(), &[ev]);
        assert_eq!(console.form, EventForm::default());
    }

    #[tokio::test]
    async fn submit_with_blank_field_reaches_no_store() {
        let s = session();
        {
            let mut console = s.lock().unwrap();
            fill(&mut console, "Choir");
            console.form.set(FormField::Author, "");
        }

        assert!(matches!(
            s.submit().await,
            Err(AppError::MissingField("author"))
        ));
        assert!(s.store().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn edit_updates_in_place_and_keeps_status() {
        let s = session();
        fill(&mut s.lock().unwrap(), "Choir");
        let ev = s.submit().await.unwrap();
        s.toggle(ev.id).await.unwrap();

        {
            let mut console = s.lock().unwrap();
            console.begin_edit(ev.id).unwrap();
            assert_eq!(console.events().len(), 1);
            assert_eq!(console.form.get(FormField::Name), "Choir");
            console.form.set(FormField::Name, "Youth Choir");
        }
        let edited = s.submit().await.unwrap();

        assert_eq!(edited.id, ev.id);
        assert!(edited.completed);
        let stored = s.store().list().await.unwrap();
        assert_eq!(stored, vec![edited.clone()]);
        assert_eq!(s.lock().unwrap().editing(), None);
    }

    #[tokio::test]
    async fn abandoned_edit_loses_nothing() {
        let s = session();
        fill(&mut s.lock().unwrap(), "Choir");
        let ev = s.submit().await.unwrap();

        {
            let mut console = s.lock().unwrap();
            console.begin_edit(ev.id).unwrap();
            console.cancel_edit();
        }
        s.refresh().await.unwrap();
        assert_eq!(s.lock().unwrap().events(), &[ev]);
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_not_found() {
        let s = session();
        assert!(matches!(s.toggle(5).await, Err(AppError::NotFound(5))));
    }

    #[tokio::test]
    async fn delete_removes_locally_and_remotely() {
        let s = session();
        fill(&mut s.lock().unwrap(), "Choir");
        let ev = s.submit().await.unwrap();

        s.delete(ev.id).await.unwrap();
        assert!(s.lock().unwrap().events().is_empty());
        assert!(s.store().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn reorder_is_reset_by_the_next_refresh() {
        let s = session();
        for name in ["A", "B", "C"] {
            fill(&mut s.lock().unwrap(), name);
            s.submit().await.unwrap();
        }

        s.lock().unwrap().reorder(2, 0).unwrap();
        let names: Vec<String> = s.lock().unwrap().events().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["C", "A", "B"]);

        s.refresh().await.unwrap();
        let names: Vec<String> = s.lock().unwrap().events().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn reorder_rejects_out_of_range_positions() {
        let mut console = EventConsole::new();
        assert!(matches!(
            console.reorder(0, 0),
            Err(AppError::InvalidPosition(0))
        ));
    }
}
