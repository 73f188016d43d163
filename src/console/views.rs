//! Read-only projections of the console cache: the order view and the
//! "now showing" viewer.

use crate::models::event::Event;

/// Completed acts first, then pending ones, each in cache order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OrderView<'a> {
    pub completed: Vec<&'a Event>,
    pub pending: Vec<&'a Event>,
}

pub fn order_view(events: &[Event]) -> OrderView<'_> {
    let (completed, pending): (Vec<&Event>, Vec<&Event>) =
        events.iter().partition(|ev| ev.completed);
    OrderView { completed, pending }
}

pub fn pending(events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|ev| !ev.completed).collect()
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ViewerSnapshot<'a> {
    pub previous: Option<&'a Event>,
    pub current: Option<&'a Event>,
    pub next: Option<&'a Event>,
}

impl ViewerSnapshot<'_> {
    /// Ids on display, used to detect whether a refresh changed anything.
    pub fn ids(&self) -> [Option<i64>; 3] {
        [
            self.previous.map(|ev| ev.id),
            self.current.map(|ev| ev.id),
            self.next.map(|ev| ev.id),
        ]
    }
}

/// Position of the viewer among pending acts.
///
/// The viewer follows the id of the act on display rather than a bare
/// index. When that act leaves the pending list the viewer stays at the
/// same position, clamped to the list, which is the act that followed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    current_id: Option<i64>,
    position: usize,
}

impl Viewer {
    /// Start at a pending-list position; the id is pinned on first sync.
    pub fn at(position: usize) -> Self {
        Self {
            current_id: None,
            position,
        }
    }

    pub fn current_id(&self) -> Option<i64> {
        self.current_id
    }

    pub fn position(&self) -> usize {
        self.position
    }

    fn resolve(&self, pending: &[&Event]) -> Option<usize> {
        if pending.is_empty() {
            return None;
        }
        if let Some(id) = self.current_id
            && let Some(idx) = pending.iter().position(|ev| ev.id == id)
        {
            return Some(idx);
        }
        Some(self.position.min(pending.len() - 1))
    }

    /// Re-anchor after the list changed.
    pub fn sync(&mut self, events: &[Event]) {
        let pending = pending(events);
        match self.resolve(&pending) {
            Some(idx) => {
                self.position = idx;
                self.current_id = Some(pending[idx].id);
            }
            None => self.current_id = None,
        }
    }

    pub fn snapshot<'a>(&self, events: &'a [Event]) -> ViewerSnapshot<'a> {
        let pending = pending(events);
        let Some(idx) = self.resolve(&pending) else {
            return ViewerSnapshot::default();
        };

        ViewerSnapshot {
            previous: idx.checked_sub(1).map(|i| pending[i]),
            current: Some(pending[idx]),
            next: pending.get(idx + 1).copied(),
        }
    }

    /// Move to the next pending act. Returns false at the end of the list.
    pub fn advance(&mut self, events: &[Event]) -> bool {
        self.sync(events);
        let pending = pending(events);
        if self.position + 1 >= pending.len() {
            return false;
        }
        self.position += 1;
        self.current_id = Some(pending[self.position].id);
        true
    }

    /// Move to the previous pending act. Returns false at the start.
    pub fn back(&mut self, events: &[Event]) -> bool {
        self.sync(events);
        if self.current_id.is_none() || self.position == 0 {
            return false;
        }
        let pending = pending(events);
        self.position -= 1;
        self.current_id = Some(pending[self.position].id);
        true
    }
}
