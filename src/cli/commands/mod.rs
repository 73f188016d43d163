//! One handler per subcommand.

pub mod add;
pub mod config;
pub mod console;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod order;
pub mod serve;
pub mod toggle;
pub mod viewer;

use crate::cli::parser::FieldArgs;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFields};
use crate::store::RecordStore;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

impl FieldArgs {
    /// Overlay the flags that were given on top of `base`.
    pub fn apply_to(&self, mut base: EventFields) -> EventFields {
        let pairs = [
            (&self.church_name, &mut base.church_name),
            (&self.name, &mut base.name),
            (&self.no, &mut base.no),
            (&self.token, &mut base.token),
            (&self.author, &mut base.author),
            (&self.mobile_no, &mut base.mobile_no),
        ];
        for (flag, slot) in pairs {
            if let Some(v) = flag {
                *slot = v.trim().to_string();
            }
        }
        base
    }

    pub fn is_empty(&self) -> bool {
        self.church_name.is_none()
            && self.name.is_none()
            && self.no.is_none()
            && self.token.is_none()
            && self.author.is_none()
            && self.mobile_no.is_none()
    }
}

/// Look an event up by id, failing when the store does not have it.
pub(crate) async fn require_event(store: &dyn RecordStore, id: i64) -> AppResult<Event> {
    store.find(id).await?.ok_or(AppError::NotFound(id))
}
