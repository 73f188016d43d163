use crate::cli::commands::require_event;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::console::form::validate;
use crate::errors::AppResult;
use crate::models::event::EventUpdate;
use crate::store;
use crate::ui::messages::{info, success};

/// Handle the `edit` command: update in place, status unchanged.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, fields } = cmd {
        if fields.is_empty() {
            info("Nothing to change: pass at least one field flag.");
            return Ok(());
        }

        let store = store::open(cfg)?;
        let current = require_event(store.as_ref(), *id).await?;

        let merged = fields.apply_to(current.fields());
        validate(&merged)?;

        let ev = store
            .update(
                current.id,
                EventUpdate {
                    fields: merged,
                    completed: current.completed,
                },
            )
            .await?;
        success(format!("Event #{} updated: {}", ev.id, ev.label()));
    }
    Ok(())
}
