use crate::cli::commands::{ask_confirmation, require_event};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = store::open(cfg)?;
        let ev = require_event(store.as_ref(), *id).await?;

        let prompt = format!(
            "Delete event #{} ({})? This action is irreversible.",
            ev.id,
            ev.label()
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        store.delete(ev.id).await?;
        success(format!("Event #{} has been deleted.", ev.id));
    }
    Ok(())
}
