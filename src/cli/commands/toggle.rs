use crate::cli::commands::require_event;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { id } = cmd {
        let store = store::open(cfg)?;
        let ev = require_event(store.as_ref(), *id).await?;

        let ev = store.update(ev.id, ev.toggled()).await?;
        success(format!("Event #{} is now {}", ev.id, ev.status_str()));
    }
    Ok(())
}
