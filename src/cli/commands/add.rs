use crate::cli::parser::Commands;
use crate::config::Config;
use crate::console::form::validate;
use crate::errors::AppResult;
use crate::models::event::EventFields;
use crate::store;
use crate::ui::messages::success;

/// Handle the `add` command: all six fields are required.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        let fields = fields.apply_to(EventFields::default());
        validate(&fields)?;

        let store = store::open(cfg)?;
        let ev = store.create(fields).await?;
        success(format!("Event #{} added: {}", ev.id, ev.label()));
    }
    Ok(())
}
