use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store;
use tracing::debug;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = store::open(cfg)?;
        let events = store.list().await?;
        let rows = ExportLogic::export(&events, *format, file, *force)?;
        debug!(rows, format = format.as_str(), file = %file, "export finished");
    }
    Ok(())
}
