use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::render::print_event_list;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = store::open(cfg)?;
        let events = store.list().await?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&events)?);
        } else {
            print_event_list(&events);
        }
    }
    Ok(())
}
