use crate::config::Config;
use crate::console::views::order_view;
use crate::errors::AppResult;
use crate::store;
use crate::ui::render::print_order;

pub async fn handle(cfg: &Config) -> AppResult<()> {
    let store = store::open(cfg)?;
    let events = store.list().await?;
    print_order(&order_view(&events));
    Ok(())
}
