use crate::cli::parser::Commands;
use crate::config::Config;
use crate::console::poll::{run_poll_loop, stop_channel};
use crate::console::views::Viewer;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::store;
use crate::ui::messages::{info, warning};
use crate::ui::render::print_viewer;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Viewer { position, watch } = cmd else {
        return Ok(());
    };
    let store = store::open(cfg)?;

    if !*watch {
        let events = store.list().await?;
        let mut viewer = Viewer::at(*position);
        viewer.sync(&events);
        print_viewer(&viewer.snapshot(&events));
        return Ok(());
    }

    info("Watching: n = next, p = previous, q = quit");

    let (tx, mut rx) = mpsc::unbounded_channel::<Vec<Event>>();
    let (stop, stop_rx) = stop_channel();
    let poller = tokio::spawn(run_poll_loop(
        store.clone(),
        cfg.poll_interval(),
        stop_rx,
        move |events| {
            let _ = tx.send(events);
        },
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut events: Vec<Event> = Vec::new();
    let mut viewer = Viewer::at(*position);
    let mut shown: Option<[Option<i64>; 3]> = None;

    loop {
        tokio::select! {
            Some(fresh) = rx.recv() => {
                events = fresh;
                viewer.sync(&events);
            }
            line = lines.next_line() => {
                match line?.as_deref().map(str::trim) {
                    None | Some("q") => break,
                    Some("n") => {
                        if !viewer.advance(&events) {
                            info("Already at the last pending act.");
                        }
                    }
                    Some("p") => {
                        if !viewer.back(&events) {
                            info("Already at the first pending act.");
                        }
                    }
                    Some("") => shown = None,
                    Some(other) => warning(format!("Unknown key '{other}': n, p or q")),
                }
            }
        }

        // redraw only when what is on screen changed
        let snap = viewer.snapshot(&events);
        if shown != Some(snap.ids()) {
            print_viewer(&snap);
            shown = Some(snap.ids());
        }
    }

    stop.stop();
    poller
        .await
        .map_err(|e| AppError::Other(format!("poll task failed: {e}")))?;
    Ok(())
}
