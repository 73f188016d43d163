//! Interactive console: a line-oriented front over [`ConsoleSession`].
//!
//! The record list refreshes in the background; commands act on the local
//! copy and write through to the store.

use crate::config::Config;
use crate::console::ConsoleSession;
use crate::console::form::FormField;
use crate::console::poll::{run_poll_loop, stop_channel};
use crate::console::views::Viewer;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::render::{print_event_list, print_order, print_viewer};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "\
  list                  show every act
  order                 completed acts, then pending ones
  viewer | next | prev  now showing (previous / current / next)
  form                  show the form
  set <field> <value>   fill a form field (church, name, no, token, author, mobile)
  submit                add the act, or save the one being edited
  edit <id>             load an act into the form
  cancel                clear the form and stop editing
  toggle <id>           flip completed / pending
  del <id>              delete an act
  move <from> <to>      reorder the local list (until the next refresh)
  refresh               fetch the list now
  quit";

fn parse_id(arg: Option<&str>) -> AppResult<i64> {
    let raw = arg.unwrap_or("");
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidId(raw.to_string()))
}

fn parse_position(arg: Option<&str>) -> AppResult<usize> {
    let raw = arg.unwrap_or("");
    raw.trim()
        .parse()
        .map_err(|_| AppError::Other(format!("invalid position '{raw}'")))
}

fn print_form(session: &ConsoleSession) -> AppResult<()> {
    let console = session.lock()?;
    match console.editing() {
        Some(id) => header(format!("Editing event #{id}")),
        None => header("New event"),
    }
    for field in FormField::ALL {
        println!("  {:<12} {}", field.label(), console.form.get(field));
    }
    Ok(())
}

/// Run one console command. Returns false when the user asked to quit.
async fn execute(session: &ConsoleSession, viewer: &mut Viewer, line: &str) -> AppResult<bool> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(true);
    };

    match command {
        "help" | "?" => println!("{HELP}"),
        "quit" | "exit" | "q" => return Ok(false),
        "list" => print_event_list(session.lock()?.events()),
        "order" => print_order(&session.lock()?.order_view()),
        "viewer" => {
            let console = session.lock()?;
            viewer.sync(console.events());
            print_viewer(&viewer.snapshot(console.events()));
        }
        "next" | "prev" => {
            let console = session.lock()?;
            let moved = if command == "next" {
                viewer.advance(console.events())
            } else {
                viewer.back(console.events())
            };
            if !moved {
                info("No further pending act in that direction.");
            }
            print_viewer(&viewer.snapshot(console.events()));
        }
        "form" => print_form(session)?,
        "set" => {
            let field: FormField = words.next().unwrap_or("").parse()?;
            let value = words.collect::<Vec<_>>().join(" ");
            session.lock()?.form.set(field, &value);
        }
        "submit" => {
            let editing = session.lock()?.editing();
            let ev = session.submit().await?;
            match editing {
                Some(_) => success(format!("Event #{} updated: {}", ev.id, ev.label())),
                None => success(format!("Event #{} created: {}", ev.id, ev.label())),
            }
        }
        "edit" => {
            let id = parse_id(words.next())?;
            session.lock()?.begin_edit(id)?;
            print_form(session)?;
        }
        "cancel" => {
            session.lock()?.cancel_edit();
            info("Form cleared.");
        }
        "toggle" => {
            let ev = session.toggle(parse_id(words.next())?).await?;
            success(format!("Event #{} is now {}", ev.id, ev.status_str()));
        }
        "del" => {
            let id = parse_id(words.next())?;
            session.delete(id).await?;
            success(format!("Event #{id} has been deleted."));
        }
        "move" => {
            let from = parse_position(words.next())?;
            let to = parse_position(words.next())?;
            session.lock()?.reorder(from, to)?;
            print_event_list(session.lock()?.events());
        }
        "refresh" => {
            let n = session.refresh().await?;
            info(format!("{n} events loaded."));
        }
        other => warning(format!("Unknown command '{other}'. Type `help`.")),
    }
    Ok(true)
}

pub async fn handle(cfg: &Config) -> AppResult<()> {
    let store = store::open(cfg)?;
    let session = ConsoleSession::new(store.clone());

    // a failed first load is not fatal: the poll loop keeps trying
    match session.refresh().await {
        Ok(n) => info(format!("{n} events loaded from {}", store.describe())),
        Err(e) => warning(format!("Could not load events: {e}")),
    }
    info("Type `help` for commands.");

    let (stop, stop_rx) = stop_channel();
    let shared = session.clone();
    let poller = tokio::spawn(run_poll_loop(
        store,
        cfg.poll_interval(),
        stop_rx,
        move |events| match shared.lock() {
            Ok(mut console) => console.replace_all(events),
            Err(e) => debug!(error = %e, "skipping refresh"),
        },
    ));

    let mut viewer = Viewer::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("stagelist> ");
        let _ = std::io::stdout().flush();

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        match execute(&session, &mut viewer, &line).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => error(e),
        }
    }

    stop.stop();
    poller
        .await
        .map_err(|e| AppError::Other(format!("poll task failed: {e}")))?;
    Ok(())
}
