//! Terminal rendering of record lists, the order view and the viewer.

use crate::console::views::{OrderView, ViewerSnapshot};
use crate::models::event::Event;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BOLD, GREY, RESET, color_for_status, colorize_optional};
use crate::utils::table::{Column, Table};

fn event_table<'a>(events: impl IntoIterator<Item = &'a Event>) -> Table {
    let mut table = Table::new(
        ["ID", "Church Name", "Name", "No", "Token", "Author", "Mobile No", "Status"]
            .into_iter()
            .map(Column::new)
            .collect(),
    );

    for ev in events {
        table.add_row(vec![
            ev.id.to_string(),
            colorize_optional(&ev.church_name),
            colorize_optional(&ev.name),
            colorize_optional(&ev.no),
            colorize_optional(&ev.token),
            colorize_optional(&ev.author),
            colorize_optional(&ev.mobile_no),
            format!("{}{}{}", color_for_status(ev.completed), ev.status_str(), RESET),
        ]);
    }
    table
}

pub fn print_event_list(events: &[Event]) {
    if events.is_empty() {
        info("No events registered.");
        return;
    }
    print!("{}", event_table(events).render());
}

pub fn print_order(view: &OrderView<'_>) {
    header("Completed");
    if view.completed.is_empty() {
        println!("{GREY}(none){RESET}");
    } else {
        print!("{}", event_table(view.completed.iter().copied()).render());
    }
    println!();

    header("Pending");
    if view.pending.is_empty() {
        println!("{GREY}(none){RESET}");
    } else {
        print!("{}", event_table(view.pending.iter().copied()).render());
    }
}

fn slot(label: &str, ev: Option<&Event>, emphasise: bool) {
    match ev {
        Some(ev) if emphasise => println!("{label:<9} {BOLD}{}{RESET}  (#{})", ev.label(), ev.id),
        Some(ev) => println!("{label:<9} {}  (#{})", ev.label(), ev.id),
        None => println!("{label:<9} {GREY}--{RESET}"),
    }
}

pub fn print_viewer(snap: &ViewerSnapshot<'_>) {
    header("Now showing");
    if snap.current.is_none() {
        info("No pending events.");
        return;
    }
    slot("Previous:", snap.previous, false);
    slot("Current:", snap.current, true);
    slot("Next:", snap.next, false);
}
