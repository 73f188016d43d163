//! Refresh loop that keeps a console copy in step with the store.
//!
//! At most one list request is in flight: the loop awaits each fetch before
//! waiting for the next tick, and ticks that elapse during a slow fetch are
//! skipped rather than queued. Responses therefore arrive in request order.

use crate::models::event::Event;
use crate::store::RecordStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Handle used to stop a running poll loop.
#[derive(Debug)]
pub struct PollStop(watch::Sender<bool>);

impl PollStop {
    pub fn stop(&self) {
        let _ = self.0.send(true);
    }
}

pub fn stop_channel() -> (PollStop, watch::Receiver<bool>) {
    let (tx, rx) = watch::channel(false);
    (PollStop(tx), rx)
}

/// Poll `store.list()` every `every` until `stop` fires, handing each
/// successful result to `on_refresh`. Failed fetches are logged and leave
/// the caller's copy untouched.
pub async fn run_poll_loop<F>(
    store: Arc<dyn RecordStore>,
    every: Duration,
    mut stop: watch::Receiver<bool>,
    mut on_refresh: F,
) where
    F: FnMut(Vec<Event>) + Send,
{
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            changed = stop.changed() => {
                if changed.is_err() || *stop.borrow() {
                    break;
                }
                continue;
            }
        }

        match store.list().await {
            Ok(events) => {
                debug!(count = events.len(), "poll refreshed");
                on_refresh(events);
            }
            Err(e) => warn!(error = %e, store = %store.describe(), "poll failed"),
        }
    }
    debug!("poll loop stopped");
}
