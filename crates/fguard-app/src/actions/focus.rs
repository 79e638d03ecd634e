//! Focus session tasks: start, stop, and the 1-second status poll

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use fguard_api::ApiClient;
use fguard_core::FocusMode;

use crate::message::Message;

/// Cadence of the status poll while a session runs.
const STATUS_POLL_INTERVAL: Duration = Duration::from_secs(1);

pub(crate) fn spawn_start(
    api: ApiClient,
    msg_tx: mpsc::Sender<Message>,
    generation: u64,
    minutes: u32,
    mode: FocusMode,
) {
    tokio::spawn(async move {
        let outcome = api
            .focus()
            .start(minutes, &mode)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string());
        let _ = msg_tx
            .send(Message::SessionStarted {
                generation,
                minutes,
                mode,
                outcome,
            })
            .await;
    });
}

pub(crate) fn spawn_stop(
    api: ApiClient,
    msg_tx: mpsc::Sender<Message>,
    generation: u64,
    completed: bool,
) {
    tokio::spawn(async move {
        let outcome = api
            .focus()
            .stop(completed)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string());
        let _ = msg_tx
            .send(Message::SessionStopped {
                generation,
                completed,
                outcome,
            })
            .await;
    });
}

/// Spawn the periodic status poll for the running session.
///
/// The first tick fires one interval after the start call succeeds, matching
/// the backend's one-second countdown granularity. Failed polls are logged
/// and skipped -- the UI keeps its last mirror rather than flickering. The
/// loop exits when the shutdown channel flips, when its sender is dropped, or
/// when the message channel closes.
pub(crate) fn spawn_status_poll(
    api: ApiClient,
    msg_tx: mpsc::Sender<Message>,
    generation: u64,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let start = tokio::time::Instant::now() + STATUS_POLL_INTERVAL;
        let mut ticker = tokio::time::interval_at(start, STATUS_POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match api.focus().status().await {
                        Ok(status) => {
                            if msg_tx
                                .send(Message::StatusPolled { generation, status })
                                .await
                                .is_err()
                            {
                                // Engine shutting down.
                                break;
                            }
                        }
                        Err(e) => debug!("status poll failed: {e}"),
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }
        debug!("status poll for generation {generation} stopped");
    })
}
