//! Action execution - spawns the background API tasks
//!
//! The event loop hands each [`UpdateAction`] to [`handle_action`], which
//! spawns a task against a clone of the API client. Tasks never touch state;
//! they report back through the message channel, tagged with the generation
//! they were spawned for.

pub(crate) mod analytics;
pub(crate) mod blocklist;
pub(crate) mod focus;

use tokio::sync::{mpsc, watch};
use tracing::debug;

use fguard_api::ApiClient;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::poll::PollHandle;
use crate::state::AppState;

/// Execute one action produced by `update()`.
///
/// Runs on the event-loop side, which is why it may store the poll handle
/// directly into the timer state.
pub fn handle_action(
    state: &mut AppState,
    api: &ApiClient,
    msg_tx: &mpsc::Sender<Message>,
    action: UpdateAction,
) {
    debug!(?action, "executing action");
    match action {
        UpdateAction::CheckHealth => {
            spawn_health_check(api.clone(), msg_tx.clone());
        }

        UpdateAction::StartSession {
            generation,
            minutes,
            mode,
        } => focus::spawn_start(api.clone(), msg_tx.clone(), generation, minutes, mode),

        UpdateAction::StartStatusPoll { generation } => {
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let task = focus::spawn_status_poll(api.clone(), msg_tx.clone(), generation, shutdown_rx);
            state.timer.set_poll(PollHandle::new(shutdown_tx, task));
        }

        UpdateAction::StopSession {
            generation,
            completed,
        } => focus::spawn_stop(api.clone(), msg_tx.clone(), generation, completed),

        UpdateAction::FetchBlocklist { generation } => {
            blocklist::spawn_fetch(api.clone(), msg_tx.clone(), generation)
        }

        UpdateAction::AddSite {
            generation,
            url,
            category,
        } => blocklist::spawn_add(api.clone(), msg_tx.clone(), generation, url, category),

        UpdateAction::RemoveSite {
            generation,
            site_id,
        } => blocklist::spawn_remove(api.clone(), msg_tx.clone(), generation, site_id),

        UpdateAction::AddPreset {
            generation,
            category,
        } => blocklist::spawn_add_preset(api.clone(), msg_tx.clone(), generation, category),

        UpdateAction::LoadAnalytics { generation, days } => {
            analytics::spawn_load(api.clone(), msg_tx.clone(), generation, days)
        }
    }
}

fn spawn_health_check(api: ApiClient, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let (reachable, version) = match api.health().await {
            Ok(info) => (info.is_healthy(), info.version),
            Err(e) => {
                tracing::warn!("health check failed: {e}");
                (false, None)
            }
        };
        let _ = msg_tx
            .send(Message::HealthChecked { reachable, version })
            .await;
    });
}
