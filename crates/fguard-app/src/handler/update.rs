//! Main update function - handles state transitions (TEA pattern)

use tracing::info;

use crate::message::Message;
use crate::state::{AppState, BackendHealth, Tab};

use super::{analytics, blocklist, keys::handle_key, timer, UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            // Tear the poll down here too; quitting must not leave a ticking
            // task behind while the terminal unwinds.
            state.timer.cancel_poll();
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::SwitchTab(tab) => switch_tab(state, tab),

        Message::HealthChecked { reachable, version } => {
            state.backend = if reachable {
                info!("backend reachable (version {:?})", version);
                BackendHealth::Reachable { version }
            } else {
                BackendHealth::Unreachable
            };
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Timer
        // ─────────────────────────────────────────────────────────
        Message::StartSession { minutes, mode } => timer::handle_start_session(state, minutes, mode),
        Message::SessionStarted {
            generation,
            minutes,
            mode,
            outcome,
        } => timer::handle_session_started(state, generation, minutes, mode, outcome),
        Message::StatusPolled { generation, status } => {
            timer::handle_status_polled(state, generation, status)
        }
        Message::StopSession { completed } => timer::handle_stop_session(state, completed),
        Message::SessionStopped {
            generation,
            completed,
            outcome,
        } => timer::handle_session_stopped(state, generation, completed, outcome),

        // ─────────────────────────────────────────────────────────
        // Blocklist
        // ─────────────────────────────────────────────────────────
        Message::SubmitUrl => blocklist::handle_submit_url(state),
        Message::RemoveSelectedSite => blocklist::handle_remove_selected(state),
        Message::AddPreset(category) => blocklist::handle_add_preset(state, category),
        Message::ReloadBlocklist => blocklist::handle_reload(state),
        Message::BlocklistFetched {
            generation,
            outcome,
        } => blocklist::handle_fetched(state, generation, outcome),
        Message::SiteAdded {
            generation,
            outcome,
        } => blocklist::handle_site_added(state, generation, outcome),
        Message::SiteRemoved {
            generation,
            outcome,
        } => blocklist::handle_site_removed(state, generation, outcome),
        Message::PresetAdded {
            generation,
            category,
            outcome,
        } => blocklist::handle_preset_added(state, generation, category, outcome),

        // ─────────────────────────────────────────────────────────
        // Analytics
        // ─────────────────────────────────────────────────────────
        Message::AnalyticsLoaded {
            generation,
            outcome,
        } => analytics::handle_loaded(state, generation, outcome),
    }
}

/// Activate `tab`. The entering view is reset to its mount state and, where
/// mounting implies a fetch, the fetch action is returned. The leaving view
/// is reset as well so nothing carries over between instances -- in
/// particular a running timer's poll loop is torn down.
fn switch_tab(state: &mut AppState, tab: Tab) -> UpdateResult {
    if state.active_tab == tab {
        return UpdateResult::none();
    }

    // Reset the view being left.
    match state.active_tab {
        Tab::Timer => state.timer.reset(),
        Tab::Blocklist => state.blocklist.reset(),
        Tab::Analytics => state.analytics.reset(),
    }

    state.active_tab = tab;

    // Mount the view being entered.
    match tab {
        Tab::Timer => UpdateResult::none(),
        Tab::Blocklist => {
            state.blocklist.reset();
            UpdateResult::action(UpdateAction::FetchBlocklist {
                generation: state.blocklist.generation,
            })
        }
        Tab::Analytics => {
            state.analytics.reset();
            UpdateResult::action(UpdateAction::LoadAnalytics {
                generation: state.analytics.generation,
                days: state.settings.analytics.window_days,
            })
        }
    }
}
