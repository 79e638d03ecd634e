//! Timer view handlers: start, poll, stop lifecycle

use tracing::{info, warn};

use fguard_core::{FocusMode, FocusStatus};

use crate::message::Message;
use crate::state::{AppState, Notice, Tab, TimerPhase};

use super::{UpdateAction, UpdateResult};

/// User picked a preset. The view stays Idle until the start call succeeds;
/// there is no local-only fallback countdown.
pub(crate) fn handle_start_session(
    state: &mut AppState,
    minutes: u32,
    mode: FocusMode,
) -> UpdateResult {
    state.timer.notice = None;
    UpdateResult::action(UpdateAction::StartSession {
        generation: state.timer.generation,
        minutes,
        mode,
    })
}

pub(crate) fn handle_session_started(
    state: &mut AppState,
    generation: u64,
    minutes: u32,
    mode: FocusMode,
    outcome: Result<(), String>,
) -> UpdateResult {
    if generation != state.timer.generation {
        return UpdateResult::none();
    }

    match outcome {
        Ok(()) => {
            info!("session started: {} min {}", minutes, mode);
            // Local mirrors seed from the request; the poll overwrites them
            // with the server's countdown from here on.
            state.timer.phase = TimerPhase::Running {
                mode,
                duration_secs: minutes * 60,
                remaining_secs: minutes * 60,
                stopping: false,
            };
            UpdateResult::action(UpdateAction::StartStatusPoll {
                generation: state.timer.generation,
            })
        }
        Err(reason) => {
            warn!("session start failed: {reason}");
            state.timer.notice = Some(Notice::error(
                "Failed to start session. Is the backend running?",
            ));
            UpdateResult::none()
        }
    }
}

/// One successful poll tick. The server's remaining time overwrites the local
/// mirror (never below zero); expiry triggers exactly one auto-stop with
/// `completed = true`.
pub(crate) fn handle_status_polled(
    state: &mut AppState,
    generation: u64,
    status: FocusStatus,
) -> UpdateResult {
    if generation != state.timer.generation {
        return UpdateResult::none();
    }

    let TimerPhase::Running {
        remaining_secs,
        stopping,
        ..
    } = &mut state.timer.phase
    else {
        return UpdateResult::none();
    };

    if !status.is_active {
        // Stopped elsewhere (or expired and already finalized server-side);
        // keep mirroring until our own stop path runs.
        return UpdateResult::none();
    }

    *remaining_secs = status.remaining_clamped();

    if status.is_expired() && !*stopping {
        *stopping = true;
        return UpdateResult::message(Message::StopSession { completed: true });
    }

    UpdateResult::none()
}

/// Stop intent, from the `s` key (completed=false) or expiry (completed=true).
pub(crate) fn handle_stop_session(state: &mut AppState, completed: bool) -> UpdateResult {
    let TimerPhase::Running { stopping, .. } = &mut state.timer.phase else {
        return UpdateResult::none();
    };
    // A manual stop while the auto-stop is in flight must not double-send.
    if *stopping && !completed {
        return UpdateResult::none();
    }
    *stopping = true;
    UpdateResult::action(UpdateAction::StopSession {
        generation: state.timer.generation,
        completed,
    })
}

/// Stop call finished. On success the view collapses to Idle (remaining and
/// duration both zero) without re-verifying server state, and natural expiry
/// switches the shell to the analytics tab.
pub(crate) fn handle_session_stopped(
    state: &mut AppState,
    generation: u64,
    completed: bool,
    outcome: Result<(), String>,
) -> UpdateResult {
    if generation != state.timer.generation {
        return UpdateResult::none();
    }

    match outcome {
        Ok(()) => {
            info!("session stopped (completed: {completed})");
            state.timer.reset();
            if completed {
                // The only inter-view signal in the system.
                UpdateResult::message(Message::SwitchTab(Tab::Analytics))
            } else {
                UpdateResult::none()
            }
        }
        Err(reason) => {
            warn!("session stop failed: {reason}");
            // Clear the in-flight marker so the next expiry tick or keypress
            // can try again.
            if let TimerPhase::Running { stopping, .. } = &mut state.timer.phase {
                *stopping = false;
            }
            state.timer.notice = Some(Notice::error("Failed to stop session"));
            UpdateResult::none()
        }
    }
}
