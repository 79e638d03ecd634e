//! State-transition tests for the update function
//!
//! `update()` performs no IO -- network effects come back as `UpdateAction`s
//! -- so the whole session/blocklist/analytics lifecycle is exercised here by
//! feeding messages and asserting on state and returned actions.

use fguard_core::{
    AnalyticsOverview, BlockedSite, FocusMode, FocusStatus, SiteCategory, StreakInfo,
};

use crate::handler::{update, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::{AnalyticsSnapshot, AppState, NoticeKind, Tab, TimerPhase};

fn active_status(remaining: i64) -> FocusStatus {
    FocusStatus {
        is_active: true,
        time_remaining: remaining,
        mode: Some(FocusMode::Pomodoro),
        duration_seconds: Some(1500),
        progress_percent: None,
    }
}

fn site(id: i64, url: &str) -> BlockedSite {
    BlockedSite {
        id,
        url: url.to_string(),
        category: SiteCategory::Custom,
    }
}

fn snapshot() -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        overview: AnalyticsOverview {
            total_minutes: 125.0,
            completed_sessions: 4,
            completion_rate: 80.0,
            total_sessions: 5,
            avg_session_length: 25.0,
            block_attempts: 0,
            period_days: 7,
        },
        daily: vec![],
        streaks: StreakInfo {
            current: 3,
            best: 7,
            total: 21,
        },
    }
}

/// Drive `update()` the way the event loop does: process follow-up messages
/// until none remain, collecting every action along the way.
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let UpdateResult { message, action } = update(state, msg);
        if let Some(action) = action {
            actions.push(action);
        }
        next = message;
    }
    actions
}

/// Acknowledge a start: feed the success result for the action `drive`
/// returned.
fn start_session(state: &mut AppState, minutes: u32, mode: FocusMode) {
    let actions = drive(
        state,
        Message::StartSession {
            minutes,
            mode: mode.clone(),
        },
    );
    assert!(matches!(actions[..], [UpdateAction::StartSession { .. }]));
    let actions = drive(
        state,
        Message::SessionStarted {
            generation: state.timer.generation,
            minutes,
            mode,
            outcome: Ok(()),
        },
    );
    assert!(matches!(actions[..], [UpdateAction::StartStatusPoll { .. }]));
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_successful_start_seeds_remaining_from_duration() {
    for (minutes, mode) in [
        (25, FocusMode::Pomodoro),
        (15, FocusMode::Quick),
        (90, FocusMode::Deepwork),
    ] {
        let mut state = AppState::default();
        start_session(&mut state, minutes, mode.clone());
        match &state.timer.phase {
            TimerPhase::Running {
                duration_secs,
                remaining_secs,
                mode: m,
                ..
            } => {
                assert_eq!(*duration_secs, minutes * 60);
                assert_eq!(*remaining_secs, minutes * 60);
                assert_eq!(*m, mode);
            }
            other => panic!("expected Running, got {other:?}"),
        }
    }
}

#[test]
fn test_failed_start_stays_idle_with_notice() {
    let mut state = AppState::default();
    let actions = drive(
        &mut state,
        Message::StartSession {
            minutes: 25,
            mode: FocusMode::Pomodoro,
        },
    );
    assert_eq!(actions.len(), 1);
    let generation = state.timer.generation;
    let actions = drive(
        &mut state,
        Message::SessionStarted {
            generation,
            minutes: 25,
            mode: FocusMode::Pomodoro,
            outcome: Err("connection refused".to_string()),
        },
    );
    assert!(actions.is_empty(), "no poll starts after a failed start");
    assert_eq!(state.timer.phase, TimerPhase::Idle);
    let notice = state.timer.notice.as_ref().expect("error notice");
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[test]
fn test_poll_overwrites_remaining_from_server() {
    let mut state = AppState::default();
    start_session(&mut state, 25, FocusMode::Pomodoro);
    let generation = state.timer.generation;

    drive(
        &mut state,
        Message::StatusPolled {
            generation,
            status: active_status(1234),
        },
    );
    assert!(matches!(
        state.timer.phase,
        TimerPhase::Running {
            remaining_secs: 1234,
            ..
        }
    ));
}

#[test]
fn test_poll_never_shows_negative_remaining() {
    let mut state = AppState::default();
    start_session(&mut state, 25, FocusMode::Pomodoro);
    let generation = state.timer.generation;

    drive(
        &mut state,
        Message::StatusPolled {
            generation,
            status: active_status(-5),
        },
    );
    // Expiry fired, but the displayed mirror is clamped at zero.
    match &state.timer.phase {
        TimerPhase::Running { remaining_secs, .. } => assert_eq!(*remaining_secs, 0),
        other => panic!("expected Running, got {other:?}"),
    }
}

#[test]
fn test_expiry_triggers_exactly_one_auto_stop() {
    let mut state = AppState::default();
    start_session(&mut state, 25, FocusMode::Pomodoro);
    let generation = state.timer.generation;

    let actions = drive(
        &mut state,
        Message::StatusPolled {
            generation,
            status: active_status(0),
        },
    );
    assert!(matches!(
        actions[..],
        [UpdateAction::StopSession {
            completed: true,
            ..
        }]
    ));

    // A second zero-tick while the stop is in flight must not double-send.
    let actions = drive(
        &mut state,
        Message::StatusPolled {
            generation,
            status: active_status(0),
        },
    );
    assert!(actions.is_empty());
}

#[test]
fn test_completed_stop_switches_to_analytics() {
    // Full expiry path: start(25, pomodoro), poll 1, poll 0, expect one
    // stop(true) and a tab switch to analytics.
    let mut state = AppState::default();
    start_session(&mut state, 25, FocusMode::Pomodoro);
    let generation = state.timer.generation;

    drive(
        &mut state,
        Message::StatusPolled {
            generation,
            status: active_status(1),
        },
    );
    let actions = drive(
        &mut state,
        Message::StatusPolled {
            generation,
            status: active_status(0),
        },
    );
    assert!(matches!(
        actions[..],
        [UpdateAction::StopSession {
            completed: true,
            ..
        }]
    ));

    let actions = drive(
        &mut state,
        Message::SessionStopped {
            generation,
            completed: true,
            outcome: Ok(()),
        },
    );
    assert_eq!(state.active_tab, Tab::Analytics);
    assert_eq!(state.timer.phase, TimerPhase::Idle);
    // Switching to analytics mounts it: exactly one load with the configured
    // window.
    assert!(matches!(
        actions[..],
        [UpdateAction::LoadAnalytics { days: 7, .. }]
    ));
}

#[test]
fn test_manual_stop_never_switches_tab() {
    let mut state = AppState::default();
    start_session(&mut state, 15, FocusMode::Quick);
    let generation = state.timer.generation;

    let actions = drive(&mut state, Message::StopSession { completed: false });
    assert!(matches!(
        actions[..],
        [UpdateAction::StopSession {
            completed: false,
            ..
        }]
    ));

    let actions = drive(
        &mut state,
        Message::SessionStopped {
            generation,
            completed: false,
            outcome: Ok(()),
        },
    );
    assert!(actions.is_empty());
    assert_eq!(state.active_tab, Tab::Timer);
    assert_eq!(state.timer.phase, TimerPhase::Idle);
}

#[test]
fn test_failed_stop_allows_retry() {
    let mut state = AppState::default();
    start_session(&mut state, 25, FocusMode::Pomodoro);
    let generation = state.timer.generation;

    drive(&mut state, Message::StopSession { completed: false });
    drive(
        &mut state,
        Message::SessionStopped {
            generation,
            completed: false,
            outcome: Err("timeout".to_string()),
        },
    );
    // Still running, and the in-flight marker is cleared so stop works again.
    assert!(state.timer.is_running());
    let actions = drive(&mut state, Message::StopSession { completed: false });
    assert_eq!(actions.len(), 1);
}

#[test]
fn test_stale_timer_messages_are_discarded() {
    let mut state = AppState::default();
    start_session(&mut state, 25, FocusMode::Pomodoro);
    let stale = state.timer.generation;

    // Tab switch resets the timer view; the old poll's results must bounce.
    drive(&mut state, Message::SwitchTab(Tab::Blocklist));
    drive(&mut state, Message::SwitchTab(Tab::Timer));
    assert_eq!(state.timer.phase, TimerPhase::Idle);

    let actions = drive(
        &mut state,
        Message::StatusPolled {
            generation: stale,
            status: active_status(100),
        },
    );
    assert!(actions.is_empty());
    assert_eq!(state.timer.phase, TimerPhase::Idle);

    let actions = drive(
        &mut state,
        Message::SessionStarted {
            generation: stale,
            minutes: 25,
            mode: FocusMode::Pomodoro,
            outcome: Ok(()),
        },
    );
    assert!(actions.is_empty());
    assert_eq!(state.timer.phase, TimerPhase::Idle);
}

#[test]
fn test_inactive_status_leaves_mirror_untouched() {
    let mut state = AppState::default();
    start_session(&mut state, 25, FocusMode::Pomodoro);
    let generation = state.timer.generation;

    let actions = drive(
        &mut state,
        Message::StatusPolled {
            generation,
            status: FocusStatus {
                is_active: false,
                time_remaining: 0,
                mode: None,
                duration_seconds: None,
                progress_percent: None,
            },
        },
    );
    assert!(actions.is_empty());
    assert!(matches!(
        state.timer.phase,
        TimerPhase::Running {
            remaining_secs: 1500,
            ..
        }
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Blocklist
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_blank_url_submission_is_a_no_op() {
    for input in ["", "   ", "\t "] {
        let mut state = AppState::default();
        state.active_tab = Tab::Blocklist;
        state.blocklist.url_buffer = input.to_string();
        let actions = drive(&mut state, Message::SubmitUrl);
        assert!(actions.is_empty(), "input {input:?} must not hit the network");
        assert!(!state.blocklist.busy);
    }
}

#[test]
fn test_submit_trims_and_dispatches_add() {
    let mut state = AppState::default();
    state.active_tab = Tab::Blocklist;
    state.blocklist.url_buffer = "  example.com  ".to_string();
    let actions = drive(&mut state, Message::SubmitUrl);
    match &actions[..] {
        [UpdateAction::AddSite { url, category, .. }] => {
            assert_eq!(url, "example.com");
            assert_eq!(*category, SiteCategory::Custom);
        }
        other => panic!("expected AddSite, got {other:?}"),
    }
    assert!(state.blocklist.busy);
}

#[test]
fn test_busy_flag_suppresses_duplicate_submissions() {
    let mut state = AppState::default();
    state.active_tab = Tab::Blocklist;
    state.blocklist.url_buffer = "example.com".to_string();
    assert_eq!(drive(&mut state, Message::SubmitUrl).len(), 1);
    // Second submit while the first is in flight
    assert!(drive(&mut state, Message::SubmitUrl).is_empty());
    // Presets are guarded by the same flag
    assert!(drive(&mut state, Message::AddPreset(SiteCategory::News)).is_empty());
}

#[test]
fn test_successful_add_clears_input_and_refetches() {
    let mut state = AppState::default();
    state.active_tab = Tab::Blocklist;
    state.blocklist.url_buffer = "example.com".to_string();
    drive(&mut state, Message::SubmitUrl);

    let generation = state.blocklist.generation;
    let actions = drive(
        &mut state,
        Message::SiteAdded {
            generation,
            outcome: Ok(()),
        },
    );
    assert!(matches!(actions[..], [UpdateAction::FetchBlocklist { .. }]));
    assert!(state.blocklist.url_buffer.is_empty());
    assert!(!state.blocklist.busy);

    // The refetch result is what updates the displayed count.
    drive(
        &mut state,
        Message::BlocklistFetched {
            generation,
            outcome: Ok(vec![site(1, "example.com")]),
        },
    );
    assert_eq!(state.blocklist.sites.len(), 1);
    assert_eq!(state.blocklist.sites[0].url, "example.com");
}

#[test]
fn test_add_failure_surfaces_server_message_verbatim() {
    let mut state = AppState::default();
    state.active_tab = Tab::Blocklist;
    state.blocklist.url_buffer = "example.com".to_string();
    drive(&mut state, Message::SubmitUrl);

    let generation = state.blocklist.generation;
    let actions = drive(
        &mut state,
        Message::SiteAdded {
            generation,
            outcome: Err("Site already blocked".to_string()),
        },
    );
    assert!(actions.is_empty(), "no refetch after a failed add");
    let notice = state.blocklist.notice.as_ref().expect("notice");
    assert_eq!(notice.text, "Site already blocked");
    assert!(!state.blocklist.busy);
}

#[test]
fn test_remove_refetches_on_success_and_logs_on_failure() {
    let mut state = AppState::default();
    state.active_tab = Tab::Blocklist;
    state
        .blocklist
        .set_sites(vec![site(1, "a.com"), site(2, "b.com")]);

    let actions = drive(&mut state, Message::RemoveSelectedSite);
    assert!(matches!(
        actions[..],
        [UpdateAction::RemoveSite { site_id: 1, .. }]
    ));

    let generation = state.blocklist.generation;
    let actions = drive(
        &mut state,
        Message::SiteRemoved {
            generation,
            outcome: Ok(()),
        },
    );
    assert!(matches!(actions[..], [UpdateAction::FetchBlocklist { .. }]));

    // Failure path: nothing to roll back, nothing refetched.
    let actions = drive(
        &mut state,
        Message::SiteRemoved {
            generation,
            outcome: Err("Site not found".to_string()),
        },
    );
    assert!(actions.is_empty());
    assert!(state.blocklist.notice.is_none());
}

#[test]
fn test_remove_with_empty_list_is_a_no_op() {
    let mut state = AppState::default();
    state.active_tab = Tab::Blocklist;
    assert!(drive(&mut state, Message::RemoveSelectedSite).is_empty());
}

#[test]
fn test_preset_reports_added_count() {
    let mut state = AppState::default();
    state.active_tab = Tab::Blocklist;
    let actions = drive(&mut state, Message::AddPreset(SiteCategory::SocialMedia));
    assert!(matches!(
        actions[..],
        [UpdateAction::AddPreset {
            category: SiteCategory::SocialMedia,
            ..
        }]
    ));

    let generation = state.blocklist.generation;
    let actions = drive(
        &mut state,
        Message::PresetAdded {
            generation,
            category: SiteCategory::SocialMedia,
            outcome: Ok(6),
        },
    );
    assert!(matches!(actions[..], [UpdateAction::FetchBlocklist { .. }]));
    let notice = state.blocklist.notice.as_ref().expect("notice");
    assert_eq!(notice.text, "Added 6 sites from Social Media");
    assert_eq!(notice.kind, NoticeKind::Info);
}

#[test]
fn test_stale_blocklist_fetch_is_discarded() {
    let mut state = AppState::default();
    drive(&mut state, Message::SwitchTab(Tab::Blocklist));
    let stale = state.blocklist.generation;

    // Leaving and re-entering the tab makes a new view instance.
    drive(&mut state, Message::SwitchTab(Tab::Timer));
    drive(&mut state, Message::SwitchTab(Tab::Blocklist));

    drive(
        &mut state,
        Message::BlocklistFetched {
            generation: stale,
            outcome: Ok(vec![site(1, "stale.com")]),
        },
    );
    assert!(state.blocklist.sites.is_empty());
    assert!(!state.blocklist.loaded);
}

// ─────────────────────────────────────────────────────────────────────────────
// Analytics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_entering_analytics_mounts_one_load() {
    let mut state = AppState::default();
    let actions = drive(&mut state, Message::SwitchTab(Tab::Analytics));
    assert!(matches!(
        actions[..],
        [UpdateAction::LoadAnalytics { days: 7, .. }]
    ));
    assert!(state.analytics.is_loading());
}

#[test]
fn test_analytics_renders_only_after_join() {
    let mut state = AppState::default();
    drive(&mut state, Message::SwitchTab(Tab::Analytics));

    let generation = state.analytics.generation;
    drive(
        &mut state,
        Message::AnalyticsLoaded {
            generation,
            outcome: Ok(Box::new(snapshot())),
        },
    );
    let data = state.analytics.data.as_ref().expect("snapshot");
    assert_eq!(data.overview.completed_sessions, 4);
    assert_eq!(data.streaks.current, 3);
}

#[test]
fn test_analytics_failure_stays_loading_forever() {
    let mut state = AppState::default();
    drive(&mut state, Message::SwitchTab(Tab::Analytics));

    let generation = state.analytics.generation;
    let actions = drive(
        &mut state,
        Message::AnalyticsLoaded {
            generation,
            outcome: Err("connection refused".to_string()),
        },
    );
    assert!(actions.is_empty(), "no retry is issued");
    assert!(state.analytics.is_loading());
}

#[test]
fn test_stale_analytics_load_is_discarded() {
    let mut state = AppState::default();
    drive(&mut state, Message::SwitchTab(Tab::Analytics));
    let stale = state.analytics.generation;
    drive(&mut state, Message::SwitchTab(Tab::Timer));

    drive(
        &mut state,
        Message::AnalyticsLoaded {
            generation: stale,
            outcome: Ok(Box::new(snapshot())),
        },
    );
    assert!(state.analytics.data.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Shell
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_switch_to_same_tab_is_a_no_op() {
    let mut state = AppState::default();
    drive(&mut state, Message::SwitchTab(Tab::Blocklist));
    let generation = state.blocklist.generation;
    let actions = drive(&mut state, Message::SwitchTab(Tab::Blocklist));
    assert!(actions.is_empty());
    assert_eq!(state.blocklist.generation, generation);
}

#[test]
fn test_quit_sets_flag() {
    let mut state = AppState::default();
    drive(&mut state, Message::Quit);
    assert!(state.should_quit);
}

#[test]
fn test_health_check_updates_backend_state() {
    use crate::state::BackendHealth;

    let mut state = AppState::default();
    drive(
        &mut state,
        Message::HealthChecked {
            reachable: true,
            version: Some("1.0.0".to_string()),
        },
    );
    assert_eq!(
        state.backend,
        BackendHealth::Reachable {
            version: Some("1.0.0".to_string())
        }
    );

    drive(
        &mut state,
        Message::HealthChecked {
            reachable: false,
            version: None,
        },
    );
    assert_eq!(state.backend, BackendHealth::Unreachable);
}
