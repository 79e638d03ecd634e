//! Application state (Model in TEA pattern)
//!
//! One struct per view, owned by [`AppState`]. No state is shared between
//! views: switching tabs resets the entering view to its mount state, and the
//! per-view `generation` counter lets `update()` discard task results that
//! were spawned for a view instance that no longer exists.

use fguard_core::{AnalyticsOverview, BlockedSite, DailyPoint, FocusMode, StreakInfo};

use crate::config::Settings;
use crate::poll::PollHandle;

/// The three top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Timer,
    Blocklist,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Timer, Tab::Blocklist, Tab::Analytics];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Timer => "Focus Timer",
            Tab::Blocklist => "Blocklist",
            Tab::Analytics => "Analytics",
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Timer => Tab::Blocklist,
            Tab::Blocklist => Tab::Analytics,
            Tab::Analytics => Tab::Timer,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Timer => Tab::Analytics,
            Tab::Blocklist => Tab::Timer,
            Tab::Analytics => Tab::Blocklist,
        }
    }
}

/// Severity of a view notice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A short status line shown by the view that produced it. The TUI analog of
/// the browser alert the backend's web client used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer view
// ─────────────────────────────────────────────────────────────────────────────

/// Timer view phase. Two states: no session, or mirroring a server session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running {
        mode: FocusMode,
        duration_secs: u32,
        remaining_secs: u32,
        /// Set once a stop request is in flight so expiry triggers exactly
        /// one auto-stop.
        stopping: bool,
    },
}

#[derive(Debug, Default)]
pub struct TimerState {
    pub generation: u64,
    pub phase: TimerPhase,
    pub notice: Option<Notice>,
    poll: Option<PollHandle>,
}

impl TimerState {
    /// Back to the mount state: Idle, no notice, poll torn down, stale task
    /// results fenced off by the generation bump.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = TimerPhase::Idle;
        self.notice = None;
        self.cancel_poll();
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running { .. })
    }

    /// Store the handle for the active poll task. A previous handle, if any,
    /// is cancelled by drop.
    pub fn set_poll(&mut self, handle: PollHandle) {
        self.poll = Some(handle);
    }

    pub fn cancel_poll(&mut self) {
        if let Some(handle) = self.poll.take() {
            handle.cancel();
        }
    }

    /// Fraction of the session elapsed, in `0.0..=1.0`, for the progress
    /// gauge.
    pub fn progress(&self) -> f64 {
        match &self.phase {
            TimerPhase::Running {
                duration_secs,
                remaining_secs,
                ..
            } if *duration_secs > 0 => {
                f64::from(duration_secs - remaining_secs.min(duration_secs))
                    / f64::from(*duration_secs)
            }
            _ => 0.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Blocklist view
// ─────────────────────────────────────────────────────────────────────────────

/// Input focus on the blocklist view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlocklistInput {
    /// Keys navigate the list and trigger actions.
    #[default]
    Normal,
    /// Keys type into the url field.
    EditingUrl,
}

#[derive(Debug, Default)]
pub struct BlocklistState {
    pub generation: u64,
    pub sites: Vec<BlockedSite>,
    /// False until the first fetch lands.
    pub loaded: bool,
    pub selected: usize,
    pub input: BlocklistInput,
    pub url_buffer: String,
    /// True while an add or preset-add is in flight; suppresses duplicate
    /// submissions.
    pub busy: bool,
    pub notice: Option<Notice>,
}

impl BlocklistState {
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    pub fn selected_site(&self) -> Option<&BlockedSite> {
        self.sites.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.sites.is_empty() {
            self.selected = (self.selected + 1).min(self.sites.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Replace the snapshot with a fresh fetch, keeping the cursor in bounds.
    pub fn set_sites(&mut self, sites: Vec<BlockedSite>) {
        self.sites = sites;
        self.loaded = true;
        if self.selected >= self.sites.len() {
            self.selected = self.sites.len().saturating_sub(1);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analytics view
// ─────────────────────────────────────────────────────────────────────────────

/// The three joined reports the analytics view renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub overview: AnalyticsOverview,
    pub daily: Vec<DailyPoint>,
    pub streaks: StreakInfo,
}

#[derive(Debug, Default)]
pub struct AnalyticsState {
    pub generation: u64,
    /// `None` means loading. All three reports arrive together or not at
    /// all; there is no partial render.
    pub data: Option<AnalyticsSnapshot>,
}

impl AnalyticsState {
    pub fn reset(&mut self) {
        self.generation += 1;
        self.data = None;
    }

    pub fn is_loading(&self) -> bool {
        self.data.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Root state
// ─────────────────────────────────────────────────────────────────────────────

/// Backend reachability as reported by the startup health probe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Reachable {
        version: Option<String>,
    },
    Unreachable,
}

/// The whole Model. The active tab is the only piece of cross-view state.
#[derive(Debug)]
pub struct AppState {
    pub active_tab: Tab,
    pub timer: TimerState,
    pub blocklist: BlocklistState,
    pub analytics: AnalyticsState,
    pub backend: BackendHealth,
    pub settings: Settings,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            active_tab: Tab::Timer,
            timer: TimerState::default(),
            blocklist: BlocklistState::default(),
            analytics: AnalyticsState::default(),
            backend: BackendHealth::Unknown,
            settings,
            should_quit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
