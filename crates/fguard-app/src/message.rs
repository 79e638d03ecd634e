//! Message types for the application (TEA pattern)

use fguard_core::{BlockedSite, FocusMode, FocusStatus, SiteCategory};

use crate::input_key::InputKey;
use crate::state::{AnalyticsSnapshot, Tab};

/// All possible messages/actions in the application.
///
/// Task-completion messages carry the `generation` of the view instance they
/// were spawned for; `update()` discards results whose generation no longer
/// matches (the view was reset or the user switched tabs mid-request).
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws
    Tick,

    /// Quit the application
    Quit,

    /// Activate a tab, resetting the entering view to its mount state
    SwitchTab(Tab),

    /// Startup health probe finished
    HealthChecked {
        reachable: bool,
        version: Option<String>,
    },

    // ─────────────────────────────────────────────────────────
    // Timer Intents
    // ─────────────────────────────────────────────────────────
    /// User picked a preset duration
    StartSession { minutes: u32, mode: FocusMode },
    /// Stop the running session; `completed` marks natural expiry
    StopSession { completed: bool },

    // ─────────────────────────────────────────────────────────
    // Timer Task Results
    // ─────────────────────────────────────────────────────────
    /// Start call finished
    SessionStarted {
        generation: u64,
        minutes: u32,
        mode: FocusMode,
        outcome: Result<(), String>,
    },
    /// One status poll tick came back successfully
    StatusPolled { generation: u64, status: FocusStatus },
    /// Stop call finished
    SessionStopped {
        generation: u64,
        completed: bool,
        outcome: Result<(), String>,
    },

    // ─────────────────────────────────────────────────────────
    // Blocklist Intents
    // ─────────────────────────────────────────────────────────
    /// Submit the url input field
    SubmitUrl,
    /// Remove the entry under the cursor
    RemoveSelectedSite,
    /// Bulk-add a preset category
    AddPreset(SiteCategory),
    /// Re-fetch the list on demand
    ReloadBlocklist,

    // ─────────────────────────────────────────────────────────
    // Blocklist Task Results
    // ─────────────────────────────────────────────────────────
    BlocklistFetched {
        generation: u64,
        outcome: Result<Vec<BlockedSite>, String>,
    },
    SiteAdded {
        generation: u64,
        outcome: Result<(), String>,
    },
    SiteRemoved {
        generation: u64,
        outcome: Result<(), String>,
    },
    PresetAdded {
        generation: u64,
        category: SiteCategory,
        outcome: Result<u32, String>,
    },

    // ─────────────────────────────────────────────────────────
    // Analytics Task Results
    // ─────────────────────────────────────────────────────────
    /// The three joined reports, or the first failure
    AnalyticsLoaded {
        generation: u64,
        outcome: Result<Box<AnalyticsSnapshot>, String>,
    },
}
