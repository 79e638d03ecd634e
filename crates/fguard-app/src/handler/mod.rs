//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers, including url input capture
//! - `timer`: Timer view handlers (start/poll/stop lifecycle)
//! - `blocklist`: Blocklist view handlers (list/add/remove/preset)
//! - `analytics`: Analytics view handlers

pub(crate) mod analytics;
pub(crate) mod blocklist;
pub(crate) mod keys;
pub(crate) mod timer;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use fguard_core::{FocusMode, SiteCategory};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update.
///
/// Each one spawns a background API task; the task reports back as a
/// [`Message`] carrying the same `generation` it was given here.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Probe `GET /health` (runs at startup)
    CheckHealth,

    /// Issue the start call for a new focus session
    StartSession {
        generation: u64,
        minutes: u32,
        mode: FocusMode,
    },

    /// Begin the 1-second status poll loop for the running session
    StartStatusPoll { generation: u64 },

    /// Issue the stop call for the running session
    StopSession { generation: u64, completed: bool },

    /// Fetch the full blocklist
    FetchBlocklist { generation: u64 },

    /// Add a single url to the blocklist
    AddSite {
        generation: u64,
        url: String,
        category: SiteCategory,
    },

    /// Remove one entry by server id
    RemoveSite { generation: u64, site_id: i64 },

    /// Bulk-add a preset category
    AddPreset {
        generation: u64,
        category: SiteCategory,
    },

    /// Issue the three analytics reads and join them
    LoadAnalytics { generation: u64, days: u32 },
}

/// Result of processing one message: an optional follow-up message and/or an
/// action for the event loop to perform.
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
