//! Domain types mirrored from the backend's wire format
//!
//! Every struct here deserializes directly from the backend's JSON payloads.
//! Unknown fields are ignored so the client keeps working when the server
//! grows its responses. The `mode` and `category` fields are open-ended
//! strings on the wire; [`FocusMode`] and [`SiteCategory`] close them into
//! enums with an `Other` fallback so a server-introduced value never fails
//! deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Focus Sessions
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of focus session, as sent in `POST /focus/start`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FocusMode {
    Pomodoro,
    Quick,
    Deepwork,
    /// Server-introduced mode this client does not know about.
    Other(String),
}

impl FocusMode {
    /// Wire representation, e.g. `"pomodoro"`.
    pub fn as_str(&self) -> &str {
        match self {
            FocusMode::Pomodoro => "pomodoro",
            FocusMode::Quick => "quick",
            FocusMode::Deepwork => "deepwork",
            FocusMode::Other(s) => s,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &str {
        match self {
            FocusMode::Pomodoro => "Pomodoro",
            FocusMode::Quick => "Quick",
            FocusMode::Deepwork => "Deep Work",
            FocusMode::Other(s) => s,
        }
    }
}

impl From<String> for FocusMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pomodoro" => FocusMode::Pomodoro,
            "quick" => FocusMode::Quick,
            "deepwork" => FocusMode::Deepwork,
            _ => FocusMode::Other(s),
        }
    }
}

impl From<FocusMode> for String {
    fn from(mode: FocusMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for FocusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable session duration shown on the timer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerPreset {
    pub label: &'static str,
    pub minutes: u32,
    pub mode: FocusMode,
}

/// The three durations the timer offers, in display order.
pub const TIMER_PRESETS: [TimerPreset; 3] = [
    TimerPreset {
        label: "Pomodoro",
        minutes: 25,
        mode: FocusMode::Pomodoro,
    },
    TimerPreset {
        label: "Quick",
        minutes: 15,
        mode: FocusMode::Quick,
    },
    TimerPreset {
        label: "Deep Work",
        minutes: 90,
        mode: FocusMode::Deepwork,
    },
];

/// Server-reported countdown state from `GET /focus/status`.
///
/// The client never owns authoritative timer state; it mirrors this snapshot
/// once per second while a session runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusStatus {
    pub is_active: bool,
    /// Seconds left on the server's countdown. Signed because the server may
    /// report zero-or-below at the expiry boundary.
    #[serde(default)]
    pub time_remaining: i64,
    #[serde(default)]
    pub mode: Option<FocusMode>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub progress_percent: Option<f64>,
}

impl FocusStatus {
    /// Remaining seconds clamped at zero, which is what the UI displays.
    pub fn remaining_clamped(&self) -> u32 {
        self.time_remaining.max(0) as u32
    }

    /// Whether the server considers the active session expired.
    pub fn is_expired(&self) -> bool {
        self.is_active && self.time_remaining <= 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Blocklist
// ─────────────────────────────────────────────────────────────────────────────

/// Category tag on a blocklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteCategory {
    Custom,
    SocialMedia,
    News,
    Entertainment,
    /// Server-introduced category this client does not know about.
    Other(String),
}

impl SiteCategory {
    /// Wire representation, e.g. `"social_media"`.
    pub fn as_str(&self) -> &str {
        match self {
            SiteCategory::Custom => "custom",
            SiteCategory::SocialMedia => "social_media",
            SiteCategory::News => "news",
            SiteCategory::Entertainment => "entertainment",
            SiteCategory::Other(s) => s,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &str {
        match self {
            SiteCategory::Custom => "Custom",
            SiteCategory::SocialMedia => "Social Media",
            SiteCategory::News => "News",
            SiteCategory::Entertainment => "Entertainment",
            SiteCategory::Other(s) => s,
        }
    }
}

impl From<String> for SiteCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "custom" => SiteCategory::Custom,
            "social_media" => SiteCategory::SocialMedia,
            "news" => SiteCategory::News,
            "entertainment" => SiteCategory::Entertainment,
            _ => SiteCategory::Other(s),
        }
    }
}

impl From<SiteCategory> for String {
    fn from(category: SiteCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for SiteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The preset categories offered for bulk-add, in display order.
pub const PRESET_CATEGORIES: [SiteCategory; 3] = [
    SiteCategory::SocialMedia,
    SiteCategory::News,
    SiteCategory::Entertainment,
];

/// A single blocklist entry. Identity is the server-assigned id; url and
/// category are immutable from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedSite {
    pub id: i64,
    pub url: String,
    pub category: SiteCategory,
}

// ─────────────────────────────────────────────────────────────────────────────
// Analytics
// ─────────────────────────────────────────────────────────────────────────────

/// Aggregate report over a trailing N-day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub total_minutes: f64,
    pub completed_sessions: u32,
    pub completion_rate: f64,
    #[serde(default)]
    pub total_sessions: u32,
    #[serde(default)]
    pub avg_session_length: f64,
    #[serde(default)]
    pub block_attempts: u32,
    #[serde(default)]
    pub period_days: u32,
}

/// One day's focus minutes in a trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub minutes: f64,
    #[serde(default)]
    pub sessions: u32,
}

/// Consecutive-day counts, recomputed server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    pub current: u32,
    pub best: u32,
    #[serde(default)]
    pub total: u32,
}

/// One entry of the `GET /analytics/history` feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    pub session_id: String,
    pub mode: FocusMode,
    pub duration_minutes: f64,
    pub completed_minutes: f64,
    pub completed: bool,
    pub date: NaiveDate,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Health
// ─────────────────────────────────────────────────────────────────────────────

/// Response of the backend's `GET /health` probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthInfo {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
