//! # fguard-core - Core Domain Types
//!
//! Foundation crate for the FocusGuard terminal client. Provides the domain
//! types mirrored from the backend's wire format, error handling, and logging
//! initialization.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`FocusMode`] - Session kind (pomodoro, quick, deepwork) with a fallback variant
//! - [`FocusStatus`] - Server-reported countdown state, fetched by polling
//! - [`BlockedSite`] - A single blocklist entry
//! - [`SiteCategory`] - Blocklist category (custom, social_media, ...) with a fallback variant
//! - [`AnalyticsOverview`], [`DailyPoint`], [`StreakInfo`] - Aggregate reports
//! - [`SessionRecord`] - One entry of the session history feed
//! - [`TIMER_PRESETS`] - The three selectable session durations
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use fguard_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all FocusGuard crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{
    AnalyticsOverview, BlockedSite, DailyPoint, FocusMode, FocusStatus, HealthInfo, SessionRecord,
    SiteCategory, StreakInfo, TimerPreset, PRESET_CATEGORIES, TIMER_PRESETS,
};
