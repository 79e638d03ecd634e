//! # fguard-api - Backend HTTP Client
//!
//! Thin async client for the FocusGuard backend's HTTP/JSON interface,
//! grouped into the three resource namespaces the views consume:
//!
//! - [`FocusApi`] - start/stop a session, poll the countdown status
//! - [`BlocklistApi`] - list/add/remove entries, preset bulk-adds
//! - [`AnalyticsApi`] - overview, daily breakdown, streaks, history
//!
//! Every call is fire-once: no retry, no backoff, no caching. Transport
//! failures surface as [`Error::Http`](fguard_core::Error::Http); 4xx/5xx
//! responses are decoded into [`Error::Api`](fguard_core::Error::Api) with the
//! server's `{"error": ...}` message carried verbatim.

pub mod analytics;
pub mod blocklist;
pub mod client;
pub mod focus;

pub use analytics::AnalyticsApi;
pub use blocklist::{AddedSite, BlocklistApi, BlocklistPage, PresetOutcome};
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use focus::{FocusApi, StartedSession, StoppedSession};
