//! Configuration file parsing for the FocusGuard client
//!
//! Supports `~/.config/focusguard/config.toml` (platform-appropriate config
//! dir via `dirs`), with CLI overrides applied by the binary.

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings};
pub use types::{AnalyticsSettings, ServerSettings, Settings, UiSettings};
