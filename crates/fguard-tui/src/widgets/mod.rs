//! Widgets composing the FocusGuard screen

pub mod analytics;
pub mod blocklist;
pub mod header;
pub mod status_bar;
pub mod tab_bar;
pub mod timer;

pub use analytics::AnalyticsPanel;
pub use blocklist::BlocklistPanel;
pub use header::MainHeader;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use timer::TimerPanel;
