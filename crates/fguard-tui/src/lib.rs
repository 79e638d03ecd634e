//! # fguard-tui - Terminal UI for the FocusGuard client
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! rendering, the theme, and the async runner that wires the fguard-app state
//! machine to the terminal and the API client.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
