//! Centralized theme for the FocusGuard TUI.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Nerd Font glyph constants with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
