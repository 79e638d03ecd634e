//! Terminal-agnostic key representation
//!
//! The TUI crate maps crossterm key events into this enum so the handlers
//! (and their tests) never depend on a terminal backend.

/// A single key press, normalized from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    /// A character pressed with Ctrl held (e.g. Ctrl+C).
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
}
