//! Color palette for the FocusGuard theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Blue; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Blue; // Primary accent (tabs, gauge)
pub const ACCENT_DIM: Color = Color::DarkGray; // Dimmed accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Backend reachable / success
pub const STATUS_RED: Color = Color::Red; // Errors / stop button
pub const STATUS_YELLOW: Color = Color::Yellow; // In-flight / warnings

// --- Domain ---
pub const STREAK_FLAME: Color = Color::LightRed; // Streak banner
pub const CHART_BAR: Color = Color::Blue; // Daily minutes bars
pub const CATEGORY_TAG: Color = Color::Cyan; // Site category badge
