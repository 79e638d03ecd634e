//! Semantic style builders on top of the palette

use ratatui::style::{Modifier, Style};

use fguard_app::state::NoticeKind;

use super::palette;

pub fn app_title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn tab_active() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn panel_border() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn panel_title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn clock() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn gauge() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn selected_row() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn category_tag() -> Style {
    Style::default().fg(palette::CATEGORY_TAG)
}

pub fn muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn stat_label() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn stat_value() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn streak_banner() -> Style {
    Style::default()
        .fg(palette::STREAK_FLAME)
        .add_modifier(Modifier::BOLD)
}

pub fn key_hint() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn backend_up() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn backend_down() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn backend_unknown() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn notice(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Info => Style::default().fg(palette::STATUS_GREEN),
        NoticeKind::Error => Style::default().fg(palette::STATUS_RED),
    }
}
