//! Bottom status bar with per-view key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use fguard_app::state::{AppState, BlocklistInput};
use fguard_app::Tab;

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.active_tab {
            Tab::Timer if self.state.timer.is_running() => {
                " s stop · Tab/Shift-Tab switch view · q quit"
            }
            Tab::Timer => " 1-3 start preset · Tab/Shift-Tab switch view · q quit",
            Tab::Blocklist if self.state.blocklist.input == BlocklistInput::EditingUrl => {
                " type url · Enter add · Esc cancel"
            }
            Tab::Blocklist => {
                " a add · d delete · 1-3 quick add · j/k move · r refresh · Tab switch · q quit"
            }
            Tab::Analytics => " Tab/Shift-Tab switch view · q quit",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(self.hints(), styles::key_hint())))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fguard_core::FocusMode;

    #[test]
    fn test_hints_follow_timer_phase() {
        let mut state = AppState::default();
        assert!(StatusBar::new(&state).hints().contains("1-3 start preset"));

        state.timer.phase = fguard_app::state::TimerPhase::Running {
            mode: FocusMode::Pomodoro,
            duration_secs: 1500,
            remaining_secs: 1500,
            stopping: false,
        };
        assert!(StatusBar::new(&state).hints().contains("s stop"));
    }

    #[test]
    fn test_hints_follow_blocklist_input_mode() {
        let mut state = AppState::default();
        state.active_tab = Tab::Blocklist;
        assert!(StatusBar::new(&state).hints().contains("a add"));

        state.blocklist.input = BlocklistInput::EditingUrl;
        assert!(StatusBar::new(&state).hints().contains("Enter add"));
    }
}
