//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use fguard_app::state::AppState;
use fguard_app::Tab;

use crate::layout;
use crate::theme::{palette, IconSet};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to the application state: the same `AppState` always
/// draws the same frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(&state.backend, icons),
        areas.header,
    );
    frame.render_widget(widgets::TabBar::new(state.active_tab, icons), areas.tabs);

    match state.active_tab {
        Tab::Timer => frame.render_widget(widgets::TimerPanel::new(&state.timer), areas.body),
        Tab::Blocklist => frame.render_widget(
            widgets::BlocklistPanel::new(&state.blocklist, icons),
            areas.body,
        ),
        Tab::Analytics => frame.render_widget(
            widgets::AnalyticsPanel::new(&state.analytics, icons),
            areas.body,
        ),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
