//! Tab navigation row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use fguard_app::Tab;

use crate::theme::{styles, IconSet};

pub struct TabBar {
    active: Tab,
    icons: IconSet,
}

impl TabBar {
    pub fn new(active: Tab, icons: IconSet) -> Self {
        Self { active, icons }
    }

    fn icon_for(&self, tab: Tab) -> &'static str {
        match tab {
            Tab::Timer => self.icons.clock(),
            Tab::Blocklist => self.icons.globe(),
            Tab::Analytics => self.icons.chart(),
        }
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line<'static>> = Tab::ALL
            .iter()
            .map(|tab| {
                Line::from(vec![
                    Span::raw(self.icon_for(*tab)),
                    Span::raw(" "),
                    Span::raw(tab.title()),
                ])
            })
            .collect();

        let selected = Tab::ALL.iter().position(|t| *t == self.active).unwrap_or(0);

        Tabs::new(titles)
            .select(selected)
            .style(styles::tab_inactive())
            .highlight_style(styles::tab_active())
            .divider(Span::styled("|", styles::muted()))
            .render(area, buf);
    }
}
