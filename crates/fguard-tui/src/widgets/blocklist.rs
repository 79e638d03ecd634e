//! Blocklist view: url input, preset shortcuts, and the site list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use fguard_core::PRESET_CATEGORIES;

use fguard_app::state::{BlocklistInput, BlocklistState};

use crate::theme::{styles, IconSet};

pub struct BlocklistPanel<'a> {
    state: &'a BlocklistState,
    icons: IconSet,
}

impl<'a> BlocklistPanel<'a> {
    pub fn new(state: &'a BlocklistState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn input_line(&self) -> Line<'_> {
        match self.state.input {
            BlocklistInput::EditingUrl => Line::from(vec![
                Span::styled(" url: ", styles::stat_label()),
                Span::styled(self.state.url_buffer.as_str(), styles::stat_value()),
                Span::styled("_", styles::selected_row()),
            ]),
            BlocklistInput::Normal => Line::from(Span::styled(
                " press a to add a site",
                styles::muted(),
            )),
        }
    }

    fn presets_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(" quick add:", styles::stat_label())];
        for (i, category) in PRESET_CATEGORIES.iter().enumerate() {
            spans.push(Span::styled(
                format!("  [{}] {}", i + 1, category.label()),
                styles::muted(),
            ));
        }
        if self.state.busy {
            spans.push(Span::styled("  working...", styles::backend_unknown()));
        }
        Line::from(spans)
    }

    fn site_items(&self) -> Vec<ListItem<'_>> {
        self.state
            .sites
            .iter()
            .map(|site| {
                ListItem::new(Line::from(vec![
                    Span::raw(" "),
                    Span::raw(self.icons.globe()),
                    Span::raw(" "),
                    Span::raw(site.url.as_str()),
                    Span::styled(
                        format!("  [{}]", site.category.label()),
                        styles::category_tag(),
                    ),
                ]))
            })
            .collect()
    }
}

impl Widget for BlocklistPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border())
            .title(Span::styled(
                format!(" Blocked Sites ({}) ", self.state.sites.len()),
                styles::panel_title(),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        Paragraph::new(self.input_line()).render(chunks[0], buf);
        Paragraph::new(self.presets_line()).render(chunks[1], buf);

        if let Some(notice) = &self.state.notice {
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", notice.text),
                styles::notice(notice.kind),
            )))
            .render(chunks[2], buf);
        }

        if self.state.sites.is_empty() {
            let text = if self.state.loaded {
                " No sites blocked yet"
            } else {
                " Loading blocklist..."
            };
            Paragraph::new(Line::from(Span::styled(text, styles::muted())))
                .render(chunks[3], buf);
            return;
        }

        let mut list_state = ListState::default().with_selected(Some(self.state.selected));
        let list = List::new(self.site_items())
            .highlight_style(styles::selected_row())
            .highlight_symbol(">");
        StatefulWidget::render(list, chunks[3], buf, &mut list_state);
    }
}
