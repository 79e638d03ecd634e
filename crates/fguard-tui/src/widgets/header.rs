//! Top header: app mark plus backend reachability

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use fguard_app::state::BackendHealth;

use crate::theme::{styles, IconSet};

pub struct MainHeader<'a> {
    backend: &'a BackendHealth,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(backend: &'a BackendHealth, icons: IconSet) -> Self {
        Self { backend, icons }
    }

    fn backend_span(&self) -> Span<'static> {
        match self.backend {
            BackendHealth::Unknown => Span::styled(
                format!("{} checking backend", self.icons.dot()),
                styles::backend_unknown(),
            ),
            BackendHealth::Reachable { version } => {
                let label = match version {
                    Some(v) => format!("{} backend v{v}", self.icons.dot()),
                    None => format!("{} backend up", self.icons.dot()),
                };
                Span::styled(label, styles::backend_up())
            }
            BackendHealth::Unreachable => Span::styled(
                format!("{} backend unreachable", self.icons.dot()),
                styles::backend_down(),
            ),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.backend_span();
        let title = Line::from(vec![
            Span::raw(" "),
            Span::raw(self.icons.shield()),
            Span::raw(" "),
            Span::styled("FocusGuard", styles::app_title()),
            Span::styled("  distraction-free productivity", styles::subtitle()),
        ]);

        Paragraph::new(title).render(area, buf);

        // Right-aligned reachability, if it fits.
        let status_width = status.content.len() as u16;
        if area.width > status_width + 1 {
            let status_area = Rect::new(
                area.x + area.width - status_width - 1,
                area.y,
                status_width,
                1,
            );
            Paragraph::new(Line::from(status)).render(status_area, buf);
        }
    }
}
