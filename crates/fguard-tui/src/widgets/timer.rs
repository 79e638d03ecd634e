//! Timer view: preset picker when idle, countdown and gauge while running

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use fguard_core::TIMER_PRESETS;

use fguard_app::state::{TimerPhase, TimerState};

use crate::theme::styles;

/// `m:ss` rendering of a second count, e.g. `25:00` or `0:59`.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub struct TimerPanel<'a> {
    state: &'a TimerState,
}

impl<'a> TimerPanel<'a> {
    pub fn new(state: &'a TimerState) -> Self {
        Self { state }
    }

    fn render_idle(&self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = vec![Line::default()];

        for (i, preset) in TIMER_PRESETS.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  [{}] ", i + 1), styles::selected_row()),
                Span::styled(format!("{:<10}", preset.label), styles::stat_value()),
                Span::styled(format!("{} min", preset.minutes), styles::stat_label()),
            ]));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "  Select a duration to start focusing",
            styles::muted(),
        )));

        if let Some(notice) = &self.state.notice {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("  {}", notice.text),
                styles::notice(notice.kind),
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn render_running(
        &self,
        area: Rect,
        buf: &mut Buffer,
        mode_label: &str,
        remaining_secs: u32,
        stopping: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let percent = (self.state.progress() * 100.0).round() as u16;

        let clock = Line::from(vec![
            Span::styled(format_clock(remaining_secs), styles::clock()),
            Span::styled(format!("  {mode_label}"), styles::stat_label()),
            if stopping {
                Span::styled("  finishing...", styles::muted())
            } else {
                Span::raw("")
            },
        ]);
        Paragraph::new(clock)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        Gauge::default()
            .gauge_style(styles::gauge())
            .ratio(self.state.progress().clamp(0.0, 1.0))
            .label(format!("{percent}% complete"))
            .render(chunks[1].inner(ratatui::layout::Margin::new(4, 0)), buf);

        Paragraph::new(Line::from(Span::styled(
            "Distracting websites are now blocked",
            styles::muted(),
        )))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        if let Some(notice) = &self.state.notice {
            Paragraph::new(Line::from(Span::styled(
                notice.text.clone(),
                styles::notice(notice.kind),
            )))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
        }
    }
}

impl Widget for TimerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border())
            .title(Span::styled(" Focus Timer ", styles::panel_title()));
        let inner = block.inner(area);
        block.render(area, buf);

        match &self.state.phase {
            TimerPhase::Idle => self.render_idle(inner, buf),
            TimerPhase::Running {
                mode,
                remaining_secs,
                stopping,
                ..
            } => {
                let label = mode.label().to_string();
                self.render_running(inner, buf, &label, *remaining_secs, *stopping);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(59), "0:59");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(90 * 60), "90:00");
        assert_eq!(format_clock(1499), "24:59");
    }
}
