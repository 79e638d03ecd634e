//! Analytics view: stat cards, daily bar chart, streak banner
//!
//! Pure derived display. The panel renders data only once all three reports
//! have arrived; until then (and forever, if any read failed) it shows the
//! loading line.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

use fguard_app::state::{AnalyticsSnapshot, AnalyticsState};

use crate::theme::{palette, styles, IconSet};

/// Short weekday label for the chart axis, e.g. `Mon`.
pub fn weekday_label(date: NaiveDate) -> String {
    // chrono's %a gives the short English weekday name.
    date.format("%a").to_string()
}

pub struct AnalyticsPanel<'a> {
    state: &'a AnalyticsState,
    icons: IconSet,
}

impl<'a> AnalyticsPanel<'a> {
    pub fn new(state: &'a AnalyticsState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(Span::styled(
            "Loading analytics...",
            styles::muted(),
        )))
        .alignment(Alignment::Center)
        .render(area, buf);
    }

    fn render_cards(&self, snapshot: &AnalyticsSnapshot, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
                Constraint::Ratio(1, 4),
            ])
            .split(area);

        let overview = &snapshot.overview;
        let cards: [(&str, String, &str); 4] = [
            (
                "Total Focus Time",
                format!("{} min", overview.total_minutes.round() as i64),
                self.icons.clock(),
            ),
            (
                "Sessions Completed",
                overview.completed_sessions.to_string(),
                self.icons.target(),
            ),
            (
                "Current Streak",
                format!("{} days", snapshot.streaks.current),
                self.icons.flame(),
            ),
            (
                "Completion Rate",
                format!("{:.0}%", overview.completion_rate),
                self.icons.trend(),
            ),
        ];

        for ((label, value, icon), column) in cards.into_iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(styles::panel_border());
            let inner = block.inner(*column);
            block.render(*column, buf);

            let lines = vec![
                Line::from(Span::styled(format!("{icon} {label}"), styles::stat_label())),
                Line::from(Span::styled(value, styles::stat_value())),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
    }

    fn render_chart(&self, snapshot: &AnalyticsSnapshot, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = snapshot
            .daily
            .iter()
            .map(|point| {
                Bar::default()
                    .label(Line::from(weekday_label(point.date)))
                    .value(point.minutes.round() as u64)
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styles::panel_border())
                    .title(Span::styled(
                        " Last 7 Days Activity (minutes) ",
                        styles::panel_title(),
                    )),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(2)
            .bar_style(ratatui::style::Style::default().fg(palette::CHART_BAR))
            .value_style(styles::stat_value());

        chart.render(area, buf);
    }

    fn render_streak_banner(&self, snapshot: &AnalyticsSnapshot, area: Rect, buf: &mut Buffer) {
        let streaks = &snapshot.streaks;
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} Keep your streak going!", self.icons.flame()),
                styles::streak_banner(),
            ),
            Span::styled(
                format!(
                    "  Current: {} days | Best: {} days",
                    streaks.current, streaks.best
                ),
                styles::stat_label(),
            ),
        ]))
        .render(area, buf);
    }

    fn render_footer(&self, snapshot: &AnalyticsSnapshot, area: Rect, buf: &mut Buffer) {
        let overview = &snapshot.overview;
        Paragraph::new(Line::from(Span::styled(
            format!(
                " {}-day window · {} sessions · avg {:.1} min · {} block attempts",
                overview.period_days,
                overview.total_sessions,
                overview.avg_session_length,
                overview.block_attempts
            ),
            styles::muted(),
        )))
        .render(area, buf);
    }
}

impl Widget for AnalyticsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(snapshot) = &self.state.data else {
            self.render_loading(area, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_cards(snapshot, chunks[0], buf);
        self.render_chart(snapshot, chunks[1], buf);
        self.render_streak_banner(snapshot, chunks[2], buf);
        self.render_footer(snapshot, chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_weekday_label() {
        // 2025-08-04 is a Monday.
        let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        assert_eq!(weekday_label(date), "Mon");
        assert_eq!(weekday_label(date.succ_opt().unwrap()), "Tue");
        // Datelike sanity: the label tracks the weekday, not the day number.
        assert_eq!(date.weekday().to_string(), "Mon");
    }
}
