use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use scrabbleator_core::Stats;

use crate::app::App;
use crate::theme::Theme;

pub struct StatsWidget;

impl StatsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .style(Style::default().bg(theme.panel));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let stats = app.session.stats().cloned().unwrap_or_default();
        frame.render_widget(Paragraph::new(stats_lines(&stats, theme)), inner);
    }
}

/// Summary rows, then one row per word length. Absent values stay blank.
pub fn stats_lines(stats: &Stats, theme: &Theme) -> Vec<Line<'static>> {
    let row = |label: &str, value: Option<String>| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(theme.muted)),
            Span::styled(
                value.unwrap_or_default(),
                Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
            ),
        ])
    };

    let mut lines = vec![
        row("Total Words", stats.total_words.map(|v| v.to_string())),
        row("Max Points", stats.max_points.map(|v| v.to_string())),
        row("Min Points", stats.min_points.map(|v| v.to_string())),
        row("Average Length", stats.average_length.map(|v| format!("{v:.2}"))),
        row("Average Points", stats.average_points.map(|v| format!("{v:.2}"))),
    ];

    if !stats.length_distribution.is_empty() {
        lines.push(Line::default());
        for (length, count) in &stats.length_distribution {
            lines.push(Line::from(Span::styled(
                format!("{length} letter words: {count}"),
                Style::default().fg(theme.fg),
            )));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_absent_stats_are_blank() {
        let lines = stats_lines(&Stats::default(), &Theme::default());
        assert_eq!(lines.len(), 5);
        assert_eq!(text(&lines[0]), "Total Words: ");
    }

    #[test]
    fn test_length_distribution_rows() {
        let mut stats = Stats {
            total_words: Some(3),
            average_length: Some(3.5),
            ..Default::default()
        };
        stats.length_distribution.insert(4, 1);
        stats.length_distribution.insert(3, 2);

        let lines: Vec<String> = stats_lines(&stats, &Theme::default()).iter().map(text).collect();
        assert_eq!(lines[0], "Total Words: 3");
        assert_eq!(lines[3], "Average Length: 3.50");
        assert_eq!(lines[6], "3 letter words: 2");
        assert_eq!(lines[7], "4 letter words: 1");
    }
}
