use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

const TITLE: &str = "SCRABBLEATOR";

pub struct HeaderWidget;

impl HeaderWidget {
    /// Title spelled out as letter tiles
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let tile = Style::default()
            .fg(theme.bg)
            .bg(theme.points)
            .add_modifier(Modifier::BOLD);
        let gap = Style::default().bg(theme.bg);

        let mut spans = Vec::with_capacity(TITLE.len() * 2);
        for (i, letter) in TITLE.chars().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", gap));
            }
            spans.push(Span::styled(format!(" {} ", letter), tile));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg));
        frame.render_widget(paragraph, area);
    }
}
