use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use scrabbleator_core::search::{MAX_LETTERS, MIN_LETTERS};

use crate::app::App;

pub struct SearchBoxWidget;

impl SearchBoxWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let busy = app.session.is_busy();

        let block = Block::default()
            .title(format!(" Letters ({}-{}) ", MIN_LETTERS, MAX_LETTERS))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(14)])
            .split(inner);

        let draft = Line::from(vec![
            Span::styled(
                app.session.draft().to_string(),
                Style::default().fg(theme.word).add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(theme.cursor)),
        ]);
        frame.render_widget(Paragraph::new(draft), columns[0]);

        // The button is replaced while a search or hold is in flight
        let button = if busy {
            Span::styled(
                format!("SEARCHING{}", app.spinner()),
                Style::default().fg(theme.busy).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                "[ Find ]",
                Style::default().fg(theme.bg).bg(theme.accent),
            )
        };
        frame.render_widget(Paragraph::new(Line::from(button)), columns[1]);
    }
}
