use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const HINT: &str = " Enter:find  Esc:stop  ↑/↓ PgUp/PgDn:scroll  Ctrl-U:clear  Ctrl-C:quit ";

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let (text, style) = match app.error_text() {
            Some(message) => (
                format!(" {message}"),
                Style::default().fg(theme.error).bg(theme.panel),
            ),
            None => {
                let words = app.session.reveal_state().revealed_items().len();
                let total = app.session.results().map(|set| set.len()).unwrap_or(0);
                (
                    format!(" {words}/{total} words"),
                    Style::default().fg(theme.fg).bg(theme.panel),
                )
            }
        };

        let padding = (area.width as usize).saturating_sub(text.width() + HINT.width());
        let line = Line::from(vec![
            Span::styled(text, style),
            Span::styled(" ".repeat(padding), Style::default().bg(theme.panel)),
            Span::styled(HINT, Style::default().fg(theme.muted).bg(theme.panel)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
