use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use scrabbleator_core::reveal::RevealPhase;
use scrabbleator_core::ResultItem;
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::theme::Theme;

const CURSOR: &str = "█";

pub struct WordListWidget;

impl WordListWidget {
    /// Render the revealed words and settle the scroll position.
    ///
    /// Lines are wrapped here rather than by `Paragraph` so the list height is
    /// known exactly when clamping the scroll offset.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        let theme = &app.theme;
        let revealed = app.session.reveal_state().revealed_items().len();
        let total = app.session.results().map(|set| set.len()).unwrap_or(0);

        let block = Block::default()
            .title(format!(" Words {revealed}/{total} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = list_lines(app, inner.width as usize);
        app.list_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        app.list_viewport = inner.height;

        let max = app.max_scroll();
        if app.take_follow() {
            app.list_scroll.scroll_to(max, max, now);
        }
        app.list_scroll.update(max, now);

        let paragraph = Paragraph::new(lines).scroll((app.list_scroll.offset(), 0));
        frame.render_widget(paragraph, inner);
    }
}

/// Every wrapped row of the list at `width` columns
pub fn list_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let session = &app.session;

    let Some(results) = session.results() else {
        return vec![Line::from(Span::styled(
            "Type your letters and press Enter",
            Style::default().fg(theme.muted),
        ))];
    };
    if results.is_empty() {
        return vec![Line::from(Span::styled(
            "No words found",
            Style::default().fg(theme.muted),
        ))];
    }

    let state = session.reveal_state();
    let mut lines = Vec::new();
    for item in state.revealed_items() {
        lines.extend(wrap_spans(item_spans(item, &item.definition, theme), width));
    }

    if let Some(item) = session.current_item() {
        let mut spans = item_spans(item, state.in_progress_text(), theme);
        if matches!(session.reveal_phase(), RevealPhase::Typing { .. }) {
            spans.push(Span::styled(CURSOR, Style::default().fg(theme.cursor)));
        }
        lines.extend(wrap_spans(spans, width));
    }
    lines
}

/// `P points  WORD: definition`
fn item_spans(item: &ResultItem, definition: &str, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{} points  ", item.points),
            Style::default().fg(theme.points),
        ),
        Span::styled(
            item.word.clone(),
            Style::default().fg(theme.word).add_modifier(Modifier::BOLD),
        ),
        Span::styled(": ", Style::default().fg(theme.muted)),
        Span::styled(definition.to_string(), Style::default().fg(theme.fg)),
    ]
}

/// Break styled spans into rows of at most `width` display columns
pub fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in spans {
        let mut chunk = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && used > 0 {
                if !chunk.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                lines.push(Line::from(std::mem::take(&mut row)));
                used = 0;
            }
            chunk.push(c);
            used += w;
        }
        if !chunk.is_empty() {
            row.push(Span::styled(chunk, span.style));
        }
    }
    lines.push(Line::from(row));
    lines
}
