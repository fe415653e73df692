use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use scrabbleator_core::search::SearchTicket;
use scrabbleator_core::{AppConfig, HttpWordFinder, WordFinder};
use scrabbleator_tui::{
    event::{AppEvent, EventHandler, SearchResponse},
    input::{handle_key_event, handle_mouse_event},
    widgets::{HeaderWidget, SearchBoxWidget, StatsWidget, StatusBarWidget, WordListWidget},
    App, Theme,
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let finder: Arc<dyn WordFinder> = Arc::new(HttpWordFinder::new(&config.service)?);
    info!(endpoint = %config.service.base_url, "Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Scrabbleator"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme = Theme::from_overrides(&config.ui.theme);
    let mut app = App::new(config.clone(), theme);
    let events = EventHandler::new(config.ui.tick_rate_ms, &config.ui.scroll);

    let result = event_loop(&mut terminal, &mut app, &events, finder).await;

    // Timers and any in-flight request are dropped before the screen goes away
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
    finder: Arc<dyn WordFinder>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchResponse>();

    loop {
        // Finished requests (non-blocking)
        while let Ok(response) = rx.try_recv() {
            app.complete(response, Instant::now());
        }
        app.tick(Instant::now());

        let now = Instant::now();
        terminal.draw(|frame| draw(frame, app, now))?;

        let timeout = events.poll_timeout(
            Instant::now(),
            app.session.next_deadline(),
            app.needs_fast_update(),
        );
        // Terminal polling blocks; keep the runtime free for the request task
        let event = tokio::task::block_in_place(|| events.next(timeout))?;

        if let Some(event) = event {
            let action = match event {
                AppEvent::Key(key) => handle_key_event(key),
                AppEvent::Mouse(mouse) => handle_mouse_event(mouse),
                // The next draw re-measures the list
                AppEvent::Resize(_, _) => continue,
                AppEvent::Tick => {
                    app.tick_spinner();
                    continue;
                }
            };
            if let Some(ticket) = app.handle_action(action, Instant::now()) {
                spawn_search(Arc::clone(&finder), ticket, tx.clone());
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run one request off the UI loop and report back over the channel
fn spawn_search(
    finder: Arc<dyn WordFinder>,
    ticket: SearchTicket,
    tx: mpsc::UnboundedSender<SearchResponse>,
) {
    tokio::spawn(async move {
        let result = finder.find_words(ticket.letters()).await;
        // The receiver is gone once the UI has quit
        let _ = tx.send(SearchResponse { ticket, result });
    });
}

fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(app.theme.bg)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Search box
            Constraint::Min(3),    // Stats and words
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(20)])
        .split(rows[2]);

    HeaderWidget::render(frame, rows[0], app);
    SearchBoxWidget::render(frame, rows[1], app);
    StatsWidget::render(frame, body[0], app);
    WordListWidget::render(frame, body[1], app, now);
    StatusBarWidget::render(frame, rows[3], app);
}
