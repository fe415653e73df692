use std::sync::Arc;
use std::time::Instant;

use scrabbleator_core::search::{Keystroke, SearchTicket, SubmissionOutcome};
use scrabbleator_core::{AppConfig, Error, SearchSession, TickOutcome};
use tracing::debug;

use crate::event::SearchResponse;
use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

const SPINNER: [&str; 4] = ["", ".", "..", "..."];

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub session: SearchSession,
    pub should_quit: bool,
    /// Transient notice shown in the status bar
    pub status_message: Option<String>,
    pub spinner_frame: usize,

    // Word list viewport, measured during render
    pub list_scroll: ScrollAnimator,
    pub list_height: u16,
    pub list_viewport: u16,
    follow_pending: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme) -> Self {
        let session = SearchSession::new(&config.reveal);
        let list_scroll = ScrollAnimator::new(config.ui.scroll.clone());
        Self {
            config,
            theme,
            session,
            should_quit: false,
            status_message: None,
            spinner_frame: 0,
            list_scroll,
            list_height: 0,
            list_viewport: 0,
            follow_pending: false,
        }
    }

    /// Apply a user action. Returns the request to perform when a search was dispatched.
    pub fn handle_action(&mut self, action: Action, now: Instant) -> Option<SearchTicket> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::InputChar(c) => {
                if self.session.push_char(c) == Keystroke::Rejected {
                    debug!(key = %c, "Rejected non-letter input");
                }
                self.status_message = None;
            }
            Action::Backspace => {
                self.session.pop_char();
                self.status_message = None;
            }
            Action::ClearInput => {
                self.session.on_keystroke("");
                self.status_message = None;
            }
            Action::Submit => return self.submit(now),
            Action::StopReveal => {
                self.session.stop_reveal();
                self.list_scroll.reset(0);
                self.follow_pending = false;
            }
            Action::ScrollUp | Action::ScrollDown => {
                self.list_scroll
                    .scroll_lines(action == Action::ScrollDown, self.max_scroll());
                self.session.on_user_scroll(now);
            }
            Action::ScrollPageUp | Action::ScrollPageDown => {
                self.list_scroll.scroll_page(
                    action == Action::ScrollPageDown,
                    self.list_viewport,
                    self.max_scroll(),
                );
                self.session.on_user_scroll(now);
            }
            Action::None => {}
        }
        None
    }

    fn submit(&mut self, now: Instant) -> Option<SearchTicket> {
        match self.session.submit(now) {
            Ok(SubmissionOutcome::Dispatched(ticket)) => {
                self.status_message = None;
                self.list_scroll.reset(0);
                self.follow_pending = false;
                Some(ticket)
            }
            Ok(SubmissionOutcome::DebounceHold { .. }) => {
                self.status_message = Some("Same letters as the last search".to_string());
                None
            }
            Err(Error::Busy) => {
                self.status_message = Some("A search is already running".to_string());
                None
            }
            // Length errors are recorded in the dispatch state
            Err(_) => None,
        }
    }

    /// Feed a finished request back into the session
    pub fn complete(&mut self, response: SearchResponse, now: Instant) {
        let outcome = self
            .session
            .complete(&response.ticket, response.result, now);
        self.apply(outcome);
    }

    /// Run engine timers due at `now`
    pub fn tick(&mut self, now: Instant) {
        let outcome = self.session.tick(now);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: TickOutcome) {
        if outcome.scroll.is_some() {
            self.follow_pending = true;
        }
    }

    /// Consume a pending scroll-to-end request
    pub fn take_follow(&mut self) -> bool {
        std::mem::take(&mut self.follow_pending)
    }

    pub fn max_scroll(&self) -> u16 {
        self.list_height.saturating_sub(self.list_viewport)
    }

    /// Scroll animation needs frames faster than the tick rate
    pub fn needs_fast_update(&self) -> bool {
        self.follow_pending || self.list_scroll.needs_update()
    }

    pub fn tick_spinner(&mut self) {
        if self.session.is_busy() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        } else {
            self.spinner_frame = 0;
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }

    /// Status bar error, if any. Transient notices win over the dispatch error.
    pub fn error_text(&self) -> Option<&str> {
        self.status_message
            .as_deref()
            .or_else(|| self.session.dispatch_state().error_message())
    }

    pub fn shutdown(&mut self) {
        self.session.shutdown();
        self.follow_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrabbleator_core::{ResultItem, ResultSet};
    use std::time::Duration;

    fn app() -> App {
        let config = AppConfig {
            ui: scrabbleator_core::config::UiConfig {
                scroll: scrabbleator_core::ScrollConfig {
                    smooth_enabled: false,
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        App::new(Arc::new(config), Theme::default())
    }

    fn type_letters(app: &mut App, letters: &str, now: Instant) {
        for c in letters.chars() {
            app.handle_action(Action::InputChar(c), now);
        }
    }

    #[test]
    fn test_typing_rejects_non_letters() {
        let now = Instant::now();
        let mut app = app();
        type_letters(&mut app, "ta1c", now);
        assert_eq!(app.session.draft(), "tac");

        app.handle_action(Action::Backspace, now);
        assert_eq!(app.session.draft(), "ta");
        app.handle_action(Action::ClearInput, now);
        assert_eq!(app.session.draft(), "");
    }

    #[test]
    fn test_short_query_shows_error_without_request() {
        let now = Instant::now();
        let mut app = app();
        type_letters(&mut app, "a", now);
        assert!(app.handle_action(Action::Submit, now).is_none());
        assert!(app.error_text().is_some());
        assert!(!app.session.is_busy());
    }

    #[test]
    fn test_completion_requests_follow() {
        let now = Instant::now();
        let mut app = app();
        type_letters(&mut app, "tac", now);
        let ticket = app.handle_action(Action::Submit, now).unwrap();
        assert!(app.handle_action(Action::Submit, now).is_none());
        assert_eq!(app.error_text(), Some("A search is already running"));

        let set = ResultSet {
            words: vec![ResultItem::new("CAT", "pet", 5)],
            ..Default::default()
        };
        app.complete(
            SearchResponse {
                ticket,
                result: Ok(set),
            },
            now,
        );
        assert!(app.take_follow());
        assert!(!app.take_follow());

        app.tick(now + Duration::from_millis(25));
        assert_eq!(app.session.reveal_state().in_progress_text(), "p");
        assert!(app.take_follow());
    }

    #[test]
    fn test_user_scroll_suspends_follow() {
        let now = Instant::now();
        let mut app = app();
        type_letters(&mut app, "tac", now);
        let ticket = app.handle_action(Action::Submit, now).unwrap();
        let set = ResultSet {
            words: vec![ResultItem::new("CAT", "a small feline", 5)],
            ..Default::default()
        };
        app.complete(SearchResponse { ticket, result: Ok(set) }, now);
        app.take_follow();

        app.list_height = 40;
        app.list_viewport = 10;
        app.handle_action(Action::ScrollDown, now);
        assert_eq!(app.list_scroll.offset(), 1);
        assert!(!app.session.scroll_state().auto_scroll_enabled);

        app.tick(now + Duration::from_millis(25));
        assert!(!app.take_follow());
    }

    #[test]
    fn test_repeat_search_after_stop_holds() {
        let now = Instant::now();
        let mut app = app();
        type_letters(&mut app, "tac", now);
        let ticket = app.handle_action(Action::Submit, now).unwrap();
        let set = ResultSet {
            words: vec![ResultItem::new("CAT", "pet", 5)],
            ..Default::default()
        };
        app.complete(SearchResponse { ticket, result: Ok(set) }, now);
        app.handle_action(Action::StopReveal, now);

        assert!(app.handle_action(Action::Submit, now).is_none());
        assert_eq!(app.error_text(), Some("Same letters as the last search"));
        assert!(app.session.is_busy());
    }

    #[test]
    fn test_spinner_only_turns_while_busy() {
        let now = Instant::now();
        let mut app = app();
        app.tick_spinner();
        assert_eq!(app.spinner(), "");

        type_letters(&mut app, "tac", now);
        app.handle_action(Action::Submit, now);
        app.tick_spinner();
        assert_eq!(app.spinner(), ".");
    }
}
