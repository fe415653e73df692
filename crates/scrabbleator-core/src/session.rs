//! One search box and its result reveal
//!
//! [`SearchSession`] wires the components together. Each one stays the sole
//! owner of its own state: the validator owns the draft, the dispatcher owns
//! [`DispatchState`], the session owns the current [`ResultSet`], the
//! sequencer owns [`RevealState`] and the coordinator owns [`ScrollState`].

use std::sync::Arc;
use std::time::Instant;

use crate::config::RevealConfig;
use crate::reveal::timer::earliest;
use crate::reveal::{
    RevealEvent, RevealPhase, RevealSequencer, RevealState, ScrollCommand, ScrollCoordinator,
    ScrollState,
};
use crate::search::{
    Completion, DispatchState, InputValidator, Keystroke, SearchDispatcher, SearchTicket,
    SubmissionOutcome,
};
use crate::words::{ResultItem, ResultSet, Stats};
use crate::Result;

/// What changed during a call into the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<RevealEvent>,
    /// The word list shows something new
    pub content_changed: bool,
    /// The busy indicator flipped
    pub busy_changed: bool,
    pub scroll: Option<ScrollCommand>,
}

pub struct SearchSession {
    input: InputValidator,
    dispatcher: SearchDispatcher,
    results: Option<Arc<ResultSet>>,
    sequencer: RevealSequencer,
    scroll: ScrollCoordinator,
}

impl SearchSession {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            input: InputValidator::new(),
            dispatcher: SearchDispatcher::new(config.debounce_hold()),
            results: None,
            sequencer: RevealSequencer::new(config),
            scroll: ScrollCoordinator::new(config.scroll_quiet()),
        }
    }

    pub fn draft(&self) -> &str {
        self.input.draft()
    }

    pub fn on_keystroke(&mut self, proposed: &str) -> Keystroke {
        self.input.on_keystroke(proposed)
    }

    pub fn push_char(&mut self, c: char) -> Keystroke {
        self.input.push_char(c)
    }

    pub fn pop_char(&mut self) -> Keystroke {
        self.input.pop_char()
    }

    /// Submit the current draft.
    ///
    /// On [`SubmissionOutcome::Dispatched`] the reveal has already been reset;
    /// the caller performs the request and hands the answer to [`Self::complete`].
    pub fn submit(&mut self, now: Instant) -> Result<SubmissionOutcome> {
        let query = self.input.draft().to_string();
        let outcome = self.dispatcher.submit(&query, now)?;
        if matches!(outcome, SubmissionOutcome::Dispatched(_)) {
            self.stop_reveal();
        }
        Ok(outcome)
    }

    /// Apply a service answer; a success replaces the result set and starts the reveal
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        result: Result<ResultSet>,
        now: Instant,
    ) -> TickOutcome {
        match self.dispatcher.complete(ticket, result) {
            Completion::Succeeded(set) => {
                let set = Arc::new(set);
                self.results = Some(Arc::clone(&set));
                let events = self.sequencer.start(set, now);
                let mut outcome = self.follow(events);
                outcome.busy_changed = true;
                outcome
            }
            Completion::Failed => TickOutcome {
                busy_changed: true,
                ..Default::default()
            },
            Completion::Stale => TickOutcome::default(),
        }
    }

    /// Stop the reveal and clear the revealed history
    pub fn stop_reveal(&mut self) {
        self.sequencer.stop();
        self.scroll.detach();
    }

    /// The user scrolled the word list
    pub fn on_user_scroll(&mut self, now: Instant) {
        self.scroll.on_user_scroll(now, self.sequencer.is_active());
    }

    /// Run every timer due at `now`
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let busy_changed = self.dispatcher.tick(now);
        let resumed = self.scroll.tick(now);
        let events = self.sequencer.tick(now);

        let mut outcome = self.follow(events);
        outcome.busy_changed = busy_changed;
        // Catch up with content revealed while the user held the list
        if resumed && outcome.scroll.is_none() && self.sequencer.is_active() {
            outcome.scroll = self.scroll.on_progress();
        }
        outcome
    }

    /// When the next timer is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest(
            self.dispatcher.next_deadline(),
            earliest(self.sequencer.next_deadline(), self.scroll.next_deadline()),
        )
    }

    /// Cancel every timer and forget the outstanding request
    pub fn shutdown(&mut self) {
        self.stop_reveal();
        self.dispatcher.abandon();
    }

    pub fn dispatch_state(&self) -> &DispatchState {
        self.dispatcher.state()
    }

    pub fn is_busy(&self) -> bool {
        self.dispatcher.state().is_busy()
    }

    pub fn pending(&self) -> Option<&SearchTicket> {
        self.dispatcher.pending()
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_deref()
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.results().map(|set| &set.stats)
    }

    pub fn reveal_state(&self) -> &RevealState {
        self.sequencer.state()
    }

    pub fn reveal_phase(&self) -> RevealPhase {
        self.sequencer.phase()
    }

    pub fn is_revealing(&self) -> bool {
        self.sequencer.is_active()
    }

    /// Item currently typing or settling
    pub fn current_item(&self) -> Option<&ResultItem> {
        self.sequencer.current_item()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    /// Merge sequencer progress into a scroll decision
    fn follow(&mut self, events: Vec<RevealEvent>) -> TickOutcome {
        let content_changed = events.iter().any(RevealEvent::changes_content);
        let scroll = if content_changed {
            self.scroll.on_progress()
        } else {
            None
        };

        if !self.sequencer.is_active() {
            self.scroll.detach();
        }

        TickOutcome {
            events,
            content_changed,
            busy_changed: false,
            scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session() -> SearchSession {
        SearchSession::new(&RevealConfig::default())
    }

    #[test]
    fn test_next_deadline_tracks_earliest_timer() {
        let now = Instant::now();
        let mut session = session();
        assert_eq!(session.next_deadline(), None);

        session.on_keystroke("tac");
        let ticket = match session.submit(now).unwrap() {
            SubmissionOutcome::Dispatched(ticket) => ticket,
            other => panic!("unexpected {other:?}"),
        };
        let set = ResultSet {
            words: vec![ResultItem::new("CAT", "a feline", 5)],
            ..Default::default()
        };
        session.complete(&ticket, Ok(set), now);
        assert_eq!(session.next_deadline(), Some(now + Duration::from_millis(25)));

        session.on_user_scroll(now);
        assert_eq!(session.next_deadline(), Some(now + Duration::from_millis(25)));

        session.shutdown();
        assert_eq!(session.next_deadline(), None);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_failed_completion_reports_busy_change() {
        let now = Instant::now();
        let mut session = session();
        session.on_keystroke("tac");
        let ticket = match session.submit(now).unwrap() {
            SubmissionOutcome::Dispatched(ticket) => ticket,
            other => panic!("unexpected {other:?}"),
        };
        let outcome = session.complete(
            &ticket,
            Err(crate::Error::Service {
                status: 500,
                message: String::new(),
            }),
            now,
        );
        assert!(outcome.busy_changed);
        assert!(!outcome.content_changed);
        assert!(session.results().is_none());
        assert!(!session.is_revealing());
    }
}
