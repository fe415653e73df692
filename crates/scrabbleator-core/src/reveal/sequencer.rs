//! Typewriter reveal of a result set, one item at a time
//!
//! The sequencer is a finite-state machine over [`RevealPhase`]. It owns a
//! single [`Timer`]; every transition that resets state cancels that timer
//! first, so nothing scheduled for a previous result set can touch the new one.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use super::timer::Timer;
use crate::config::RevealConfig;
use crate::words::{ResultItem, ResultSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// No result set, stopped, or every item revealed
    #[default]
    Idle,
    /// Typing the definition of item `index` one character per tick
    Typing { index: usize },
    /// Definition fully typed, pausing before the item joins the history
    Settling { index: usize },
}

/// Progress notifications produced by [`RevealSequencer::start`] and [`RevealSequencer::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    /// A new item began typing
    ItemStarted { index: usize },
    /// One more character of item `index` is visible
    Typed { index: usize },
    /// Item `index` is fully typed and settling
    TypingComplete { index: usize },
    /// Item `index` was appended to the revealed history
    Appended { index: usize },
    /// Every item has been revealed
    Finished { revealed: usize },
}

impl RevealEvent {
    /// Whether this event changes what the word list shows
    pub fn changes_content(&self) -> bool {
        matches!(
            self,
            RevealEvent::ItemStarted { .. } | RevealEvent::Typed { .. } | RevealEvent::Appended { .. }
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealState {
    revealed: Vec<ResultItem>,
    cursor: usize,
    in_progress: String,
    animation_complete: bool,
}

impl RevealState {
    /// Items whose reveal has finished, in service order
    pub fn revealed_items(&self) -> &[ResultItem] {
        &self.revealed
    }

    /// Index of the item being animated (equals the item count once done)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Typed prefix of the current item's definition
    pub fn in_progress_text(&self) -> &str {
        &self.in_progress
    }

    pub fn animation_complete(&self) -> bool {
        self.animation_complete
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty() && self.in_progress.is_empty()
    }
}

pub struct RevealSequencer {
    items: Option<Arc<ResultSet>>,
    phase: RevealPhase,
    state: RevealState,
    timer: Timer,
    type_interval: Duration,
    settle_delay: Duration,
}

impl RevealSequencer {
    pub fn new(config: &RevealConfig) -> Self {
        Self::with_timing(config.type_interval(), config.settle_delay())
    }

    pub fn with_timing(type_interval: Duration, settle_delay: Duration) -> Self {
        Self {
            items: None,
            phase: RevealPhase::Idle,
            state: RevealState::default(),
            timer: Timer::new(),
            type_interval,
            settle_delay,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != RevealPhase::Idle
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    /// The item currently typing or settling
    pub fn current_item(&self) -> Option<&ResultItem> {
        let index = match self.phase {
            RevealPhase::Typing { index } | RevealPhase::Settling { index } => index,
            RevealPhase::Idle => return None,
        };
        self.items.as_ref().and_then(|set| set.words.get(index))
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Begin revealing `set` from its first item, discarding any previous reveal.
    ///
    /// An empty set leaves the sequencer idle.
    pub fn start(&mut self, set: Arc<ResultSet>, now: Instant) -> Vec<RevealEvent> {
        self.stop();

        let mut events = Vec::new();
        if set.is_empty() {
            events.push(RevealEvent::Finished { revealed: 0 });
            return events;
        }

        debug!(items = set.len(), "Reveal started");
        self.items = Some(set);
        self.enter_typing(0, now, &mut events);
        events
    }

    /// Cancel the pending timer and return to an empty idle state.
    ///
    /// Idempotent.
    pub fn stop(&mut self) {
        self.timer.cancel();
        if self.is_active() {
            debug!(cursor = self.state.cursor, "Reveal stopped");
        }
        self.phase = RevealPhase::Idle;
        self.state = RevealState::default();
        self.items = None;
    }

    /// Run every transition that is due at `now`
    pub fn tick(&mut self, now: Instant) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        let Some(items) = self.items.clone() else {
            return events;
        };

        while let Some(at) = self.timer.fire(now) {
            match self.phase {
                RevealPhase::Idle => break,
                RevealPhase::Typing { index } => {
                    let definition = items.words[index].definition.as_str();
                    let typed = self.state.in_progress.len();
                    if let Some(ch) = definition[typed..].chars().next() {
                        self.state.in_progress.push(ch);
                        events.push(RevealEvent::Typed { index });
                    }

                    if self.state.in_progress.len() >= definition.len() {
                        self.enter_settling(index, at, &mut events);
                    } else {
                        self.timer.arm(at, self.type_interval);
                    }
                }
                RevealPhase::Settling { index } => {
                    self.state.revealed.push(items.words[index].clone());
                    self.state.in_progress.clear();
                    self.state.animation_complete = false;
                    self.state.cursor = index + 1;
                    events.push(RevealEvent::Appended { index });

                    if index + 1 < items.len() {
                        self.enter_typing(index + 1, at, &mut events);
                    } else {
                        self.phase = RevealPhase::Idle;
                        debug!(revealed = self.state.revealed.len(), "Reveal finished");
                        events.push(RevealEvent::Finished {
                            revealed: self.state.revealed.len(),
                        });
                    }
                }
            }
        }

        events
    }

    fn enter_typing(&mut self, index: usize, at: Instant, events: &mut Vec<RevealEvent>) {
        self.phase = RevealPhase::Typing { index };
        self.state.cursor = index;
        self.state.in_progress.clear();
        self.state.animation_complete = false;
        events.push(RevealEvent::ItemStarted { index });

        let empty = self
            .items
            .as_ref()
            .map_or(true, |set| set.words[index].definition.is_empty());
        if empty {
            // Nothing to type, but the settle pause still applies
            self.enter_settling(index, at, events);
        } else {
            self.timer.arm(at, self.type_interval);
        }
    }

    fn enter_settling(&mut self, index: usize, at: Instant, events: &mut Vec<RevealEvent>) {
        self.phase = RevealPhase::Settling { index };
        self.state.animation_complete = true;
        self.timer.arm(at, self.settle_delay);
        events.push(RevealEvent::TypingComplete { index });
    }
}
