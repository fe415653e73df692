use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::input::check_length;
use crate::reveal::Timer;
use crate::words::ResultSet;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchState {
    last_submitted: Option<String>,
    busy: bool,
    error_message: Option<String>,
}

impl DispatchState {
    /// Letters of the last search that was answered successfully
    pub fn last_submitted(&self) -> Option<&str> {
        self.last_submitted.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Identifies one request handed to the word service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    id: u64,
    letters: String,
}

impl SearchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Perform the request described by the ticket
    Dispatched(SearchTicket),
    /// Same letters as the last served search: busy until `until`, no request
    DebounceHold { until: Instant },
}

#[derive(Debug)]
pub enum Completion {
    Succeeded(ResultSet),
    Failed,
    /// The ticket is not the outstanding request; nothing changed
    Stale,
}

pub struct SearchDispatcher {
    state: DispatchState,
    hold: Timer,
    hold_duration: Duration,
    pending: Option<SearchTicket>,
    next_id: u64,
}

impl SearchDispatcher {
    pub fn new(hold_duration: Duration) -> Self {
        Self {
            state: DispatchState::default(),
            hold: Timer::new(),
            hold_duration,
            pending: None,
            next_id: 0,
        }
    }

    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    pub fn pending(&self) -> Option<&SearchTicket> {
        self.pending.as_ref()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.hold.deadline()
    }

    pub fn submit(&mut self, query: &str, now: Instant) -> Result<SubmissionOutcome> {
        if self.state.busy {
            return Err(Error::Busy);
        }

        if let Err(err) = check_length(query) {
            self.state.error_message = Some(err.to_string());
            return Err(err);
        }

        if self.state.last_submitted.as_deref() == Some(query) {
            debug!(letters = query, "Identical resubmission, holding busy");
            self.state.busy = true;
            self.hold.arm(now, self.hold_duration);
            return Ok(SubmissionOutcome::DebounceHold {
                until: now + self.hold_duration,
            });
        }

        self.next_id += 1;
        let ticket = SearchTicket {
            id: self.next_id,
            letters: query.to_string(),
        };
        self.state.error_message = None;
        self.state.busy = true;
        self.pending = Some(ticket.clone());
        info!(letters = query, ticket = ticket.id, "Search dispatched");

        Ok(SubmissionOutcome::Dispatched(ticket))
    }

    /// Apply the service answer for `ticket`
    pub fn complete(&mut self, ticket: &SearchTicket, result: Result<ResultSet>) -> Completion {
        if self.pending.as_ref() != Some(ticket) {
            debug!(ticket = ticket.id, "Discarding stale search response");
            return Completion::Stale;
        }
        self.pending = None;
        self.state.busy = false;

        match result {
            Ok(set) => {
                info!(letters = %ticket.letters, words = set.len(), "Search succeeded");
                self.state.last_submitted = Some(ticket.letters.clone());
                Completion::Succeeded(set)
            }
            Err(err) => {
                warn!(letters = %ticket.letters, error = %err, "Search failed");
                self.state.error_message = Some(err.to_string());
                Completion::Failed
            }
        }
    }

    /// End a debounce hold if due. Returns true when busy was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.hold.fire(now).is_none() {
            return false;
        }
        self.state.busy = false;
        true
    }

    /// Forget the outstanding request and any hold; a late answer becomes stale
    pub fn abandon(&mut self) {
        self.hold.cancel();
        self.pending = None;
        self.state.busy = false;
    }
}
