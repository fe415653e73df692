use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use scrabbleator_core::search::SearchTicket;
use scrabbleator_core::ResultSet;

use crate::scroll::{ScrollConfig, ScrollConfigExt};

/// Polls the terminal, waking early for engine deadlines and scroll frames
pub struct EventHandler {
    tick_rate: Duration,
    animation_interval: Duration,
}

/// Answer of a spawned word-service request
#[derive(Debug)]
pub struct SearchResponse {
    pub ticket: SearchTicket,
    pub result: scrabbleator_core::Result<ResultSet>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, scroll: &ScrollConfig) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_interval: scroll.frame_interval(),
        }
    }

    /// How long the next poll may block
    pub fn poll_timeout(&self, now: Instant, wake_at: Option<Instant>, animating: bool) -> Duration {
        let mut timeout = if animating {
            self.animation_interval
        } else {
            self.tick_rate
        };
        if let Some(wake_at) = wake_at {
            timeout = timeout.min(wake_at.saturating_duration_since(now));
        }
        timeout
    }

    /// Wait up to `timeout` for a terminal event; `Tick` when none arrived
    pub fn next(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        match event::read()? {
            // Release events arrive on some terminals; only presses count
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
            Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
            Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
            _ => Ok(None),
        }
    }
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Poll timed out
    Tick,
}
