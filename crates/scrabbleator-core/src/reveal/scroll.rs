//! Auto-scroll decisions for the revealed word list
//!
//! Two independent inputs feed one decision: progress notifications from the
//! sequencer and raw scroll events from the user. User intent wins: any manual
//! scroll while a reveal is running suspends auto-scroll for a quiet period.

use std::time::{Duration, Instant};

use tracing::debug;

use super::timer::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    pub auto_scroll_enabled: bool,
    pub user_scroll_active: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            auto_scroll_enabled: true,
            user_scroll_active: false,
        }
    }
}

/// Instruction for the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    /// Smoothly bring the end of the list into view
    ScrollToEnd,
}

pub struct ScrollCoordinator {
    state: ScrollState,
    quiet: Timer,
    quiet_period: Duration,
}

impl ScrollCoordinator {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            state: ScrollState::default(),
            quiet: Timer::new(),
            quiet_period,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.quiet.deadline()
    }

    /// A manual scroll happened in the viewport
    pub fn on_user_scroll(&mut self, now: Instant, reveal_active: bool) {
        if !reveal_active {
            return;
        }

        if !self.state.user_scroll_active {
            debug!("Manual scroll, auto-scroll suspended");
        }
        self.state.user_scroll_active = true;
        self.state.auto_scroll_enabled = false;
        self.quiet.arm(now, self.quiet_period);
    }

    /// Revealed content changed; decide whether to follow it
    pub fn on_progress(&self) -> Option<ScrollCommand> {
        (self.state.auto_scroll_enabled && !self.state.user_scroll_active)
            .then_some(ScrollCommand::ScrollToEnd)
    }

    /// Fire the quiet-period timer if due. Returns true when auto-scroll resumed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.quiet.fire(now).is_none() {
            return false;
        }
        debug!("Scroll quiet period elapsed, auto-scroll resumed");
        self.state = ScrollState::default();
        true
    }

    /// The reveal ended or was stopped: drop the quiet timer and restore defaults
    pub fn detach(&mut self) {
        self.quiet.cancel();
        self.state = ScrollState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(2000);

    #[test]
    fn test_follows_progress_by_default() {
        let coordinator = ScrollCoordinator::new(QUIET);
        assert_eq!(coordinator.on_progress(), Some(ScrollCommand::ScrollToEnd));
    }

    #[test]
    fn test_user_scroll_suspends_then_resumes() {
        let start = Instant::now();
        let mut coordinator = ScrollCoordinator::new(QUIET);

        coordinator.on_user_scroll(start, true);
        assert_eq!(
            coordinator.state(),
            ScrollState {
                auto_scroll_enabled: false,
                user_scroll_active: true,
            }
        );
        assert_eq!(coordinator.on_progress(), None);

        assert!(!coordinator.tick(start + QUIET - Duration::from_millis(1)));
        assert!(!coordinator.state().auto_scroll_enabled);

        assert!(coordinator.tick(start + QUIET));
        assert_eq!(coordinator.state(), ScrollState::default());
        assert_eq!(coordinator.on_progress(), Some(ScrollCommand::ScrollToEnd));
    }

    #[test]
    fn test_each_scroll_restarts_quiet_period() {
        let start = Instant::now();
        let mut coordinator = ScrollCoordinator::new(QUIET);

        coordinator.on_user_scroll(start, true);
        coordinator.on_user_scroll(start + Duration::from_millis(1500), true);

        assert!(!coordinator.tick(start + QUIET));
        assert!(coordinator.state().user_scroll_active);
        assert_eq!(
            coordinator.next_deadline(),
            Some(start + Duration::from_millis(3500))
        );
        assert!(coordinator.tick(start + Duration::from_millis(3500)));
    }

    #[test]
    fn test_scroll_while_inactive_is_ignored() {
        let start = Instant::now();
        let mut coordinator = ScrollCoordinator::new(QUIET);
        coordinator.on_user_scroll(start, false);
        assert_eq!(coordinator.state(), ScrollState::default());
        assert_eq!(coordinator.next_deadline(), None);
    }

    #[test]
    fn test_detach_cancels_quiet_timer() {
        let start = Instant::now();
        let mut coordinator = ScrollCoordinator::new(QUIET);
        coordinator.on_user_scroll(start, true);
        coordinator.detach();

        assert_eq!(coordinator.next_deadline(), None);
        assert_eq!(coordinator.state(), ScrollState::default());
        assert!(!coordinator.tick(start + QUIET));
    }
}
