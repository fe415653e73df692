//! Single-owner deadline timer for the reveal engine
//!
//! Timers here are plain data owned by the state machine that armed them.
//! There is no callback to outlive a reset: cancelling clears the deadline,
//! and a cancelled timer can never fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer, replacing any pending deadline
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarm and return the deadline if it is due at `now`.
    ///
    /// The returned instant is the scheduled deadline, not `now`, so a chained
    /// timer re-armed from it keeps its cadence when polled late.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

/// Earliest of two optional deadlines
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_once_when_due() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::from_millis(25));

        assert_eq!(timer.fire(start + Duration::from_millis(24)), None);
        assert_eq!(
            timer.fire(start + Duration::from_millis(40)),
            Some(start + Duration::from_millis(25))
        );
        assert_eq!(timer.deadline(), None);
        assert_eq!(timer.fire(start + Duration::from_millis(80)), None);
    }

    #[test]
    fn test_cancel_prevents_fire() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::ZERO);
        timer.cancel();
        assert_eq!(timer.fire(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.arm(start, Duration::from_millis(100));
        timer.arm(start + Duration::from_millis(50), Duration::from_millis(100));
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(150)));
    }

    #[test]
    fn test_earliest() {
        let now = Instant::now();
        let later = now + Duration::from_secs(1);
        assert_eq!(earliest(Some(later), Some(now)), Some(now));
        assert_eq!(earliest(None, Some(now)), Some(now));
        assert_eq!(earliest(Some(later), None), Some(later));
        assert_eq!(earliest(None, None), None);
    }
}
