#![forbid(unsafe_code)]

//! A boolean that sets itself back after a fixed interval.
//!
//! Backs "copied!" style feedback: arm it when the action happens, poll
//! it each tick, and it reads `false` once the interval elapses. Arming
//! while already set replaces the deadline, so repeated actions keep the
//! feedback up for a full interval from the last one.

use std::time::{Duration, Instant};

/// Default feedback interval.
pub const DEFAULT_FEEDBACK_INTERVAL: Duration = Duration::from_millis(2000);

/// A self-clearing flag with an explicit clock.
///
/// Time is always passed in, never read internally, so behavior is fully
/// deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct TransientFlag {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Default for TransientFlag {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_INTERVAL)
    }
}

impl TransientFlag {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Set the flag as of `now`. A previous deadline, expired or not, is
    /// replaced outright.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    /// Drop the flag immediately.
    pub fn clear(&mut self) {
        self.deadline = None;
    }

    /// Whether the flag is set as of `now`.
    #[must_use]
    pub fn is_set(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now < d)
    }

    /// Poll for expiry: returns `true` exactly once, on the call that
    /// observes the deadline passing. Callers use this as a dirty bit to
    /// trigger one redraw when the feedback disappears.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn unarmed_flag_is_unset() {
        let flag = TransientFlag::default();
        assert!(!flag.is_set(Instant::now()));
    }

    #[test]
    fn flag_holds_for_the_interval_then_clears() {
        let t0 = Instant::now();
        let mut flag = TransientFlag::default();
        flag.arm(t0);
        assert!(flag.is_set(t0));
        assert!(flag.is_set(t0 + 1999 * MS));
        assert!(!flag.is_set(t0 + 2000 * MS));
    }

    #[test]
    fn rearming_replaces_the_deadline() {
        let t0 = Instant::now();
        let mut flag = TransientFlag::default();
        flag.arm(t0);
        flag.arm(t0 + 1000 * MS);
        // Still set where the first deadline alone would have expired.
        assert!(flag.is_set(t0 + 2500 * MS));
        assert!(!flag.is_set(t0 + 3000 * MS));
    }

    #[test]
    fn expire_fires_exactly_once() {
        let t0 = Instant::now();
        let mut flag = TransientFlag::new(Duration::from_millis(10));
        flag.arm(t0);
        assert!(!flag.expire(t0 + 5 * MS));
        assert!(flag.expire(t0 + 10 * MS));
        assert!(!flag.expire(t0 + 20 * MS));
    }

    #[test]
    fn clear_drops_immediately() {
        let t0 = Instant::now();
        let mut flag = TransientFlag::default();
        flag.arm(t0);
        flag.clear();
        assert!(!flag.is_set(t0));
        assert!(!flag.expire(t0 + 5000 * MS));
    }
}
