//! Fixed-delay pacing for computer-controlled moves.
//!
//! The delay exists so a human can follow what the computer does. The
//! pacer only answers "is it time yet?"; callers pass `now` in, which
//! keeps it deterministic under test.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct OpponentPacer {
    delay: Duration,
    due_at: Option<Instant>,
}

impl OpponentPacer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            due_at: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start the countdown unless one is already running.
    pub fn schedule(&mut self, now: Instant) {
        if self.due_at.is_none() {
            self.due_at = Some(now + self.delay);
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Whether the scheduled move may run at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.due_at.is_some_and(|due| now >= due)
    }

    pub fn cancel(&mut self) {
        self.due_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_after_delay() {
        let start = Instant::now();
        let mut pacer = OpponentPacer::new(Duration::from_millis(800));

        assert!(!pacer.is_due(start));
        pacer.schedule(start);
        assert!(pacer.is_pending());
        assert!(!pacer.is_due(start + Duration::from_millis(799)));
        assert!(pacer.is_due(start + Duration::from_millis(800)));
    }

    #[test]
    fn test_schedule_does_not_restart() {
        let start = Instant::now();
        let mut pacer = OpponentPacer::new(Duration::from_millis(100));

        pacer.schedule(start);
        pacer.schedule(start + Duration::from_millis(90));
        assert!(pacer.is_due(start + Duration::from_millis(100)));
    }

    #[test]
    fn test_zero_delay_is_immediately_due() {
        let now = Instant::now();
        let mut pacer = OpponentPacer::new(Duration::ZERO);

        pacer.schedule(now);
        assert!(pacer.is_due(now));

        pacer.cancel();
        assert!(!pacer.is_pending());
        assert!(!pacer.is_due(now));
    }
}
