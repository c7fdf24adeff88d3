use std::time::{Duration, Instant};

/// A one-shot deadline polled from the event loop. Scheduling again replaces
/// the previous deadline and `cancel` drops it, so a superseded task can
/// never fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deferred {
    due: Option<Instant>,
}

impl Deferred {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Returns true if a pending task was dropped.
    pub fn cancel(&mut self) -> bool {
        self.due.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Consumes the task if its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut task = Deferred::default();
        task.schedule(t0, Duration::from_millis(500));

        assert!(!task.fire_if_due(t0 + Duration::from_millis(499)));
        assert!(task.fire_if_due(t0 + Duration::from_millis(500)));
        assert!(!task.fire_if_due(t0 + Duration::from_millis(900)));
        assert!(!task.is_pending());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut task = Deferred::default();
        task.schedule(t0, Duration::from_millis(10));
        assert!(task.cancel());
        assert!(!task.cancel());
        assert!(!task.fire_if_due(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let t0 = Instant::now();
        let mut task = Deferred::default();
        task.schedule(t0, Duration::from_millis(100));
        task.schedule(t0 + Duration::from_millis(50), Duration::from_millis(100));
        assert_eq!(task.due(), Some(t0 + Duration::from_millis(150)));
        assert!(!task.fire_if_due(t0 + Duration::from_millis(120)));
    }
}
