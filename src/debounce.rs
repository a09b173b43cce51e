use std::time::{Duration, Instant};

/// Trailing-edge debounce timer driven by caller-supplied instants.
///
/// Every `trigger` replaces the pending deadline; `poll` fires once the quiet
/// period after the latest trigger has elapsed, then disarms.
#[derive(Debug, Clone)]
pub(crate) struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
